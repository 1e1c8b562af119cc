// azd-env: Azure Developer CLI environment loader
//
// SPDX-FileCopyrightText: 2026 The azd-env Contributors
// SPDX-License-Identifier: MIT

//! Load Azure Developer CLI (`azd`) environment values into the process
//! environment.
//!
//! # Crate Architecture
//!
//! ```text
//!                 load_azd_env(&LoadOptions)
//!                           |
//!                           v
//!     azd      AzdCli . . . azd env get-values
//!              spawn "azd" --- NotFound? --> which --> re-invoke
//!              exit 0    --> raw stdout
//!              "no project exists" --> NoProjectExists
//!              other nonzero       --> CommandFailed
//!                           |
//!                           v
//!     env      EnvSnapshot::parse   KEY=VALUE, first '=' splits
//!              ProcessEnv merge     keep existing unless override
//!                           |
//!                           v
//!                       Ok(bool)    "was there anything to load"
//!
//!   +---------------------------------------------------------+
//!   |  foundation: error (AzdError / AzdResult), tracing      |
//!   +---------------------------------------------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use azd_env::{LoadOptions, load_azd_env};
//!
//! # fn main() -> azd_env::AzdResult<()> {
//! let loaded = load_azd_env(&LoadOptions::default())?;
//! if loaded {
//!     println!("AZURE_ENV_NAME = {:?}", std::env::var("AZURE_ENV_NAME"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Thread safety
//!
//! Loading into [`StdEnv`] mutates the process-wide environment through
//! [`std::env::set_var`]. The crate does not serialize access to it: keep
//! other threads from reading or writing the environment while a load is in
//! progress, or load into a [`MapEnv`] instead. One call maps to one
//! synchronous `azd` invocation (two when the PATH-search fallback triggers);
//! there is no timeout and no retry beyond that fallback.

pub mod azd;
pub mod env;
pub mod error;
pub mod loader;

pub use azd::{AzdCli, AzdInvoker};
pub use env::{EnvSnapshot, MapEnv, ProcessEnv, StdEnv};
pub use error::{AzdError, AzdResult};
pub use loader::{LoadOptions, load_azd_env, load_azd_env_in};
