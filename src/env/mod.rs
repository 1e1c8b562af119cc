// azd-env: Azure Developer CLI environment loader
//
// SPDX-FileCopyrightText: 2026 The azd-env Contributors
// SPDX-License-Identifier: MIT

//! Environment snapshot parsing and the process-environment capability.
//!
//! ```text
//! azd stdout ---> EnvSnapshot::parse
//!                   trim lines, skip blanks
//!                   first '=' splits, empty keys dropped
//!                   duplicate key: first position, last value
//!                        |
//!                        v
//!                 ProcessEnv (capability)
//!                   StdEnv   std::env, the real process environment
//!                   MapEnv   BTreeMap, tests and dry-run collection
//! ```

pub mod container;
pub mod snapshot;

pub use container::{MapEnv, ProcessEnv, StdEnv};
pub use snapshot::EnvSnapshot;
