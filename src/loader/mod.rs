// azd-env: Azure Developer CLI environment loader
//
// SPDX-FileCopyrightText: 2026 The azd-env Contributors
// SPDX-License-Identifier: MIT

//! The public entry point: fetch azd values and merge them.
//!
//! ```text
//! load_azd_env(&LoadOptions)
//!     |
//!     |  AzdCli + StdEnv
//!     v
//! load_azd_env_in(invoker, env, options)
//!     invoker.get_values(cwd)
//!       quiet? NoProjectExists / CommandFailed --> treat as empty output
//!       CommandNotFound / Spawn --> propagate regardless
//!     EnvSnapshot::parse
//!     each pair: absent or override --> env.set
//!     |
//!     v
//! Ok(bool)   true iff the snapshot held at least one pair
//! ```

use crate::azd::{AzdCli, AzdInvoker};
use crate::env::{EnvSnapshot, ProcessEnv, StdEnv};
use crate::error::AzdResult;
use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options for one load call.
///
/// `override_existing` and `quiet` default to off: existing variables win
/// and azd's failures propagate as errors.
#[derive(Debug, Clone, Builder)]
pub struct LoadOptions {
    #[builder(setters(name = with_cwd))]
    cwd: Option<PathBuf>,
    #[builder(setters(name = with_override), default = false)]
    override_existing: bool,
    #[builder(setters(name = with_quiet), default = false)]
    quiet: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LoadOptions {
    /// Working directory override, if set.
    #[must_use]
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Whether existing variables get overwritten.
    #[must_use]
    pub const fn override_existing(&self) -> bool {
        self.override_existing
    }

    /// Whether azd's own failures are swallowed.
    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Fetches `azd env get-values` output and loads it into the process
/// environment.
///
/// Returns `Ok(true)` when azd reported at least one variable, whether or
/// not any write happened (existing keys are kept unless
/// `override_existing` is set), and `Ok(false)` when there was nothing to
/// load.
///
/// # Errors
///
/// Propagates the invoker's [`AzdError`](crate::error::AzdError)
/// classification. With `quiet` set, failures reported by a tool that
/// actually ran ([`NoProjectExists`](crate::error::AzdError::NoProjectExists)
/// and [`CommandFailed`](crate::error::AzdError::CommandFailed)) are
/// swallowed and reported as `Ok(false)`; an unresolvable or unspawnable
/// executable propagates regardless.
pub fn load_azd_env(options: &LoadOptions) -> AzdResult<bool> {
    load_azd_env_in(&AzdCli::new(), &mut StdEnv, options)
}

/// [`load_azd_env`] over caller-supplied capabilities.
///
/// Substituting the invoker or the target environment keeps callers away
/// from ambient state: a canned [`AzdInvoker`] makes a run deterministic and
/// a [`MapEnv`](crate::env::MapEnv) target collects variables without
/// touching the process environment.
///
/// # Errors
///
/// Same classification and suppression rules as [`load_azd_env`].
pub fn load_azd_env_in(
    invoker: &impl AzdInvoker,
    env: &mut impl ProcessEnv,
    options: &LoadOptions,
) -> AzdResult<bool> {
    let raw = match invoker.get_values(options.cwd()) {
        Ok(raw) => raw,
        Err(err) if options.quiet() && err.is_suppressible() => {
            debug!(error = %err, "azd reported no usable environment, continuing quietly");
            String::new()
        }
        Err(err) => return Err(err),
    };

    let snapshot = EnvSnapshot::parse(&raw);

    let mut written = 0_usize;
    for (key, value) in snapshot.iter() {
        if options.override_existing() || !env.contains(key) {
            env.set(key, value);
            written += 1;
        }
    }

    debug!(captured = snapshot.len(), written = written, "merged azd environment");
    Ok(!snapshot.is_empty())
}
