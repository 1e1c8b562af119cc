// azd-env: Azure Developer CLI environment loader
//
// SPDX-FileCopyrightText: 2026 The azd-env Contributors
// SPDX-License-Identifier: MIT

//! The process-environment capability and its implementations.

use std::collections::BTreeMap;

/// Write access to an environment the loader can merge into.
///
/// [`StdEnv`] is the calling process's ambient environment; [`MapEnv`] is an
/// in-memory stand-in for tests and dry-run collection.
pub trait ProcessEnv {
    /// Returns true if `key` is currently present.
    fn contains(&self, key: &str) -> bool;

    /// Sets `key` to `value`.
    fn set(&mut self, key: &str, value: &str);
}

/// The calling process's environment.
///
/// Reads go through [`std::env::var_os`], writes through
/// [`std::env::set_var`]. The crate does not serialize access to the process
/// environment; the caller keeps other threads away from it while a load is
/// in progress (see the crate-level docs).
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnv;

impl ProcessEnv for StdEnv {
    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: the crate-level contract keeps the environment
        // single-threaded for the duration of a load, so this cannot race a
        // concurrent getenv.
        unsafe { std::env::set_var(key, value) };
    }
}

/// In-memory environment backed by a `BTreeMap` for deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment pre-populated from a map.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }

    /// Iterates variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Number of variables set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl ProcessEnv for MapEnv {
    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
