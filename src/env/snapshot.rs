// azd-env: Azure Developer CLI environment loader
//
// SPDX-FileCopyrightText: 2026 The azd-env Contributors
// SPDX-License-Identifier: MIT

//! Parsing `azd env get-values` output into an ordered snapshot.

use tracing::{Level, debug, enabled, trace};

/// Ordered key/value pairs parsed from one `azd env get-values` run.
///
/// Pairs keep azd's output order. Keys are unique within a snapshot: azd
/// itself emits unique keys, and if a key nonetheless repeats the snapshot
/// keeps the first occurrence's position and the last occurrence's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pairs: Vec<(String, String)>,
}

impl EnvSnapshot {
    /// Parses newline-separated `KEY=VALUE` text.
    ///
    /// Lines are trimmed; blank lines, lines without `=`, and lines with an
    /// empty key are skipped. The first `=` delimits, so values keep any
    /// further `=` characters. Values are verbatim: no quoting, escaping or
    /// expansion rules apply, and azd's own double quotes stay in place.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut pairs: Vec<(String, String)> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(eq_pos) = line.find('=') else {
                trace!(line = line, "skipping line without delimiter");
                continue;
            };

            let key = &line[..eq_pos];
            let value = &line[eq_pos + 1..];
            if key.is_empty() {
                trace!(line = line, "skipping line with empty key");
                continue;
            }

            if enabled!(Level::TRACE) {
                trace!(key = key, value = value, "captured env var");
            }

            if let Some(slot) = pairs.iter_mut().find(|(existing, _)| existing == key) {
                slot.1 = value.to_string();
            } else {
                pairs.push((key.to_string(), value.to_string()));
            }
        }

        debug!(count = pairs.len(), "parsed azd environment snapshot");
        Self { pairs }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the snapshot holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}
