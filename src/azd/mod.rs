// azd-env: Azure Developer CLI environment loader
//
// SPDX-FileCopyrightText: 2026 The azd-env Contributors
// SPDX-License-Identifier: MIT

//! Locating and invoking the Azure Developer CLI.
//!
//! ```text
//! AzdCli::get_values(cwd)
//!     |
//!     v
//! spawn "azd env get-values"        direct, resolution left to the OS
//!     |            \
//!     | started     \ io NotFound
//!     v              v
//! classify        which::which("azd")
//! exit 0           |           \
//!  -> stdout       | resolved   \ no match
//! marker           v             v
//!  -> NoProject  re-invoke     CommandNotFound
//! other            |
//!  -> Failed      classify
//! ```
//!
//! The direct spawn happens first; the explicit PATH search only runs after
//! the OS reports that the bare name did not resolve (notably the `azd.cmd`
//! shim on Windows, which `CreateProcess` does not find without a search).

use crate::error::{AzdError, AzdResult};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

/// Program name handed to the OS when no explicit path is configured.
const AZD_PROGRAM: &str = "azd";

/// Fixed argument vector for the one azd subcommand this crate consumes.
const GET_VALUES_ARGS: [&str; 2] = ["env", "get-values"];

/// Substring azd prints when the working directory holds no project.
///
/// Matched case-sensitively against both output streams; azd has moved its
/// diagnostics between stdout and stderr across releases.
const NO_PROJECT_MARKER: &str = "no project exists";

/// Captured output of one azd invocation.
#[derive(Debug, Clone)]
pub struct AzdOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl AzdOutput {
    /// Creates an output record from raw captured streams.
    #[must_use]
    pub const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Exit code of the invocation (`-1` when killed by a signal).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns true if the invocation exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Captured stdout, decoded lossily as UTF-8.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured stderr, decoded lossily as UTF-8.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Diagnostic text for error variants: stderr when azd wrote any,
    /// stdout otherwise. Outer whitespace is trimmed, nothing else.
    fn diagnostic(&self) -> String {
        let text = if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        text.trim().to_string()
    }

    fn contains(&self, marker: &str) -> bool {
        self.stdout.contains(marker) || self.stderr.contains(marker)
    }
}

/// Capability that produces the raw `azd env get-values` output.
///
/// The production implementation is [`AzdCli`]. Substituting this trait keeps
/// tests and embedders away from ambient state; a canned implementation makes
/// a load call fully deterministic.
pub trait AzdInvoker {
    /// Runs `azd env get-values` in `cwd` (or the caller's working directory
    /// when `None`) and returns the captured stdout of a successful run.
    ///
    /// # Errors
    ///
    /// Returns [`AzdError::CommandNotFound`] when the executable cannot be
    /// resolved, [`AzdError::NoProjectExists`] when azd reports that the
    /// directory holds no project, [`AzdError::CommandFailed`] for any other
    /// nonzero exit, and [`AzdError::Spawn`] when the OS refuses to start a
    /// resolved executable.
    fn get_values(&self, cwd: Option<&Path>) -> AzdResult<String>;
}

/// Invokes the azd CLI through [`std::process`].
///
/// By default the bare name `azd` is handed to the OS and the PATH-search
/// fallback covers platforms where direct resolution misses. Embedders that
/// already know where azd lives can pin it with [`AzdCli::with_program`].
#[derive(Debug, Clone, Default)]
pub struct AzdCli {
    program: Option<PathBuf>,
}

impl AzdCli {
    /// Creates an invoker that resolves `azd` through the ambient search
    /// path.
    #[must_use]
    pub const fn new() -> Self {
        Self { program: None }
    }

    /// Creates an invoker that runs a specific azd executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }

    /// The program this invoker spawns.
    #[must_use]
    pub fn program(&self) -> &Path {
        self.program
            .as_deref()
            .unwrap_or_else(|| Path::new(AZD_PROGRAM))
    }
}

impl AzdInvoker for AzdCli {
    fn get_values(&self, cwd: Option<&Path>) -> AzdResult<String> {
        let program = self.program();
        if let Some(dir) = cwd {
            debug!(cwd = %dir.display(), "cd");
        }
        debug!(cmd = %render_command(program), "exec");

        get_values_with(program, cwd, spawn_azd, |name| which::which(name).ok())
    }
}

/// Maps a completed invocation onto the error taxonomy.
///
/// Exit code 0 returns raw stdout untouched. The no-project marker in either
/// stream wins over the exit code; everything else becomes
/// [`AzdError::CommandFailed`] with the tool's diagnostic text verbatim.
///
/// # Errors
///
/// Returns [`AzdError::NoProjectExists`] or [`AzdError::CommandFailed`] for
/// nonzero exits.
pub fn classify(output: AzdOutput) -> AzdResult<String> {
    if output.success() {
        return Ok(output.stdout);
    }
    if output.contains(NO_PROJECT_MARKER) {
        return Err(AzdError::NoProjectExists {
            message: output.diagnostic(),
        });
    }
    Err(AzdError::CommandFailed {
        exit_code: output.exit_code,
        message: output.diagnostic(),
    })
}

/// Locate-and-invoke over injected spawn and search seams.
///
/// The production seams are [`spawn_azd`] and [`which::which`]; unit tests
/// drive the fallback path without touching the real PATH. At most one
/// re-invocation happens: when the re-resolved path fails to spawn too, the
/// error propagates as [`AzdError::Spawn`] rather than looping.
fn get_values_with<S, W>(
    program: &Path,
    cwd: Option<&Path>,
    spawn: S,
    search: W,
) -> AzdResult<String>
where
    S: Fn(&Path, Option<&Path>) -> io::Result<AzdOutput>,
    W: FnOnce(&Path) -> Option<PathBuf>,
{
    match spawn(program, cwd) {
        Ok(output) => classify(output),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(program = %program.display(), "direct spawn missed, searching PATH");
            let Some(resolved) = search(program) else {
                return Err(AzdError::CommandNotFound {
                    name: program.display().to_string(),
                });
            };
            trace!(resolved = %resolved.display(), "resolved azd through the search path");
            let output = spawn(resolved.as_path(), cwd).map_err(|source| AzdError::Spawn {
                command: render_command(&resolved),
                source,
            })?;
            classify(output)
        }
        Err(source) => Err(AzdError::Spawn {
            command: render_command(program),
            source,
        }),
    }
}

/// Spawns one azd invocation and captures both streams as text.
///
/// Blocks until the child exits. A child killed by a signal reports exit
/// code `-1`.
fn spawn_azd(program: &Path, cwd: Option<&Path>) -> io::Result<AzdOutput> {
    let mut command = Command::new(program);
    command
        .args(GET_VALUES_ARGS)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output()?;
    Ok(AzdOutput::new(
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    ))
}

/// Renders the full command line for logs and spawn errors.
fn render_command(program: &Path) -> String {
    let mut line = program.display().to_string();
    for arg in GET_VALUES_ARGS {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests;
