// azd-env: Azure Developer CLI environment loader
//
// SPDX-FileCopyrightText: 2026 The azd-env Contributors
// SPDX-License-Identifier: MIT

use super::{AzdCli, AzdInvoker, AzdOutput, classify, get_values_with, render_command};
use crate::error::AzdError;
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

fn ok_output(stdout: &str) -> AzdOutput {
    AzdOutput::new(0, stdout.to_string(), String::new())
}

fn failed_output(exit_code: i32, stdout: &str, stderr: &str) -> AzdOutput {
    AzdOutput::new(exit_code, stdout.to_string(), stderr.to_string())
}

// --- Classification ---

#[test]
fn test_classify_success_returns_stdout_untouched() {
    let raw = classify(ok_output("A=1\nB=2\n")).unwrap();
    assert_eq!(raw, "A=1\nB=2\n");
}

#[test]
fn test_classify_success_ignores_stderr_noise() {
    let output = AzdOutput::new(0, "A=1\n".to_string(), "WARNING: update available\n".to_string());
    assert_eq!(classify(output).unwrap(), "A=1\n");
}

#[test]
fn test_classify_no_project_marker_on_stderr() {
    let stderr = "\nERROR: no project exists; to create a new project, run `azd init`.\n";
    let err = classify(failed_output(1, "", stderr)).unwrap_err();
    match err {
        AzdError::NoProjectExists { message } => {
            assert!(message.contains("no project exists"));
            assert!(!message.starts_with('\n'), "diagnostic should be trimmed");
        }
        other => panic!("expected NoProjectExists, got {other:?}"),
    }
}

#[test]
fn test_classify_no_project_marker_on_stdout() {
    let stdout = "ERROR: no project exists; to create a new project, run `azd init`.\n";
    let err = classify(failed_output(1, stdout, "")).unwrap_err();
    assert!(matches!(err, AzdError::NoProjectExists { .. }));
}

#[test]
fn test_classify_other_failure_keeps_exit_code() {
    let err = classify(failed_output(3, "", "ERROR: not logged in\n")).unwrap_err();
    match err {
        AzdError::CommandFailed { exit_code, message } => {
            assert_eq!(exit_code, 3);
            assert_eq!(message, "ERROR: not logged in");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn test_classify_prefers_stderr_diagnostic() {
    let err = classify(failed_output(1, "partial output\n", "ERROR: the real story\n")).unwrap_err();
    match err {
        AzdError::CommandFailed { message, .. } => assert_eq!(message, "ERROR: the real story"),
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn test_classify_falls_back_to_stdout_diagnostic() {
    let err = classify(failed_output(1, "ERROR: printed on stdout\n", "  \n")).unwrap_err();
    match err {
        AzdError::CommandFailed { message, .. } => assert_eq!(message, "ERROR: printed on stdout"),
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

// --- Locate-and-invoke fallback ---

#[test]
fn test_fallback_resolves_and_reinvokes() {
    let calls = RefCell::new(Vec::new());
    let spawn = |program: &Path, _cwd: Option<&Path>| -> io::Result<AzdOutput> {
        calls.borrow_mut().push(program.to_path_buf());
        if program == Path::new("azd") {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        } else {
            Ok(ok_output("TEST_VAR=value\n"))
        }
    };
    let search = |_: &Path| -> Option<PathBuf> { Some(PathBuf::from("/mock/path/to/azd")) };

    let raw = get_values_with(Path::new("azd"), None, spawn, search).unwrap();
    assert_eq!(raw, "TEST_VAR=value\n");
    assert_eq!(
        calls.into_inner(),
        vec![PathBuf::from("azd"), PathBuf::from("/mock/path/to/azd")]
    );
}

#[test]
fn test_fallback_search_miss_is_command_not_found() {
    let spawn = |_: &Path, _: Option<&Path>| -> io::Result<AzdOutput> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
    };
    let search = |_: &Path| -> Option<PathBuf> { None };

    let err = get_values_with(Path::new("azd"), None, spawn, search).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"azd executable not found: 'azd' (not in PATH)");
}

#[test]
fn test_fallback_reinvocation_classifies_failures_too() {
    let spawn = |program: &Path, _cwd: Option<&Path>| -> io::Result<AzdOutput> {
        if program == Path::new("azd") {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        } else {
            Ok(failed_output(1, "", "ERROR: no project exists\n"))
        }
    };
    let search = |_: &Path| -> Option<PathBuf> { Some(PathBuf::from("/mock/path/to/azd")) };

    let err = get_values_with(Path::new("azd"), None, spawn, search).unwrap_err();
    assert!(matches!(err, AzdError::NoProjectExists { .. }));
}

#[test]
fn test_non_not_found_spawn_error_skips_search() {
    let spawn = |_: &Path, _: Option<&Path>| -> io::Result<AzdOutput> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    };
    let search = |_: &Path| -> Option<PathBuf> { unreachable!("search must not run") };

    let err = get_values_with(Path::new("azd"), None, spawn, search).unwrap_err();
    match err {
        AzdError::Spawn { command, source } => {
            assert_eq!(command, "azd env get-values");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected Spawn, got {other:?}"),
    }
}

#[test]
fn test_second_spawn_failure_is_spawn_not_a_loop() {
    let spawn = |program: &Path, _cwd: Option<&Path>| -> io::Result<AzdOutput> {
        if program == Path::new("azd") {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        } else {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    };
    let search = |_: &Path| -> Option<PathBuf> { Some(PathBuf::from("/mock/path/to/azd")) };

    let err = get_values_with(Path::new("azd"), None, spawn, search).unwrap_err();
    match err {
        AzdError::Spawn { command, .. } => {
            assert_eq!(command, "/mock/path/to/azd env get-values");
        }
        other => panic!("expected Spawn, got {other:?}"),
    }
}

#[test]
fn test_cwd_reaches_the_spawn_seam() {
    let seen = RefCell::new(None);
    let spawn = |_: &Path, cwd: Option<&Path>| -> io::Result<AzdOutput> {
        *seen.borrow_mut() = cwd.map(Path::to_path_buf);
        Ok(ok_output(""))
    };
    let search = |_: &Path| -> Option<PathBuf> { None };

    get_values_with(Path::new("azd"), Some(Path::new("/tmp/project")), spawn, search).unwrap();
    assert_eq!(seen.into_inner(), Some(PathBuf::from("/tmp/project")));
}

// --- AzdCli ---

#[test]
fn test_program_defaults_to_bare_name() {
    assert_eq!(AzdCli::new().program(), Path::new("azd"));
    assert_eq!(
        AzdCli::with_program("/opt/azd/azd").program(),
        Path::new("/opt/azd/azd")
    );
}

#[test]
fn test_missing_executable_is_command_not_found() {
    // Bare spawn fails with NotFound and the PATH search cannot resolve the
    // name either, so this exercises the full fallback against the real OS.
    let cli = AzdCli::with_program("azd-env-test-no-such-binary");
    let err = cli.get_values(None).unwrap_err();
    assert!(matches!(err, AzdError::CommandNotFound { .. }));
}

#[test]
fn test_render_command() {
    insta::assert_snapshot!(render_command(Path::new("azd")), @"azd env get-values");
}
