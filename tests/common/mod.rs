//! Shared integration-test harness for running the `nodedata` binary as a
//! child process against the files in `tests/fixtures`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Runs `nodedata` with `args` and waits for it to exit.
///
/// Logging is silenced through `--quiet` unless the caller passes its own
/// verbosity flags, and the input environment variables are cleared so
/// the host environment cannot leak into a test.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_nodedata");
    Command::new(bin)
        .args(args)
        .env_remove("NODEDATA_CONFIG")
        .env_remove("NODEDATA_TABLE")
        .env_remove("NODEDATA_LOG_LEVEL")
        .env_remove("NODEDATA_COLOR")
        .output()
        .expect("failed to spawn nodedata")
}

/// Runs `nodedata` with extra environment variables.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_nodedata");
    let mut command = Command::new(bin);
    command
        .args(args)
        .env_remove("NODEDATA_CONFIG")
        .env_remove("NODEDATA_TABLE")
        .env_remove("NODEDATA_LOG_LEVEL");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("failed to spawn nodedata")
}

/// Returns the path to a test fixture.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Returns the path to a test fixture as a `String` for use as an argument.
#[must_use]
pub fn fixture(name: &str) -> String {
    fixture_path(name).display().to_string()
}

/// Lossy UTF-8 view of the captured stdout.
#[must_use]
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy UTF-8 view of the captured stderr.
#[must_use]
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Collects the `index: value` lines of a text block as `(index, value)`.
#[must_use]
pub fn numbered_values(block: &str) -> Vec<(usize, f64)> {
    block
        .lines()
        .filter_map(|line| {
            let (index, value) = line.split_once(": ")?;
            Some((index.parse().ok()?, value.parse().ok()?))
        })
        .collect()
}
