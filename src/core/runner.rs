//! Blocking invocation of external commands, primarily the `git` executable.
//!
//! The contract is deliberately small: run a command in a working folder,
//! capture standard output and standard error fully as ordered line
//! sequences, and report the numeric exit status. The call blocks until the
//! child exits and every buffered line has been drained; there is no timeout.
//!
//! # Public API
//! - [`RunResult`]: captured outcome of one command invocation
//! - [`run_to_lines`]: the generic process contract
//! - [`git_remotes`], [`git_init_bare`], [`git_remote_add`]: git helpers
//!
//! A non-zero exit status from `git remote -v` means "no data available", not
//! an error: the resolver stays total over every reachable filesystem state.

use crate::core::error::Result;
use crate::core::remotes::RemoteCatalog;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Captured outcome of one external command invocation.
#[derive(Debug, Clone)]
pub struct RunResult {
    status: i32,
    stdout_lines: Vec<String>,
    stderr_lines: Vec<String>,
    args: Vec<String>,
}

impl RunResult {
    /// The numeric exit status (-1 when the child was killed by a signal).
    pub fn status(&self) -> i32 {
        self.status
    }

    /// True if the command exited with status 0.
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Standard output, split on line boundaries with terminators trimmed.
    pub fn stdout_lines(&self) -> &[String] {
        &self.stdout_lines
    }

    /// Standard error, split the same way.
    pub fn stderr_lines(&self) -> &[String] {
        &self.stderr_lines
    }

    /// The arguments the command was invoked with.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Run `command args...` in `cwd` (or the current folder), blocking until it
/// exits with all output drained. Failure to spawn the process at all is an
/// I/O error; a non-zero exit is reported through [`RunResult::status`].
pub fn run_to_lines(command: &str, args: &[&str], cwd: Option<&Path>) -> Result<RunResult> {
    let mut cmd = Command::new(command);
    cmd.args(args);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    debug!("running: {} {}", command, args.join(" "));
    let output = cmd.output()?;
    Ok(RunResult {
        status: output.status.code().unwrap_or(-1),
        stdout_lines: split_lines(&output.stdout),
        stderr_lines: split_lines(&output.stderr),
        args: args.iter().map(|a| a.to_string()).collect(),
    })
}

/// List the remotes of the repository at `repo_root` via `git remote -v`.
/// A non-zero git exit yields `Ok(None)` ("no data"), never an error.
pub fn git_remotes(repo_root: &Path) -> Result<Option<RemoteCatalog>> {
    let result = run_to_lines("git", &["remote", "-v"], Some(repo_root))?;
    if !result.success() {
        debug!(
            "git remote -v exited with status {} in '{}'",
            result.status(),
            repo_root.display()
        );
        return Ok(None);
    }
    Ok(Some(RemoteCatalog::from_lines(result.stdout_lines())))
}

/// Create a new bare repository in `folder`.
pub fn git_init_bare(folder: &Path) -> Result<RunResult> {
    let folder = folder.to_string_lossy();
    run_to_lines("git", &["init", "--bare", folder.as_ref()], None)
}

/// Add a remote named `name` pointing at `target` to the repository at `repo`.
pub fn git_remote_add(repo: &Path, name: &str, target: &str) -> Result<RunResult> {
    run_to_lines("git", &["remote", "add", name, target], Some(repo))
}
