//! Git repository management and setup utilities
//!
//! Provides functions for creating working repositories, bare backup targets,
//! and remotes wired between them, all inside temporary directories.

#![allow(dead_code)]

use git_anchors::core::error::{AnchorError, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn run_git(args: &[&str], cwd: &Path) -> Result<()> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(AnchorError::Io)?;
    Ok(())
}

/// Sets up a fresh git working repository for testing
///
/// Creates a temporary directory, initializes it as a git repository,
/// and sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(AnchorError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();

    run_git(&["init"], &repo_path)?;
    run_git(&["config", "user.name", "Test User"], &repo_path)?;
    run_git(&["config", "user.email", "test@example.com"], &repo_path)?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Creates a bare repository at the given path via `git init --bare`
pub fn create_bare_repo(path: &Path) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(parent).map_err(AnchorError::Io)?;
    let path_str = path.to_string_lossy();
    std::process::Command::new("git")
        .args(["init", "--bare", path_str.as_ref()])
        .output()
        .map_err(AnchorError::Io)?;
    Ok(())
}

/// Adds a remote to the repository at `repo_path`
pub fn git_remote_add(repo_path: &Path, name: &str, target: &str) -> Result<()> {
    run_git(&["remote", "add", name, target], repo_path)
}
