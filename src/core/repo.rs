//! Repository root discovery and layout classification.
//!
//! Git repositories come in two layouts: a *bare* repository is itself the
//! metadata folder, while a *working copy* keeps its metadata in a nested
//! `.git` subfolder. This module classifies folders structurally (by the
//! presence of `objects/`, `refs/` and `config`, never by name alone) and
//! finds the nearest enclosing repository root by walking parent folders.
//!
//! # Public API
//! - [`RepoKind`]: classification outcome for a folder
//! - [`RepoRoot`]: a located repository root plus its metadata folder
//! - [`is_repo_meta_folder`], [`classify`]: structural checks
//!
//! A [`RepoRoot`] is constructed transiently for one resolution pass and is
//! never cached across calls; the filesystem can change between invocations.

use crate::core::settings::normalize_absolute;
use std::path::{Path, PathBuf};

/// The potential outcomes of testing a folder for being a git repository root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoKind {
    /// The folder is not a repository root (but may yet be inside one).
    NotARepo,
    /// The folder is a working copy with a nested `.git` metadata folder.
    WorkingCopy,
    /// The folder is a bare repository: it is the metadata folder itself.
    Bare,
}

/// Test if the folder looks like a git metadata folder: it contains an
/// `objects` subfolder, a `refs` subfolder, and a `config` file.
pub fn is_repo_meta_folder(folder: &Path) -> bool {
    folder.join("objects").is_dir()
        && folder.join("refs").is_dir()
        && folder.join("config").is_file()
}

/// Classify a folder as a repository root.
///
/// A folder literally named `.git` is never a root itself: it is metadata
/// belonging to its parent, even when it has the full meta structure.
pub fn classify(folder: &Path) -> RepoKind {
    if !folder.is_dir() {
        return RepoKind::NotARepo;
    }
    let named_dot_git = folder
        .file_name()
        .is_some_and(|name| name.eq_ignore_ascii_case(".git"));
    if named_dot_git {
        return RepoKind::NotARepo;
    }
    if is_repo_meta_folder(folder) {
        return RepoKind::Bare;
    }
    let git_folder = folder.join(".git");
    if git_folder.is_dir() && is_repo_meta_folder(&git_folder) {
        RepoKind::WorkingCopy
    } else {
        RepoKind::NotARepo
    }
}

/// A folder that is a git repository root, either bare or a working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoot {
    folder: PathBuf,
    git_meta_folder: PathBuf,
}

impl RepoRoot {
    fn new(folder: PathBuf, kind: RepoKind) -> RepoRoot {
        let git_meta_folder = match kind {
            RepoKind::Bare => folder.clone(),
            _ => folder.join(".git"),
        };
        RepoRoot {
            folder,
            git_meta_folder,
        }
    }

    /// The root folder of the repository.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// The folder where the git metadata lives: the root itself for a bare
    /// repository, or its `.git` subfolder for a working copy.
    pub fn git_meta_folder(&self) -> &Path {
        &self.git_meta_folder
    }

    /// True for a bare repository.
    pub fn is_bare(&self) -> bool {
        self.git_meta_folder == self.folder
    }

    /// Locate the nearest enclosing repository root by walking up the folder
    /// tree from `start`, so any subfolder of a working copy can serve as the
    /// witness. Returns `None` when `start` does not exist or the filesystem
    /// root is reached without a match.
    pub fn locate_from(start: &Path) -> Option<RepoRoot> {
        let start = normalize_absolute(start);
        if !start.is_dir() {
            return None;
        }
        let mut current = start.as_path();
        loop {
            match classify(current) {
                RepoKind::NotARepo => current = current.parent()?,
                kind => return Some(RepoRoot::new(current.to_path_buf(), kind)),
            }
        }
    }
}
