//! The end-to-end resolution query: which remotes of a repository point into
//! registered anchors.
//!
//! Given a witness folder anywhere inside a repository, the resolver locates
//! the enclosing repository root, lists its remotes, and matches each remote
//! target that looks like a local bare-repository path against the registered
//! anchors — by the *physical identity* of the target's parent folder, so an
//! anchor is found even when the remote target and the registered anchor
//! spell the same folder differently (case, symlink, alternate mount point).
//!
//! # Public API
//! - [`RemoteMapping`]: one resolved (repository, anchor, target) binding
//! - [`resolve_mappings`]: the full query including process invocation
//! - [`resolve_from_catalog`]: the pure matching stage over a parsed catalog
//!
//! "Not inside a repo" and "git failed" are ordinary empty outcomes, not
//! errors. Result order follows remote-listing order, then target order
//! within a remote, then anchor-match order; no further sort is imposed.

use crate::core::error::Result;
use crate::core::remotes::{RemoteCatalog, RemoteTarget};
use crate::core::repo::RepoRoot;
use crate::core::runner::git_remotes;
use crate::core::store::SettingsStore;
use std::env;
use std::path::{Path, PathBuf};

/// A resolved binding between a repository, a registered anchor, and one
/// remote target whose folder lives inside that anchor. Denormalized and
/// read-only; produced fresh on each resolution call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMapping {
    repo_root: PathBuf,
    anchor_name: String,
    anchor_folder: PathBuf,
    target: RemoteTarget,
}

impl RemoteMapping {
    /// The root folder of the repository the mapping was resolved for.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// The logical name of the anchor.
    pub fn anchor_name(&self) -> &str {
        &self.anchor_name
    }

    /// The anchor's folder: the parent of the target's bare repository.
    pub fn anchor_folder(&self) -> &Path {
        &self.anchor_folder
    }

    /// The matched remote target.
    pub fn target(&self) -> &RemoteTarget {
        &self.target
    }

    /// The target folder (the bare repository inside the anchor).
    pub fn target_folder(&self) -> &str {
        self.target.target()
    }

    /// The name of the remote. May or may not equal the anchor name.
    pub fn remote_name(&self) -> &str {
        self.target.remote_name()
    }

    /// The access mode of the matched target ("fetch" or "push").
    pub fn mode(&self) -> &str {
        self.target.mode()
    }
}

/// True if a remote target string is a local absolute filesystem path rather
/// than a URL or an scp-style `user@host:path` reference.
fn looks_like_local_path(target: &str) -> bool {
    !target.contains("://") && Path::new(target).is_absolute()
}

/// Calculate the anchor mappings for the repository containing `witness`
/// (default: the process's current folder), optionally restricted to one
/// access mode. Empty when no repository encloses the witness or the remote
/// listing is unavailable.
pub fn resolve_mappings(
    store: &mut SettingsStore,
    witness: Option<&Path>,
    mode: Option<&str>,
) -> Result<Vec<RemoteMapping>> {
    let witness = match witness {
        Some(folder) => folder.to_path_buf(),
        None => env::current_dir()?,
    };
    let Some(root) = RepoRoot::locate_from(&witness) else {
        return Ok(Vec::new());
    };
    let Some(catalog) = git_remotes(root.folder())? else {
        return Ok(Vec::new());
    };
    resolve_from_catalog(store, &root, &catalog, mode)
}

/// The matching stage of [`resolve_mappings`], separated from process
/// invocation: match every qualifying target of `catalog` against the
/// registered anchors.
pub fn resolve_from_catalog(
    store: &mut SettingsStore,
    root: &RepoRoot,
    catalog: &RemoteCatalog,
    mode: Option<&str>,
) -> Result<Vec<RemoteMapping>> {
    let mut mappings = Vec::new();
    for remote in catalog.iter() {
        for target in remote.targets() {
            if mode.is_some_and(|mode| mode != target.mode()) {
                continue;
            }
            if !looks_like_local_path(target.target()) {
                continue;
            }
            let target_path = Path::new(target.target());
            if !target_path.is_dir() {
                continue;
            }
            let Some(parent) = target_path.parent() else {
                continue;
            };
            if parent.as_os_str().is_empty() {
                continue;
            }
            for (name, info) in store.find_anchors_by_folder(parent)? {
                mappings.push(RemoteMapping {
                    repo_root: root.folder().to_path_buf(),
                    anchor_name: name,
                    anchor_folder: info.folder,
                    target: target.clone(),
                });
            }
        }
    }
    Ok(mappings)
}
