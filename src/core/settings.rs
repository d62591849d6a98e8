//! Persisted settings data model.
//!
//! This module defines the JSON-serializable settings root ([`Settings`]) and
//! the per-anchor record ([`AnchorInfo`]). The settings value is the single
//! serialized source of truth for all registered anchors; the surrounding
//! store (see [`crate::core::store`]) owns the one live instance and controls
//! when it is loaded and flushed.
//!
//! # Public API
//! - [`AnchorInfo`]: an anchor's content (currently just its folder)
//! - [`Settings`]: the persisted root object (`version` + named anchors)
//! - [`SETTINGS_VERSION`]: the current settings file format version
//!
//! # Wire format
//! ```json
//! { "version": 1, "anchors": { "backup1": { "folder": "/data/repos" } } }
//! ```
//! Anchor name keys are stored verbatim but compared case-insensitively in
//! memory.

use crate::core::identity::FolderIdentity;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The currently implemented version of the settings file format
pub const SETTINGS_VERSION: i32 = 1;

/// Content for an anchor, excluding its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorInfo {
    /// The folder acting as anchor for bare backup repositories.
    pub folder: PathBuf,
}

impl AnchorInfo {
    /// Create a new AnchorInfo, normalizing the folder to an absolute path.
    ///
    /// The folder is not required to exist: an anchor may live on removable
    /// or network storage that is not currently mounted. A missing folder
    /// only produces a warning.
    pub fn new(folder: impl AsRef<Path>) -> Self {
        let folder = normalize_absolute(folder.as_ref());
        if !folder.is_dir() {
            warn!("Anchor folder '{}' does not exist", folder.display());
        }
        AnchorInfo { folder }
    }
}

/// Normalize a path to absolute form without touching the filesystem
/// (no symlink resolution; the physical comparison is [`FolderIdentity`]'s job).
pub(crate) fn normalize_absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Model for the per-user git-anchors settings. JSON serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The version of the settings file format.
    pub version: i32,
    /// The registered anchors, keyed by name. Keys are stored verbatim but
    /// are unique under case-insensitive comparison.
    pub anchors: BTreeMap<String, AnchorInfo>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SETTINGS_VERSION,
            anchors: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Look up an anchor by name, case-insensitively.
    pub fn get_anchor(&self, name: &str) -> Option<(&str, &AnchorInfo)> {
        self.anchors
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(key, info)| (key.as_str(), info))
    }

    /// True if an anchor with this name (case-insensitive) is registered.
    pub fn contains_anchor(&self, name: &str) -> bool {
        self.get_anchor(name).is_some()
    }

    /// Return every anchor whose folder denotes the same physical folder on
    /// disk as `folder`. Empty when `folder` is inaccessible.
    pub fn find_same_folders(&self, folder: &Path) -> Vec<(&str, &AnchorInfo)> {
        match FolderIdentity::of(folder) {
            Some(id) => self.find_same_folders_by_id(&id),
            None => Vec::new(),
        }
    }

    /// Return every anchor whose folder has the given physical identity.
    pub fn find_same_folders_by_id(&self, id: &FolderIdentity) -> Vec<(&str, &AnchorInfo)> {
        self.anchors
            .iter()
            .filter(|(_, info)| id.same_as(&info.folder))
            .map(|(name, info)| (name.as_str(), info))
            .collect()
    }
}
