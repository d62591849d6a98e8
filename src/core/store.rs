//! The settings store: the single in-process authority over registered anchors.
//!
//! [`SettingsStore`] owns the one live [`Settings`] value with controlled
//! durability: the settings file is read lazily on first access, mutations set
//! a dirty flag, and [`SettingsStore::flush_if_dirty`] writes back exactly when
//! something changed. A missing or corrupt settings file never blocks the tool:
//! it degrades to empty settings and is immediately re-written (self-healed).
//!
//! # Public API
//! - [`SettingsStore`]: load/flush lifecycle plus anchor registration and lookup
//! - [`Anchor`]: lightweight handle to a registered anchor
//! - [`is_valid_anchor_name`]: anchor name validation
//!
//! # Ownership model
//! The store exclusively owns the settings value; an [`Anchor`] holds only its
//! name and a non-owning reference to the store, re-deriving its current
//! [`AnchorInfo`] through the store on every access. A forced reload can swap
//! the settings wholesale, so a handle never caches info — after a reload it
//! simply observes the new state (or reports the anchor as gone).
//!
//! # Limitations
//! Single-process use only. Two processes racing to add anchors overwrite each
//! other at the file level (last write wins); there is no cross-process lock.

use crate::core::dirs::get_settings_directory;
use crate::core::error::{AnchorError, Result};
use crate::core::settings::{normalize_absolute, AnchorInfo, Settings};
use log::warn;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Name of the settings file inside the settings folder.
const SETTINGS_FILE: &str = "settings.json";

/// Name of the hidden marker subfolder created inside each anchor folder.
const TAG_FOLDER: &str = ".git-anchors";

/// Name of the metadata marker file inside the tag folder.
const TAG_METADATA_FILE: &str = "metadata.json";

fn anchor_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9]*([-_.][A-Za-z0-9]+)*$").expect("valid pattern")
    })
}

/// Check if the given anchor name is deemed valid.
///
/// Valid names are 3 to 30 characters: one or more identifier-like segments
/// (alphanumeric, starting with a letter) joined by single '-', '_' or '.'
/// separators. No leading, trailing, or doubled separators. This keeps anchor
/// names safe to use as path components downstream.
pub fn is_valid_anchor_name(name: &str) -> bool {
    if name.is_empty() || name.len() < 3 || name.len() > 30 {
        return false;
    }
    anchor_name_pattern().is_match(name)
}

/// The folder holding the per-user settings, plus the cached settings value.
#[derive(Debug)]
pub struct SettingsStore {
    folder: PathBuf,
    settings: Settings,
    /// Lowercased name -> verbatim settings key, rebuilt on every (re)load.
    index: HashMap<String, String>,
    loaded: bool,
    dirty: bool,
}

impl SettingsStore {
    /// Open a settings store rooted at `folder`, or at the per-user default
    /// settings directory when `None`. The folder is created if absent; the
    /// settings file itself is not read until first access.
    pub fn open(folder: Option<PathBuf>) -> Result<Self> {
        let folder = match folder {
            Some(folder) => normalize_absolute(&folder),
            None => get_settings_directory()?,
        };
        fs::create_dir_all(&folder)?;
        Ok(SettingsStore {
            folder,
            settings: Settings::default(),
            index: HashMap::new(),
            loaded: false,
            dirty: false,
        })
    }

    /// The folder where the settings are stored.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn settings_file(&self) -> PathBuf {
        self.folder.join(SETTINGS_FILE)
    }

    /// True if the settings have been modified but not yet saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the settings to be saved the next time [`Self::flush_if_dirty`]
    /// is called. Idempotent.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Get the settings, reading the settings file on first call or when
    /// `force_reload` is set; otherwise the cached value is returned.
    ///
    /// A missing or unparseable settings file is substituted by an empty
    /// settings value and immediately flushed back, so this never fails on
    /// malformed persisted state — only on real storage I/O errors.
    pub fn load(&mut self, force_reload: bool) -> Result<&Settings> {
        if !self.loaded || force_reload {
            let file = self.settings_file();
            self.settings = if file.is_file() {
                let text = fs::read_to_string(&file)
                    .map_err(|e| AnchorError::settings_read(&file, e))?;
                match serde_json::from_str(&text) {
                    Ok(settings) => settings,
                    Err(e) => {
                        warn!(
                            "Settings file '{}' is empty or invalid ({}); starting empty",
                            file.display(),
                            e
                        );
                        self.dirty = true;
                        Settings::default()
                    }
                }
            } else {
                self.dirty = true;
                Settings::default()
            };
            self.rebuild_index();
            self.loaded = true;
            self.flush_if_dirty()?;
        }
        Ok(&self.settings)
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .settings
            .anchors
            .keys()
            .map(|name| (name.to_ascii_lowercase(), name.clone()))
            .collect();
    }

    /// Write the settings to the settings file iff they are dirty, then clear
    /// the flag. Returns whether a write occurred; a no-op when clean.
    pub fn flush_if_dirty(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        let file = self.settings_file();
        let json =
            serde_json::to_string_pretty(&self.settings).map_err(AnchorError::settings_serialize)?;
        fs::write(&file, json).map_err(|e| AnchorError::settings_write(&file, e))?;
        self.dirty = false;
        Ok(true)
    }

    /// Register a new anchor.
    ///
    /// The name must pass [`is_valid_anchor_name`] and must not collide
    /// (case-insensitively) with an existing anchor; the folder is normalized
    /// to absolute form, must not end in a path separator, and is created if
    /// absent. On success the settings are flushed and the anchor's tag
    /// folder is initialized. No state changes if any validation fails.
    pub fn add_anchor(&mut self, name: &str, folder: impl AsRef<Path>) -> Result<Anchor<'_>> {
        if !is_valid_anchor_name(name) {
            return Err(AnchorError::invalid_anchor_name(name));
        }
        self.load(false)?;
        if self.index.contains_key(&name.to_ascii_lowercase()) {
            return Err(AnchorError::duplicate_anchor(name));
        }
        let raw = folder.as_ref();
        if ends_with_separator(raw) {
            return Err(AnchorError::invalid_anchor_folder(raw));
        }
        let folder = normalize_absolute(raw);
        fs::create_dir_all(&folder)?;

        let info = AnchorInfo::new(&folder);
        self.settings.anchors.insert(name.to_string(), info);
        self.index
            .insert(name.to_ascii_lowercase(), name.to_string());
        self.mark_dirty();
        self.flush_if_dirty()?;

        let anchor = Anchor {
            store: self,
            name: name.to_string(),
        };
        anchor.init_tag()?;
        Ok(anchor)
    }

    /// Remove an anchor by name (case-insensitive). The anchor's folder and
    /// its contents stay on disk; only the registration goes away.
    pub fn remove_anchor(&mut self, name: &str) -> Result<()> {
        self.load(false)?;
        let key = self
            .index
            .remove(&name.to_ascii_lowercase())
            .ok_or_else(|| AnchorError::anchor_not_found(name))?;
        self.settings.anchors.remove(&key);
        self.mark_dirty();
        self.flush_if_dirty()?;
        Ok(())
    }

    /// Find an anchor by name (case-insensitive), via the in-process index.
    pub fn find_anchor(&mut self, name: &str) -> Result<Option<Anchor<'_>>> {
        self.load(false)?;
        let key = self.index.get(&name.to_ascii_lowercase()).cloned();
        Ok(key.map(|name| Anchor { store: self, name }))
    }

    /// Return every registered anchor whose folder denotes the same physical
    /// folder on disk as `folder` (not the same string). Empty when `folder`
    /// is inaccessible.
    pub fn find_anchors_by_folder(&mut self, folder: &Path) -> Result<Vec<(String, AnchorInfo)>> {
        self.load(false)?;
        Ok(self
            .settings
            .find_same_folders(folder)
            .into_iter()
            .map(|(name, info)| (name.to_string(), info.clone()))
            .collect())
    }
}

/// True if the path's own spelling ends in a path separator. A trailing
/// separator on an anchor folder indicates a malformed or ambiguous path
/// rather than a real folder boundary.
fn ends_with_separator(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .next_back()
        .is_some_and(std::path::is_separator)
}

/// Lightweight handle to a registered anchor.
///
/// Holds only the anchor's name and a reference to the owning store; the
/// current [`AnchorInfo`] is re-derived through the store on every access so a
/// reload cannot leave the handle pointing at stale data.
#[derive(Debug)]
pub struct Anchor<'a> {
    store: &'a SettingsStore,
    name: String,
}

impl Anchor<'_> {
    /// The name of the anchor (verbatim, as registered).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The anchor's current info, or `None` if a reload removed it.
    pub fn info(&self) -> Option<&AnchorInfo> {
        self.store
            .settings
            .get_anchor(&self.name)
            .map(|(_, info)| info)
    }

    /// The anchor's current folder, or `None` if a reload removed it.
    pub fn folder(&self) -> Option<&Path> {
        self.info().map(|info| info.folder.as_path())
    }

    /// Ensure the hidden tag folder and its metadata marker exist under the
    /// anchor's folder. Idempotent; a no-op when already initialized.
    pub fn init_tag(&self) -> Result<()> {
        let info = self
            .info()
            .ok_or_else(|| AnchorError::anchor_not_found(&self.name))?;
        let tag_folder = info.folder.join(TAG_FOLDER);
        fs::create_dir_all(&tag_folder)?;
        let metadata = tag_folder.join(TAG_METADATA_FILE);
        if !metadata.is_file() {
            fs::write(&metadata, "{}")?;
        }
        Ok(())
    }
}
