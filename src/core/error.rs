//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`AnchorError`] which provides comprehensive error handling
//! for all git-anchors operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`AnchorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, AnchorError>`
//!
//! # Error Categories
//! - **Validation**: Bad anchor names, malformed anchor folders
//! - **Registry**: Duplicate or missing anchors
//! - **Storage**: I/O failures reading or writing the settings file (fatal)
//!
//! Note that a settings file that exists but fails to *parse* is not an error
//! anywhere in this crate: the store recovers locally by substituting an empty
//! settings value and re-writing the file. Only real I/O failures surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-anchors
#[derive(Error, Debug)]
pub enum AnchorError {
    // Validation errors
    #[error("Invalid anchor name '{name}'. Names are 3-30 characters: identifier segments joined by single '-', '_' or '.' separators")]
    InvalidAnchorName { name: String },

    #[error("Anchor folder '{path}' must not end with a path separator")]
    InvalidAnchorFolder { path: PathBuf },

    // Registry errors
    #[error("Anchor '{name}' already exists")]
    DuplicateAnchor { name: String },

    #[error("Anchor '{name}' is not registered")]
    AnchorNotFound { name: String },

    // Storage errors (fatal, propagated)
    #[error("Could not determine a settings directory for this user")]
    SettingsDirUnavailable,

    #[error("Failed to read settings file '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    SettingsWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {source}")]
    SettingsSerialize { source: serde_json::Error },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using AnchorError
pub type Result<T> = std::result::Result<T, AnchorError>;

impl AnchorError {
    /// Create an invalid anchor name error
    pub fn invalid_anchor_name(name: impl Into<String>) -> Self {
        Self::InvalidAnchorName { name: name.into() }
    }

    /// Create an invalid anchor folder error
    pub fn invalid_anchor_folder(path: impl Into<PathBuf>) -> Self {
        Self::InvalidAnchorFolder { path: path.into() }
    }

    /// Create a duplicate anchor error
    pub fn duplicate_anchor(name: impl Into<String>) -> Self {
        Self::DuplicateAnchor { name: name.into() }
    }

    /// Create an anchor not found error
    pub fn anchor_not_found(name: impl Into<String>) -> Self {
        Self::AnchorNotFound { name: name.into() }
    }

    /// Create a settings read error
    pub fn settings_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsRead {
            path: path.into(),
            source,
        }
    }

    /// Create a settings write error
    pub fn settings_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a settings serialization error
    pub fn settings_serialize(source: serde_json::Error) -> Self {
        Self::SettingsSerialize { source }
    }
}
