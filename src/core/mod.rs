//! Core functionality for the git-anchors tool.
//!
//! This module provides the fundamental building blocks: the settings store
//! and anchor registry, repository root discovery, remote-listing parsing,
//! physical folder identity, and the resolution engine tying them together.

pub mod dirs;
pub mod error;
pub mod identity;
pub mod output;
pub mod remotes;
pub mod repo;
pub mod resolver;
pub mod runner;
pub mod settings;
pub mod store;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{AnchorError, Result};

// === Physical folder identity ===
// Compare folders by the underlying storage object, not the path string
pub use identity::FolderIdentity;

// === Settings data model ===
// The JSON-persisted root object and per-anchor record
pub use settings::{AnchorInfo, Settings, SETTINGS_VERSION};

// === Settings store ===
// Lazy load / dirty-tracked save-back, anchor registration and lookup
pub use store::{is_valid_anchor_name, Anchor, SettingsStore};

// === Repository discovery ===
// Structural bare/working-copy classification and upward root walk
pub use repo::{classify, is_repo_meta_folder, RepoKind, RepoRoot};

// === Remote catalog ===
// Parsed `git remote -v` output as a structured multi-target model
pub use remotes::{RemoteCatalog, RemoteInfo, RemoteTarget};

// === Process invocation ===
// Blocking external command contract plus git helpers
pub use runner::{git_init_bare, git_remote_add, git_remotes, run_to_lines, RunResult};

// === Resolution engine ===
// Match live remote targets against registered anchors
pub use resolver::{resolve_from_catalog, resolve_mappings, RemoteMapping};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header, print_success};
