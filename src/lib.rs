//! Git Anchors - register backup anchor folders and resolve which git remotes
//! point into them.
//!
//! An *anchor* is a named local folder that holds bare git repositories used
//! as backup targets. This library persists the registered anchors in a
//! per-user settings file and, for any working repository, resolves which of
//! its remotes point into a registered anchor — matching by physical folder
//! identity rather than path strings, so symlinks and alternate spellings of
//! the same folder still match.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Settings persistence with lazy load and dirty-tracked save-back
//! - Anchor registration, validation, and lookup
//! - Repository root discovery (bare vs. working copy)
//! - `git remote -v` parsing and the mapping resolution engine

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    classify,
    git_init_bare,
    git_remote_add,
    // Process invocation
    git_remotes,
    is_repo_meta_folder,
    // Anchor name validation
    is_valid_anchor_name,
    print_error,
    print_info,
    print_section_header,
    print_success,
    resolve_from_catalog,
    // Resolution engine
    resolve_mappings,
    run_to_lines,
    Anchor,
    // Error handling
    AnchorError,
    // Settings data model
    AnchorInfo,
    // Physical folder identity
    FolderIdentity,
    // Remote catalog
    RemoteCatalog,
    RemoteInfo,
    RemoteMapping,
    RemoteTarget,
    // Repository discovery
    RepoKind,
    RepoRoot,
    Result,
    RunResult,
    Settings,
    // Settings store
    SettingsStore,
    SETTINGS_VERSION,
};
