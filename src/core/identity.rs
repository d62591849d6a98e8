//! Physical folder identity comparison.
//!
//! Two path strings can denote the same folder on disk while comparing unequal
//! as strings: a symlink and its target, differently-cased spellings on a
//! case-insensitive filesystem, or a path with and without a trailing
//! separator. [`FolderIdentity`] captures an opaque token for the underlying
//! storage object so folders can be compared by what they *are* rather than by
//! how they were spelled.
//!
//! # Public API
//! - [`FolderIdentity`]: opaque, comparable identity token for a folder
//!
//! On Unix the token is the (device, inode) pair of the folder's metadata. On
//! other platforms it falls back to the canonicalized path.

use std::fs;
use std::path::Path;

/// Opaque identity token for a physical folder.
///
/// Obtained via [`FolderIdentity::of`]; equality means "same folder on disk".
/// An inaccessible or non-folder path has no identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderIdentity {
    #[cfg(unix)]
    token: (u64, u64),
    #[cfg(not(unix))]
    token: std::path::PathBuf,
}

impl FolderIdentity {
    /// Compute the identity of a folder, or `None` if the path does not
    /// exist, is not a folder, or cannot be accessed.
    #[cfg(unix)]
    pub fn of(path: &Path) -> Option<FolderIdentity> {
        use std::os::unix::fs::MetadataExt;

        let meta = fs::metadata(path).ok()?;
        if !meta.is_dir() {
            return None;
        }
        Some(FolderIdentity {
            token: (meta.dev(), meta.ino()),
        })
    }

    /// Compute the identity of a folder, or `None` if the path does not
    /// exist, is not a folder, or cannot be accessed.
    #[cfg(not(unix))]
    pub fn of(path: &Path) -> Option<FolderIdentity> {
        let meta = fs::metadata(path).ok()?;
        if !meta.is_dir() {
            return None;
        }
        Some(FolderIdentity {
            token: fs::canonicalize(path).ok()?,
        })
    }

    /// True if `path` currently denotes the same physical folder as this
    /// identity. An inaccessible path never matches.
    pub fn same_as(&self, path: &Path) -> bool {
        FolderIdentity::of(path).is_some_and(|other| other == *self)
    }
}
