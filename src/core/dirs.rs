use crate::core::error::{AnchorError, Result};
use std::path::PathBuf;

/// Per-user directory holding the git-anchors settings file.
pub fn get_settings_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join("git-anchors"))
        .ok_or(AnchorError::SettingsDirUnavailable)
}
