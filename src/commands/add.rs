use crate::core::{print_success, Result, SettingsStore};
use std::path::PathBuf;

/// Register a new anchor and report the normalized registration.
pub fn execute_add(settings_dir: Option<PathBuf>, name: &str, folder: &str) -> Result<()> {
    let mut store = SettingsStore::open(settings_dir)?;
    let anchor = store.add_anchor(name, folder)?;
    let folder = anchor
        .folder()
        .map(|folder| folder.display().to_string())
        .unwrap_or_default();
    print_success(&format!("Registered anchor '{}' -> {}", anchor.name(), folder));
    Ok(())
}
