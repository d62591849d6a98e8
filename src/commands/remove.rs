use crate::core::{print_success, Result, SettingsStore};
use std::path::PathBuf;

/// Unregister an anchor. The anchor folder and its contents stay on disk.
pub fn execute_remove(settings_dir: Option<PathBuf>, name: &str) -> Result<()> {
    let mut store = SettingsStore::open(settings_dir)?;
    store.remove_anchor(name)?;
    print_success(&format!("Removed anchor '{}'", name));
    Ok(())
}
