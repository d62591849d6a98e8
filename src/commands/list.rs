use crate::core::{print_info, print_section_header, Result, SettingsStore};
use std::path::PathBuf;

/// List all registered anchors with their folders.
pub fn execute_list(settings_dir: Option<PathBuf>) -> Result<()> {
    let mut store = SettingsStore::open(settings_dir)?;
    let settings = store.load(false)?;
    if settings.anchors.is_empty() {
        print_info("No anchors registered. Use 'git-anchors add <name> <folder>' to add one.");
        return Ok(());
    }
    print_section_header("Registered anchors");
    for (name, info) in &settings.anchors {
        println!("  {:<30} {}", name, info.folder.display());
    }
    println!();
    Ok(())
}
