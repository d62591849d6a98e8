use crate::core::{print_info, print_section_header, resolve_mappings, Result, SettingsStore};
use std::path::PathBuf;

/// Resolve and print the anchor mappings for the repository containing the
/// witness folder (default: the current folder).
pub fn execute_resolve(
    settings_dir: Option<PathBuf>,
    mode: Option<&str>,
    witness: Option<PathBuf>,
) -> Result<()> {
    let mut store = SettingsStore::open(settings_dir)?;
    let mappings = resolve_mappings(&mut store, witness.as_deref(), mode)?;
    if mappings.is_empty() {
        print_info("No remotes of this repository point into a registered anchor.");
        return Ok(());
    }
    print_section_header("Anchored remotes");
    for mapping in &mappings {
        println!(
            "  {:<20} {:<16} ({:<5}) {}",
            mapping.anchor_name(),
            mapping.remote_name(),
            mapping.mode(),
            mapping.target_folder()
        );
    }
    println!();
    Ok(())
}
