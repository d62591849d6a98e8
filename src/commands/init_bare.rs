use crate::core::{git_init_bare, print_error, print_success, AnchorError, Result, SettingsStore};
use std::path::PathBuf;

/// Create a new bare repository named `repo_name` inside a registered
/// anchor's folder, ready to be added as a remote of a working repository.
pub fn execute_init_bare(
    settings_dir: Option<PathBuf>,
    anchor_name: &str,
    repo_name: &str,
) -> Result<()> {
    let mut store = SettingsStore::open(settings_dir)?;
    let anchor = store
        .find_anchor(anchor_name)?
        .ok_or_else(|| AnchorError::anchor_not_found(anchor_name))?;
    let folder = anchor
        .folder()
        .ok_or_else(|| AnchorError::anchor_not_found(anchor_name))?;

    let target = folder.join(repo_name);
    let result = git_init_bare(&target)?;
    if !result.success() {
        print_error(&format!(
            "git init --bare failed with status {}: {}",
            result.status(),
            result.stderr_lines().join(" ")
        ));
        std::process::exit(1);
    }
    print_success(&format!("Created bare repository {}", target.display()));
    Ok(())
}
