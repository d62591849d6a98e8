use std::fs;
use std::path::Path;

mod common;
use common::repository::*;
use git_anchors::core::{resolve_mappings, SettingsStore};
use tempfile::TempDir;

#[cfg(test)]
mod resolve_mapping_tests {
    use super::*;

    /// One temp world holding the settings store, the anchor folder with a
    /// bare repo inside, and a working repo whose remote points at the bare.
    struct World {
        env: TempDir,
        store: SettingsStore,
        repo: TestRepo,
        anchor_folder: std::path::PathBuf,
        bare: std::path::PathBuf,
    }

    fn setup_world() -> anyhow::Result<World> {
        let env = TempDir::new()?;
        let mut store = SettingsStore::open(Some(env.path().join("settings")))?;

        let anchor_folder = env.path().join("data_repos");
        store.add_anchor("backup1", &anchor_folder)?;

        let bare = anchor_folder.join("myproj.git");
        create_bare_repo(&bare)?;

        let repo = setup_test_repo()?;
        git_remote_add(&repo.path, "backup", &bare.to_string_lossy())?;

        Ok(World {
            env: env,
            store,
            repo,
            anchor_folder,
            bare,
        })
    }

    #[test]
    fn test_resolves_single_anchored_remote() -> anyhow::Result<()> {
        let mut world = setup_world()?;

        let mappings = resolve_mappings(&mut world.store, Some(world.repo.path()), None)?;
        // git records the remote for both fetch and push
        assert_eq!(mappings.len(), 2);
        for mapping in &mappings {
            assert_eq!(mapping.anchor_name(), "backup1");
            assert_eq!(mapping.remote_name(), "backup");
            assert_eq!(mapping.target_folder(), world.bare.to_string_lossy());
            assert_eq!(
                fs::canonicalize(mapping.repo_root())?,
                fs::canonicalize(world.repo.path())?
            );
        }
        let modes: Vec<&str> = mappings.iter().map(|m| m.mode()).collect();
        assert!(modes.contains(&"fetch"));
        assert!(modes.contains(&"push"));
        Ok(())
    }

    #[test]
    fn test_mode_filter_selects_one_direction() -> anyhow::Result<()> {
        let mut world = setup_world()?;

        let mappings =
            resolve_mappings(&mut world.store, Some(world.repo.path()), Some("push"))?;
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].mode(), "push");
        Ok(())
    }

    #[test]
    fn test_witness_deep_inside_working_copy() -> anyhow::Result<()> {
        let mut world = setup_world()?;
        let deep = world.repo.path().join("src").join("core").join("util");
        fs::create_dir_all(&deep)?;

        let mappings = resolve_mappings(&mut world.store, Some(&deep), None)?;
        assert_eq!(mappings.len(), 2);
        Ok(())
    }

    #[test]
    fn test_unregistered_target_folder_yields_nothing() -> anyhow::Result<()> {
        let mut world = setup_world()?;

        // A second bare repo in a folder no anchor covers
        let other_bare = world.env.path().join("other_repos").join("x.git");
        create_bare_repo(&other_bare)?;
        git_remote_add(&world.repo.path, "elsewhere", &other_bare.to_string_lossy())?;

        let mappings = resolve_mappings(&mut world.store, Some(world.repo.path()), None)?;
        // Only the anchored remote contributes mappings
        assert_eq!(mappings.len(), 2);
        assert!(mappings.iter().all(|m| m.remote_name() == "backup"));
        Ok(())
    }

    #[test]
    fn test_url_remotes_are_ignored() -> anyhow::Result<()> {
        let mut world = setup_world()?;
        git_remote_add(
            &world.repo.path,
            "origin",
            "https://github.com/me/myproj.git",
        )?;

        let mappings = resolve_mappings(&mut world.store, Some(world.repo.path()), None)?;
        assert!(mappings.iter().all(|m| m.remote_name() == "backup"));
        Ok(())
    }

    #[test]
    fn test_outside_any_repo_is_empty() -> anyhow::Result<()> {
        let mut world = setup_world()?;
        let plain = world.env.path().join("plain");
        fs::create_dir(&plain)?;

        let mappings = resolve_mappings(&mut world.store, Some(&plain), None)?;
        assert!(mappings.is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_remote_through_symlink_still_matches() -> anyhow::Result<()> {
        let mut world = setup_world()?;

        // A second remote spelled through a symlinked alias of the anchor
        let alias = world.env.path().join("alias");
        std::os::unix::fs::symlink(&world.anchor_folder, &alias)?;
        let via_alias = alias.join("myproj.git");
        git_remote_add(&world.repo.path, "backup2", &via_alias.to_string_lossy())?;

        let mappings =
            resolve_mappings(&mut world.store, Some(world.repo.path()), Some("push"))?;
        let remotes: Vec<&str> = mappings.iter().map(|m| m.remote_name()).collect();
        assert!(remotes.contains(&"backup"));
        assert!(remotes.contains(&"backup2"));
        assert!(mappings.iter().all(|m| m.anchor_name() == "backup1"));
        Ok(())
    }

    #[test]
    fn test_anchor_folder_gone_yields_nothing() -> anyhow::Result<()> {
        let mut world = setup_world()?;

        // Remove the anchor folder (and the bare repo with it); targets no
        // longer exist, so nothing can match.
        fs::remove_dir_all(&world.anchor_folder)?;
        let mappings = resolve_mappings(&mut world.store, Some(world.repo.path()), None)?;
        assert!(mappings.is_empty());
        Ok(())
    }

    #[test]
    fn test_bare_repo_as_witness() -> anyhow::Result<()> {
        let mut world = setup_world()?;

        // The bare repo itself has no remotes; empty, not an error
        let mappings = resolve_mappings(&mut world.store, Some(Path::new(&world.bare)), None)?;
        assert!(mappings.is_empty());
        Ok(())
    }
}
