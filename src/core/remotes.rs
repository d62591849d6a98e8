//! Parsing of `git remote -v` output into a structured remote catalog.
//!
//! Each listing line has the shape `<name> <target> (<mode>)` where the target
//! may contain embedded whitespace and the mode is a lowercase word
//! (conventionally `fetch` or `push`). Lines that do not match — blanks,
//! banners — are expected noise and are silently skipped.
//!
//! # Public API
//! - [`RemoteTarget`]: one (mode, target) pair of a named remote
//! - [`RemoteInfo`]: a named remote with its ordered targets
//! - [`RemoteCatalog`]: all remotes of a repository, in first-seen order

use regex::Regex;
use std::sync::OnceLock;

fn remote_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<name>\S+)\s+(?P<target>.*\S)\s+\((?P<mode>[a-z]+)\)$")
            .expect("valid pattern")
    })
}

/// One target of a remote: where it points and for which access mode.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    remote_name: String,
    mode: String,
    target: String,
}

impl RemoteTarget {
    /// The name of the remote this target belongs to.
    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }

    /// The access mode, conventionally `"fetch"` or `"push"`.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// The target itself: a URL or a local filesystem path.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Information about one named git remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    name: String,
    targets: Vec<RemoteTarget>,
}

impl RemoteInfo {
    fn new(name: impl Into<String>) -> RemoteInfo {
        RemoteInfo {
            name: name.into(),
            targets: Vec::new(),
        }
    }

    /// The name of the remote.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The remote's targets with their modes, in first-seen order.
    pub fn targets(&self) -> &[RemoteTarget] {
        &self.targets
    }

    /// Add a target, deduplicating on the exact (target, mode) pair: the
    /// listing may emit the same logical remote+mode twice, which is a no-op
    /// here rather than an error.
    pub fn add_target(&mut self, mode: &str, target: &str) {
        let exists = self
            .targets
            .iter()
            .any(|t| t.target == target && t.mode == mode);
        if !exists {
            self.targets.push(RemoteTarget {
                remote_name: self.name.clone(),
                mode: mode.to_string(),
                target: target.to_string(),
            });
        }
    }
}

/// The collection of git remotes for a repository, keyed case-insensitively
/// by name while preserving first-seen listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteCatalog {
    remotes: Vec<RemoteInfo>,
}

impl RemoteCatalog {
    pub fn new() -> RemoteCatalog {
        RemoteCatalog::default()
    }

    /// Number of distinct remotes in the catalog.
    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }

    /// Find a remote by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&RemoteInfo> {
        self.remotes
            .iter()
            .find(|remote| remote.name.eq_ignore_ascii_case(name))
    }

    /// Iterate remotes in first-seen listing order.
    pub fn iter(&self) -> impl Iterator<Item = &RemoteInfo> {
        self.remotes.iter()
    }

    /// Record a (name, target, mode) triple, creating the remote entry on
    /// first sight.
    pub fn add(&mut self, name: &str, target: &str, mode: &str) {
        if let Some(remote) = self
            .remotes
            .iter_mut()
            .find(|remote| remote.name.eq_ignore_ascii_case(name))
        {
            remote.add_target(mode, target);
            return;
        }
        let mut remote = RemoteInfo::new(name);
        remote.add_target(mode, target);
        self.remotes.push(remote);
    }

    /// Parse one listing line into its (name, target, mode) parts, or `None`
    /// for a non-matching line.
    pub fn parse_line(line: &str) -> Option<(&str, &str, &str)> {
        let caps = remote_line_pattern().captures(line)?;
        // All three groups are guaranteed by the pattern
        match (caps.name("name"), caps.name("target"), caps.name("mode")) {
            (Some(name), Some(target), Some(mode)) => {
                Some((name.as_str(), target.as_str(), mode.as_str()))
            }
            _ => None,
        }
    }

    /// Build a catalog from the lines output by `git remote -v`, silently
    /// skipping non-matching lines.
    pub fn from_lines<I, S>(lines: I) -> RemoteCatalog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = RemoteCatalog::new();
        for line in lines {
            if let Some((name, target, mode)) = RemoteCatalog::parse_line(line.as_ref()) {
                catalog.add(name, target, mode);
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch_line() {
        let (name, target, mode) =
            RemoteCatalog::parse_line("origin\tgit@github.com:me/proj.git (fetch)").unwrap();
        assert_eq!(name, "origin");
        assert_eq!(target, "git@github.com:me/proj.git");
        assert_eq!(mode, "fetch");
    }

    #[test]
    fn test_parse_target_with_embedded_whitespace() {
        let (name, target, mode) =
            RemoteCatalog::parse_line("backup\t/mnt/my backups/proj.git (push)").unwrap();
        assert_eq!(name, "backup");
        assert_eq!(target, "/mnt/my backups/proj.git");
        assert_eq!(mode, "push");
    }

    #[test]
    fn test_parse_rejects_noise_lines() {
        assert!(RemoteCatalog::parse_line("").is_none());
        assert!(RemoteCatalog::parse_line("   ").is_none());
        assert!(RemoteCatalog::parse_line("warning: something happened").is_none());
        assert!(RemoteCatalog::parse_line("origin").is_none());
        // Uppercase mode word does not match
        assert!(RemoteCatalog::parse_line("origin /x (FETCH)").is_none());
    }

    #[test]
    fn test_from_lines_groups_by_remote() {
        let catalog = RemoteCatalog::from_lines([
            "origin\tgit@github.com:me/proj.git (fetch)",
            "origin\tgit@github.com:me/proj.git (push)",
            "backup\t/data/repos/proj.git (fetch)",
            "backup\t/data/repos/proj.git (push)",
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("origin").unwrap().targets().len(), 2);
        assert_eq!(catalog.get("BACKUP").unwrap().targets().len(), 2);
    }

    #[test]
    fn test_from_lines_dedupes_target_mode_pairs() {
        let catalog = RemoteCatalog::from_lines([
            "origin /x (fetch)",
            "origin /x (fetch)",
            "origin /x (push)",
        ]);
        let targets = catalog.get("origin").unwrap().targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].mode(), "fetch");
        assert_eq!(targets[1].mode(), "push");
    }

    #[test]
    fn test_from_lines_preserves_listing_order() {
        let catalog = RemoteCatalog::from_lines([
            "zeta /z (fetch)",
            "alpha /a (fetch)",
            "mid /m (fetch)",
        ]);
        let names: Vec<&str> = catalog.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_lines_skips_noise() {
        let catalog = RemoteCatalog::from_lines([
            "",
            "origin /x (fetch)",
            "some banner text without a mode",
        ]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_target_accessors() {
        let catalog = RemoteCatalog::from_lines(["origin /data/proj.git (push)"]);
        let target = &catalog.get("origin").unwrap().targets()[0];
        assert_eq!(target.remote_name(), "origin");
        assert_eq!(target.mode(), "push");
        assert_eq!(target.target(), "/data/proj.git");
    }
}
