//! Tag operations

use chrono::{TimeZone, Utc};
use tracing::{debug, info, instrument};

use liftoff_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;

impl GitRepo {
    /// Get all tags with their creation times
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            if let Ok(tag) = self.repo.find_tag(oid) {
                // Annotated tag: order by tagger date
                let created_at = tag
                    .tagger()
                    .and_then(|t| Utc.timestamp_opt(t.when().seconds(), 0).single())
                    .unwrap_or_else(Utc::now);
                tags.push(TagInfo::new(&name, tag.target_id().to_string(), created_at));
            } else if let Ok(commit) = self.repo.find_commit(oid) {
                // Lightweight tag: fall back to the commit time
                let created_at = Utc
                    .timestamp_opt(commit.time().seconds(), 0)
                    .single()
                    .unwrap_or_else(Utc::now);
                tags.push(TagInfo::new(&name, commit.id().to_string(), created_at));
            }

            true
        })?;

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Get the most recently created tags, newest first
    ///
    /// The release pipeline asks for two: the previous and current release
    /// tags forming the changelog range.
    pub fn recent_tags(&self, limit: usize) -> Result<Vec<TagInfo>> {
        let mut tags = self.tags()?;
        // Name as tiebreak: tag timestamps have second resolution.
        tags.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.name.cmp(&a.name))
        });
        tags.truncate(limit);
        Ok(tags)
    }

    /// Create an annotated tag on the HEAD commit
    #[instrument(skip(self), fields(name))]
    pub fn create_tag(&self, name: &str, message: &str) -> Result<TagInfo> {
        let head = self.head_commit()?;
        let sig = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &sig, message, false)
            .map_err(|e| GitError::TagCreationFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        info!(name, "created tag");
        Ok(TagInfo::new(name, head.id().to_string(), Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo_with_tags() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        // Tag creation reads the repo signature from config.
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();

        std::fs::write(temp.path().join("file.txt"), "content").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();

        let commit = repo.find_commit(oid).unwrap();
        repo.tag_lightweight("v0.1.0", commit.as_object(), false)
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_list_tags() {
        let (_temp, repo) = setup_repo_with_tags();
        let tags = repo.tags().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "v0.1.0");
    }

    #[test]
    fn test_recent_tags_newest_first() {
        let (_temp, repo) = setup_repo_with_tags();
        repo.create_tag("v0.2.0", "Version v0.2.0").unwrap();

        let tags = repo.recent_tags(2).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "v0.2.0");
        assert_eq!(tags[1].name, "v0.1.0");
    }

    #[test]
    fn test_recent_tags_limit() {
        let (_temp, repo) = setup_repo_with_tags();
        let tags = repo.recent_tags(2).unwrap();
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_create_tag() {
        let (_temp, repo) = setup_repo_with_tags();
        let tag = repo.create_tag("v1.0.0", "Version v1.0.0").unwrap();
        assert_eq!(tag.name, "v1.0.0");
        assert!(!tag.commit_hash.is_empty());
    }
}
