//! CLI commands

mod changelog;
mod release;

pub use changelog::ChangelogCommand;
pub use release::ReleaseCommand;

use liftoff_changelog::ChangelogBuilder;
use liftoff_git::GitRepo;

/// Version label used when the repository has no prior release tags
pub(crate) const INITIAL_VERSION_LABEL: &str = "<initial>";

/// Generate release notes for the current tag range
///
/// With two release tags present the range is (previous, latest) and the
/// notes carry the given version label; with fewer tags the notes cover
/// the whole history since the root commit and the version is labeled
/// `<initial>`.
pub(crate) fn render_release_notes(
    repo: &GitRepo,
    builder: &ChangelogBuilder,
    version: &str,
) -> anyhow::Result<(String, String)> {
    let tags = repo.recent_tags(2)?;

    let (commits, label) = if tags.len() == 2 {
        (
            repo.commits_between(&tags[1].commit_hash, &tags[0].commit_hash)?,
            version.to_string(),
        )
    } else {
        let first = repo.first_commit()?;
        let head = repo.head_commit_info()?;
        (
            repo.commits_between(&first.hash, &head.hash)?,
            INITIAL_VERSION_LABEL.to_string(),
        )
    };

    Ok((builder.build_formatted(&commits), label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn add_commit(repo: &Repository, file: &str, message: &str) {
        std::fs::write(repo.workdir().unwrap().join(file), message).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(file)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();

        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    fn init_repo(temp: &TempDir) -> Repository {
        let repo = Repository::init(temp.path()).unwrap();

        // Tag creation reads the repo signature from config.
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        repo
    }

    #[test]
    fn test_no_tags_labels_version_initial() {
        let temp = TempDir::new().unwrap();
        let raw = init_repo(&temp);
        add_commit(&raw, "a.txt", "Initial commit");
        add_commit(&raw, "b.txt", ":feature: add things");

        let repo = GitRepo::open(temp.path()).unwrap();
        let (notes, label) =
            render_release_notes(&repo, &ChangelogBuilder::new(), "1.2.3").unwrap();

        assert_eq!(label, INITIAL_VERSION_LABEL);
        assert!(notes.contains(":feature: add things"));
    }

    #[test]
    fn test_two_tags_keep_project_version() {
        let temp = TempDir::new().unwrap();
        let raw = init_repo(&temp);
        add_commit(&raw, "a.txt", ":feature: seed feature");

        let repo = GitRepo::open(temp.path()).unwrap();
        repo.create_tag("v0.1.0", "Version v0.1.0").unwrap();

        add_commit(&raw, "b.txt", ":bug: fix things");
        repo.create_tag("v0.2.0", "Version v0.2.0").unwrap();

        let (notes, label) =
            render_release_notes(&repo, &ChangelogBuilder::new(), "1.2.3").unwrap();

        assert_eq!(label, "1.2.3");
        assert!(notes.contains(":bug: fix things"));
        // Range starts after the previous release tag.
        assert!(!notes.contains("seed feature"));
    }
}
