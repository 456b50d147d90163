//! Commit history operations

use chrono::{TimeZone, Utc};
use git2::Sort;
use tracing::{debug, instrument};

use liftoff_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Get the commit HEAD points at
    pub fn head_commit_info(&self) -> Result<CommitInfo> {
        let commit = self.head_commit()?;
        Ok(commit_to_info(&commit))
    }

    /// Get the root commit of the current branch
    ///
    /// Used as the range start when the repository has no prior release
    /// tags to diff against.
    pub fn first_commit(&self) -> Result<CommitInfo> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)?;
        revwalk.push(head.id())?;

        let oid = revwalk.next().ok_or(GitError::NoCommits)??;
        let commit = self.repo.find_commit(oid)?;
        Ok(commit_to_info(&commit))
    }

    /// Get commits strictly after `from` up to and including `to`
    ///
    /// Both endpoints are revisions (hashes, tag names, refs). Order is the
    /// walk's native newest-first order; callers that render the result
    /// preserve it as-is.
    #[instrument(skip(self), fields(from, to))]
    pub fn commits_between(&self, from: &str, to: &str) -> Result<Vec<CommitInfo>> {
        let from_oid = self.repo.revparse_single(from)?.peel_to_commit()?.id();
        let to_oid = self.repo.revparse_single(to)?.peel_to_commit()?.id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_oid)?;
        revwalk.hide(from_oid)?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "collected commit range");
        Ok(commits)
    }

    /// Get all commits on the current branch, newest first
    pub fn all_commits(&self) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let author = commit.author();

    let message = commit.summary().unwrap_or("(no message)").to_string();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    CommitInfo::new(hash, message, author.name().unwrap_or("Unknown"), timestamp)
}
