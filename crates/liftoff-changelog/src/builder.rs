//! Grouped release notes generation

use liftoff_git::CommitInfo;
use tracing::{debug, instrument};

use crate::classifier::classify;
use crate::types::{Category, Changelog, Section, SectionEntry};

/// Fixed attribution footer appended below the notes
const ATTRIBUTION: &str =
    "--\n<small>Made with <a href=\"https://github.com/example/liftoff\">liftoff</a></small>";

/// Builds grouped release notes from a commit sequence
///
/// Classification and grouping are pure; commits keep their input order
/// within each section and Miscellaneous commits are dropped.
pub struct ChangelogBuilder {
    attribution: bool,
}

impl ChangelogBuilder {
    /// Create a builder with the attribution footer enabled
    pub fn new() -> Self {
        Self { attribution: true }
    }

    /// Disable the attribution footer
    pub fn without_attribution(mut self) -> Self {
        self.attribution = false;
        self
    }

    /// Group commits into sections
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn build(&self, commits: &[CommitInfo]) -> Changelog {
        let mut sections: Vec<Section> = Category::DISPLAY_ORDER
            .iter()
            .map(|&category| Section::new(category))
            .collect();

        for commit in commits {
            let category = classify(&commit.message);
            if let Some(section) = sections.iter_mut().find(|s| s.category == category) {
                section.entries.push(SectionEntry {
                    id: commit.short_hash.clone(),
                    message: commit.message.clone(),
                });
            }
            // Miscellaneous has no section and is never rendered.
        }

        sections.retain(|s| !s.is_empty());
        debug!(section_count = sections.len(), "changelog sections built");

        Changelog {
            sections,
            attribution: self.attribution,
        }
    }

    /// Render a changelog to markdown text
    pub fn format(&self, changelog: &Changelog) -> String {
        let mut output = String::from("# Changelog\n");

        for section in &changelog.sections {
            if let Some(heading) = section.category.heading() {
                output.push_str(&format!("## {}\n", heading));
                for entry in &section.entries {
                    output.push_str(&format!(" - {} (`{}`)\n", entry.message, entry.id));
                }
            }
        }

        output.push('\n');
        if changelog.attribution {
            output.push_str(ATTRIBUTION);
        }
        output
    }

    /// Group and render in one step
    pub fn build_formatted(&self, commits: &[CommitInfo]) -> String {
        let changelog = self.build(commits);
        self.format(&changelog)
    }
}

impl Default for ChangelogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
