//! Changelog command

use clap::Args;
use tracing::info;

use liftoff_adapters::adapter_for;
use liftoff_changelog::ChangelogBuilder;
use liftoff_core::types::ProjectKind;
use liftoff_git::GitRepo;

use crate::cli::{output, Cli};

use super::render_release_notes;

/// Generate release notes without releasing
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Write to file (default: print to stdout)
    #[arg(short, long)]
    pub write: bool,

    /// Output file (defaults to CHANGELOG.md)
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// Omit the attribution footer
    #[arg(long)]
    pub no_attribution: bool,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(write = self.write, "executing changelog command");
        let cwd = std::env::current_dir()?;
        let repo = GitRepo::discover(&cwd)?;

        let mut builder = ChangelogBuilder::new();
        if self.no_attribution {
            builder = builder.without_attribution();
        }

        // The version label falls back to `<initial>` inside the helper
        // when the repository has fewer than two release tags.
        let version = adapter_for(ProjectKind::Python)
            .ok()
            .and_then(|adapter| adapter.project_version(&cwd).ok())
            .unwrap_or_else(|| "unreleased".to_string());

        let (notes, label) = render_release_notes(&repo, &builder, &version)?;

        if self.write {
            let output_path = self
                .output
                .clone()
                .unwrap_or_else(|| cwd.join("CHANGELOG.md"));
            std::fs::write(&output_path, &notes)?;
            if !cli.quiet {
                output::success(&format!("Wrote {} ({})", output_path.display(), label));
            }
        } else {
            print!("{}", notes);
        }

        Ok(())
    }
}
