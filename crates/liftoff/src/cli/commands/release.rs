//! Release command

use std::time::Duration;

use clap::Args;
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use liftoff_adapters::{adapter_for, ArtifactSet, ProjectAdapter};
use liftoff_changelog::{is_version_bump, ChangelogBuilder};
use liftoff_core::types::ProjectKind;
use liftoff_core::ReleaseConfig;
use liftoff_git::{CommitInfo, GitRepo};
use liftoff_hosting::{HostingConfig, ReleaseClient, ReleaseRequest};

use crate::cli::{output, Cli};

use super::render_release_notes;

/// Run the release pipeline for the latest commit
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    /// Repository to release to (owner/name)
    #[arg(value_name = "REPOSITORY", conflicts_with = "repository_flag")]
    pub repository: Option<String>,

    /// Repository to release to, as a flag
    #[arg(long = "repository", value_name = "OWNER/NAME")]
    pub repository_flag: Option<String>,

    /// Release even when the latest commit is not a version bump
    #[arg(long)]
    pub force: bool,

    /// Dry run - build and show notes, but publish nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Skip publishing to the hosting platform and package index
    #[arg(long)]
    pub no_publish: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl ReleaseCommand {
    /// Repository identifier from either the positional or flag form
    pub fn target_repository(&self) -> Option<String> {
        self.repository
            .clone()
            .or_else(|| self.repository_flag.clone())
    }

    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            repository = ?self.repository,
            force = self.force,
            dry_run = self.dry_run,
            no_publish = self.no_publish,
            "executing release command"
        );
        let cwd = std::env::current_dir()?;
        let repo = GitRepo::discover(&cwd)?;

        let head = repo.head_commit_info()?;
        if !cli.quiet {
            println!(
                "🔍 Last commit: {}",
                output::value_style().apply_to(&head.short_hash)
            );
        }

        let bump = is_version_bump(&head.message);
        if !bump && !self.force {
            if !cli.quiet {
                println!(
                    "😴 {}",
                    style("No work needs to be done (not a version bump)").cyan()
                );
            }
            return Ok(());
        }
        if !cli.quiet {
            if bump {
                output::success("Version bump detected");
            } else {
                output::success("Forced build");
            }
        }

        // Resolve credentials up front so a missing token fails before the
        // build, not after it.
        let publish = !self.no_publish && !self.dry_run;
        let config = if publish {
            let repository = self.target_repository().unwrap_or_default();
            Some(ReleaseConfig::from_env(repository)?)
        } else {
            None
        };

        let adapter = adapter_for(ProjectKind::Python)?;
        let version = adapter.project_version(&cwd)?;
        if !cli.quiet {
            println!(
                "🔖 Project version detected: {}",
                output::value_style().apply_to(&version)
            );
        }

        if publish && !self.yes {
            let proceed = Confirm::new()
                .with_prompt(format!("Create and publish release v{}?", version))
                .default(true)
                .interact()?;
            if !proceed {
                return Ok(());
            }
        }

        let artifacts = self.build_artifacts(adapter.as_ref(), &cwd, cli)?;

        let (notes, version_label) =
            render_release_notes(&repo, &ChangelogBuilder::new(), &version)?;
        std::fs::write(artifacts.dir.join("CHANGELOG.md"), &notes)?;
        if !cli.quiet {
            output::success(&format!(
                "Generated release notes for {}",
                output::value_style().apply_to(&version_label)
            ));
        }

        if self.dry_run {
            if !cli.quiet {
                println!("{}", style("Dry run - nothing published.").yellow());
                println!("\n{}", notes);
            }
            return Ok(());
        }

        if let Some(config) = config {
            self.publish_release(&config, &head, &version, &notes, &artifacts, cli)?;

            let (username, password) = config.registry_credentials()?;
            adapter.publish(&cwd, username, password)?;
            if !cli.quiet {
                output::success("Published to package index");
            }

            artifacts.delete()?;
        }

        Ok(())
    }

    /// Build artifacts under a spinner
    fn build_artifacts(
        &self,
        adapter: &dyn ProjectAdapter,
        cwd: &std::path::Path,
        cli: &Cli,
    ) -> anyhow::Result<ArtifactSet> {
        let spinner = if cli.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message("🔨 Building project...");
            pb
        };

        match adapter.build(cwd) {
            Ok(artifacts) => {
                spinner.finish_and_clear();
                if !cli.quiet {
                    output::success(&format!(
                        "Built project (artifacts in {})",
                        artifacts.dir.display()
                    ));
                }
                Ok(artifacts)
            }
            Err(e) => {
                spinner.abandon_with_message("🔨 Building project... failed");
                Err(e.into())
            }
        }
    }

    /// Create the hosted release and upload labeled assets
    fn publish_release(
        &self,
        config: &ReleaseConfig,
        head: &CommitInfo,
        version: &str,
        notes: &str,
        artifacts: &ArtifactSet,
        cli: &Cli,
    ) -> anyhow::Result<()> {
        let hosting = HostingConfig::new(&config.repository, &config.token);
        let client = ReleaseClient::new(hosting)?;

        let request = ReleaseRequest {
            tag_name: format!("v{}", version),
            target_commitish: head.hash.clone(),
            name: format!("Version v{}", version),
            body: notes.to_string(),
        };

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(async {
            let release = client.create_release(&request).await?;

            for (path, kind) in artifacts.classified() {
                client
                    .upload_asset(&release, path, kind.map(|k| k.label()))
                    .await?;
            }

            Ok::<_, anyhow::Error>(())
        })?;

        if !cli.quiet {
            output::success(&format!("Created release v{}", version));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse_release(args: &[&str]) -> super::ReleaseCommand {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Release(cmd) => cmd,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_repository_positional() {
        let cmd = parse_release(&["liftoff", "release", "owner/name"]);
        assert_eq!(cmd.target_repository().as_deref(), Some("owner/name"));
    }

    #[test]
    fn test_repository_flag() {
        let cmd = parse_release(&["liftoff", "release", "--repository", "owner/name"]);
        assert_eq!(cmd.target_repository().as_deref(), Some("owner/name"));
    }

    #[test]
    fn test_repository_forms_conflict() {
        let result =
            Cli::try_parse_from(["liftoff", "release", "owner/a", "--repository", "owner/b"]);
        assert!(result.is_err());
    }
}
