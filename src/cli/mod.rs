//! Command-line interface

pub mod orchestration;

pub use orchestration::{derive, derive_detailed, Derivation, DeriveOptions};

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::config::{self, Config};
use crate::git::Git2Repository;
use crate::ui::{self, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "gver",
    version,
    about = "Derive a semantic version from git tags and commit history"
)]
pub struct Cli {
    #[arg(short, long, help = "Enables debug logging")]
    pub verbose: bool,

    #[arg(long, help = "The git directory (defaults to current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, help = "Dot-separated build identifier")]
    pub build: Option<String>,

    #[arg(
        long = "main-branch",
        value_name = "REGEX",
        help = "Branch counted as release branch; it gets no prerelease label"
    )]
    pub main_branch: Option<String>,

    #[arg(
        long,
        value_name = "REGEX",
        help = "Commit messages matching this bump the major number"
    )]
    pub major: Option<String>,

    #[arg(
        long,
        value_name = "REGEX",
        help = "Commit messages matching this (and not --major) bump the minor number"
    )]
    pub minor: Option<String>,

    #[arg(long, help = "Do not add the branch name as prerelease label")]
    pub no_branch: bool,

    #[arg(short, long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(major) = &self.major {
            config.triggers.major = major.clone();
        }
        if let Some(minor) = &self.minor {
            config.triggers.minor = minor.clone();
        }
        if let Some(main_branch) = &self.main_branch {
            config.triggers.main_branch = main_branch.clone();
        }
        if let Some(build) = &self.build {
            config.version.build = build.clone();
        }
        if self.no_branch {
            config.version.include_branch = false;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}

/// Run gver with parsed arguments, printing the version to stdout
pub fn run(cli: Cli) -> Result<()> {
    let dir = cli.repo.clone().unwrap_or_else(|| PathBuf::from("."));
    let repo = Git2Repository::open(&dir)?;

    // a local gver.toml belongs to the repository, not the caller's cwd
    let mut config = config::load_config_from(cli.config.as_deref(), repo.root())?;
    cli.apply(&mut config);

    let options = DeriveOptions::from_config(&config)?;
    debug!(
        dir = %dir.display(),
        build = %options.build,
        main_branch = %options.main_branch,
        "Starting derivation"
    );

    let derivation = derive_detailed(&repo, &options).context("failed to derive version")?;

    for warning in &derivation.warnings {
        ui::display_boundary_warning(warning);
    }

    println!("{}", ui::render(&derivation.version, config.output.format)?);
    Ok(())
}
