//! Pure formatting functions for version output.
//!
//! Rendering is separated from printing so every output format is testable.

use crate::boundary::BoundaryWarning;
use crate::domain::SemVer;
use crate::error::Result;
use console::style;
use serde::{Deserialize, Serialize};

/// Output formats understood by `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Major number only
    Major,
    /// Minor number only
    Minor,
    /// Patch number only
    Patch,
    /// major.minor.patch
    #[serde(alias = "majorminorpatch")]
    #[value(alias = "majorminorpatch")]
    MajorMinorPatch,
    /// major.minor.patch-prerelease+build
    #[default]
    Semver,
    /// JSON document containing every other format
    All,
}

/// Every rendering of a version, as emitted by the `all` format.
///
/// Keys are PascalCase: `Major`, `BuildMetadata` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionReport {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: String,
    pub build_metadata: String,
    pub major_minor_patch: String,
    pub semver: String,
}

impl From<&SemVer> for VersionReport {
    fn from(version: &SemVer) -> Self {
        VersionReport {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version.prerelease.clone(),
            build_metadata: version.build.clone(),
            major_minor_patch: version.mmp().to_string(),
            semver: version.to_string(),
        }
    }
}

/// Render a version in the requested format.
pub fn render(version: &SemVer, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Major => version.major().to_string(),
        OutputFormat::Minor => version.minor().to_string(),
        OutputFormat::Patch => version.patch().to_string(),
        OutputFormat::MajorMinorPatch => version.mmp().to_string(),
        OutputFormat::Semver => version.to_string(),
        OutputFormat::All => serde_json::to_string_pretty(&VersionReport::from(version))?,
    };
    Ok(rendered)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}
