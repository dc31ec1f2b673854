//! Version derivation workflow
//!
//! Ties the pieces together: resolve the version tag, walk history back to
//! it, then decorate the result. Kept separate from argument parsing so the
//! workflow can be called programmatically without depending on clap.

use regex::Regex;
use tracing::debug;

use crate::analyzer::VersionAnalyzer;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{resolve_version_tag, MajorMinorPatch, SemVer, VersionTag};
use crate::error::{GverError, Result};
use crate::git::Repository;
use crate::version::assemble;

/// Compiled settings for one derivation
#[derive(Debug, Clone)]
pub struct DeriveOptions {
    pub major_trigger: Regex,
    pub minor_trigger: Regex,
    pub main_branch: Regex,
    pub include_branch: bool,
    pub build: String,
}

impl DeriveOptions {
    /// Compile the configured patterns.
    ///
    /// # Returns
    /// * `Err(GverError::Pattern)` - naming the first pattern that fails to compile
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(DeriveOptions {
            major_trigger: compile("major", &config.triggers.major)?,
            minor_trigger: compile("minor", &config.triggers.minor)?,
            main_branch: compile("main branch", &config.triggers.main_branch)?,
            include_branch: config.version.include_branch,
            build: config.version.build.clone(),
        })
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| GverError::pattern(name, e))
}

/// Everything learned while deriving a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// The derived version
    pub version: SemVer,
    /// The tag the version was based on, `None` when starting from 0.0.0
    pub base: Option<VersionTag>,
    pub increments: MajorMinorPatch,
    /// Branch used for the prerelease check, `None` when branches are ignored
    pub branch: Option<String>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Derive the version of the repository's current state.
pub fn derive<R: Repository + ?Sized>(repo: &R, options: &DeriveOptions) -> Result<SemVer> {
    derive_detailed(repo, options).map(|derivation| derivation.version)
}

/// Derive the version and report how it was reached.
pub fn derive_detailed<R: Repository + ?Sized>(
    repo: &R,
    options: &DeriveOptions,
) -> Result<Derivation> {
    let tags = repo.version_tags().map_err(|e| e.during("reading tags"))?;
    let base = resolve_version_tag(tags);
    if base.is_none() {
        debug!("No version tag found, starting from 0.0.0");
    }

    let analyzer = VersionAnalyzer::new(
        options.major_trigger.clone(),
        options.minor_trigger.clone(),
    );
    let commits = repo
        .walk_history(true)
        .map_err(|e| e.during("walking history"))?;
    let walk = analyzer
        .walk(commits, base.as_ref().map(|tag| tag.anchor))
        .map_err(|e| e.during("walking history"))?;

    let branch = if options.include_branch {
        let name = repo
            .current_branch()
            .map_err(|e| e.during("reading current branch"))?;
        debug!(branch = %name, "Found branch name");
        Some(name)
    } else {
        None
    };

    let start = base
        .as_ref()
        .map(|tag| tag.version.clone())
        .unwrap_or_default();
    let version = assemble(
        start,
        walk.increments,
        branch.as_deref(),
        &options.main_branch,
        &options.build,
    )
    .map_err(|e| e.during("adding increments"))?;

    let warnings: Vec<BoundaryWarning> = walk.warning().into_iter().collect();
    if !warnings.is_empty() {
        debug!(version = %version, "Version derived from incomplete information");
    }

    Ok(Derivation {
        version,
        base,
        increments: walk.increments,
        branch,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{CommitInfo, MockRepository};
    use git2::Oid;

    fn oid(n: u8) -> Oid {
        Oid::from_bytes(&[n; 20]).unwrap()
    }

    fn options() -> DeriveOptions {
        DeriveOptions::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_no_tags_three_plain_commits() {
        let mut repo = MockRepository::new();
        repo.push_commit(CommitInfo::new(oid(3), "update readme", 1));
        repo.push_commit(CommitInfo::new(oid(2), "tweak", 1));
        repo.push_commit(CommitInfo::new(oid(1), "initial commit", 0));

        let derivation = derive_detailed(&repo, &options()).unwrap();
        assert_eq!(derivation.version.to_string(), "0.0.3");
        assert_eq!(derivation.base, None);
        assert!(derivation.warnings.is_empty());
        assert_eq!(repo.commits_pulled(), 3);
    }

    #[test]
    fn test_major_after_tag_locks_out_patch() {
        let mut repo = MockRepository::new();
        repo.push_commit(CommitInfo::new(oid(4), "feat(api)!: new response format", 1));
        repo.push_commit(CommitInfo::new(oid(3), "plain change", 1));
        repo.push_commit(CommitInfo::new(oid(2), "release", 1));
        repo.push_commit(CommitInfo::new(oid(1), "initial commit", 0));
        repo.add_tag("v1.2.0", oid(2));

        let derivation = derive_detailed(&repo, &options()).unwrap();
        assert_eq!(derivation.version, SemVer::new(2, 2, 0));
        assert_eq!(derivation.increments, MajorMinorPatch::new(1, 0, 0));
        assert_eq!(derivation.base.unwrap().name, "v1.2.0");
        // the anchor ends the walk; the root is never read
        assert_eq!(repo.commits_pulled(), 3);
    }

    #[test]
    fn test_feature_branch_with_build() {
        let mut repo = MockRepository::new();
        repo.push_commit(CommitInfo::new(oid(1), "feat: login form", 0));
        repo.set_branch(Some("feature/login"));

        let mut opts = options();
        opts.build = "123.abc".to_string();

        let version = derive(&repo, &opts).unwrap();
        assert_eq!(version.to_string(), "0.1.0-feature-login+123.abc");
    }

    #[test]
    fn test_main_branch_has_no_prerelease() {
        let mut repo = MockRepository::new();
        repo.push_commit(CommitInfo::new(oid(1), "init", 0));

        let derivation = derive_detailed(&repo, &options()).unwrap();
        assert_eq!(derivation.version.to_string(), "0.0.1");
        assert_eq!(derivation.branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_unparseable_tag_is_skipped() {
        let mut repo = MockRepository::new();
        repo.push_commit(CommitInfo::new(oid(2), "fix: bug", 1));
        repo.push_commit(CommitInfo::new(oid(1), "release", 0));
        repo.add_tag("notaversion", oid(2));
        repo.add_tag("v0.5.0", oid(1));

        let version = derive(&repo, &options()).unwrap();
        assert_eq!(version.to_string(), "0.5.1");
    }

    #[test]
    fn test_include_branch_disabled_ignores_head() {
        let mut repo = MockRepository::new();
        repo.push_commit(CommitInfo::new(oid(1), "init", 0));
        repo.set_branch(None);

        let mut opts = options();
        opts.include_branch = false;

        let derivation = derive_detailed(&repo, &opts).unwrap();
        assert_eq!(derivation.version.to_string(), "0.0.1");
        assert_eq!(derivation.branch, None);
    }

    #[test]
    fn test_branch_error_has_operation_context() {
        let mut repo = MockRepository::new();
        repo.set_branch(None);

        let err = derive(&repo, &options()).unwrap_err();
        assert!(err.to_string().starts_with("Failed reading current branch"));
    }

    #[test]
    fn test_empty_repository_warns() {
        let repo = MockRepository::new();

        let derivation = derive_detailed(&repo, &options()).unwrap();
        assert_eq!(derivation.version, SemVer::default());
        assert_eq!(derivation.warnings, vec![BoundaryWarning::NoCommits]);
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let mut config = Config::default();
        config.triggers.minor = "feat(".to_string();

        let err = DeriveOptions::from_config(&config).unwrap_err();
        assert!(matches!(err, GverError::Pattern { name: "minor", .. }));
    }

    #[test]
    fn test_increment_overflow_is_reported() {
        let mut repo = MockRepository::new();
        repo.push_commit(CommitInfo::new(oid(2), "feat!: x", 1));
        repo.push_commit(CommitInfo::new(oid(1), "release", 0));
        repo.add_tag("v18446744073709551615.0.0", oid(1));

        let err = derive(&repo, &options()).unwrap_err();
        assert!(matches!(
            err,
            GverError::Context {
                operation: "adding increments",
                ..
            }
        ));
        assert!(err.to_string().starts_with("Failed adding increments"));
    }
}
