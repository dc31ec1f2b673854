use crate::domain::{sanitize, BranchContext, MajorMinorPatch, SemVer};
use crate::error::Result;
use regex::Regex;
use tracing::debug;

/// Builds the final version from the tagged base and the walked increments.
///
/// - increments are added to `base` component-wise
/// - `branch` becomes the sanitized prerelease unless it matches `main_branch`;
///   `None` leaves the prerelease of `base` untouched
/// - a non-empty `build` becomes the sanitized build metadata
///
/// Fails when an increment would overflow a version component.
///
/// # Example
/// ```
/// # use gver::domain::{MajorMinorPatch, SemVer};
/// # use gver::version::assemble;
/// let main = regex::Regex::new("^main$").unwrap();
/// let v = assemble(
///     SemVer::new(1, 2, 0),
///     MajorMinorPatch::new(0, 1, 0),
///     Some("feature/login"),
///     &main,
///     "123.abc",
/// )
/// .unwrap();
/// assert_eq!(v.to_string(), "1.3.0-feature-login+123.abc");
/// ```
pub fn assemble(
    base: SemVer,
    increments: MajorMinorPatch,
    branch: Option<&str>,
    main_branch: &Regex,
    build: &str,
) -> Result<SemVer> {
    let mut version = base;
    version.add_increments(increments)?;

    if let Some(name) = branch {
        let branch = BranchContext::new(name, main_branch);
        match branch.prerelease() {
            Some(prerelease) => version.prerelease = prerelease,
            None => debug!(
                main_branch = %main_branch,
                current_branch = %branch.name,
                "Branch name matches main branch (not adding it to the version)"
            ),
        }
    }

    if !build.is_empty() {
        version.build = sanitize(build);
    }

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_only() -> Regex {
        Regex::new("^main$").unwrap()
    }

    #[test]
    fn test_feature_branch_and_build() {
        let v = assemble(
            SemVer::new(0, 3, 1),
            MajorMinorPatch::default(),
            Some("feature/login"),
            &main_only(),
            "123.abc",
        )
        .unwrap();
        assert_eq!(v.to_string(), "0.3.1-feature-login+123.abc");
    }

    #[test]
    fn test_main_branch_has_no_prerelease() {
        let v = assemble(
            SemVer::new(1, 0, 0),
            MajorMinorPatch::new(0, 0, 2),
            Some("main"),
            &main_only(),
            "",
        )
        .unwrap();
        assert_eq!(v.to_string(), "1.0.2");
    }

    #[test]
    fn test_branch_disabled_keeps_base_prerelease() {
        let base = SemVer::parse("2.0.0-rc.1").unwrap();
        let v = assemble(base, MajorMinorPatch::new(0, 1, 0), None, &main_only(), "").unwrap();
        assert_eq!(v.to_string(), "2.1.0-rc.1");
    }

    #[test]
    fn test_branch_replaces_base_prerelease() {
        let base = SemVer::parse("2.0.0-rc.1").unwrap();
        let v = assemble(
            base,
            MajorMinorPatch::default(),
            Some("develop"),
            &main_only(),
            "",
        )
        .unwrap();
        assert_eq!(v.prerelease, "develop");
    }

    #[test]
    fn test_build_is_sanitized() {
        let v = assemble(
            SemVer::default(),
            MajorMinorPatch::new(0, 0, 1),
            None,
            &main_only(),
            ".ci/run 42.",
        )
        .unwrap();
        assert_eq!(v.build, "ci-run-42");
        assert_eq!(v.to_string(), "0.0.1+ci-run-42");
    }

    #[test]
    fn test_empty_build_keeps_base_build() {
        let base = SemVer::parse("1.0.0+sha.abc").unwrap();
        let v = assemble(base, MajorMinorPatch::default(), None, &main_only(), "").unwrap();
        assert_eq!(v.build, "sha.abc");
    }

    #[test]
    fn test_overflowing_increment_is_error() {
        let err = assemble(
            SemVer::new(u64::MAX, 0, 0),
            MajorMinorPatch::new(1, 0, 0),
            Some("main"),
            &main_only(),
            "",
        )
        .unwrap_err();
        assert!(err.to_string().contains("major version"));
    }
}
