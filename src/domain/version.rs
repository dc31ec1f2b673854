use crate::error::{GverError, Result};
use std::fmt;
use std::str::FromStr;

/// The numeric core of a semantic version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MajorMinorPatch {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl MajorMinorPatch {
    /// Create a new major.minor.patch triple
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        MajorMinorPatch {
            major,
            minor,
            patch,
        }
    }

    /// True when all three components are zero
    pub fn is_zero(&self) -> bool {
        *self == MajorMinorPatch::default()
    }
}

impl fmt::Display for MajorMinorPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Semantic version with optional prerelease and build metadata.
///
/// `prerelease` and `build` are stored without their `-` / `+` separators and
/// are empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemVer {
    pub core: MajorMinorPatch,
    pub prerelease: String,
    pub build: String,
}

impl SemVer {
    /// Create a plain version without prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            core: MajorMinorPatch::new(major, minor, patch),
            ..SemVer::default()
        }
    }

    /// Parse a version in the canonical `major.minor.patch[-prerelease][+build]` form.
    ///
    /// The whole string must match; leading zeros, empty identifiers and
    /// prefixes such as `v` are rejected rather than coerced.
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = semver::Version::parse(text).map_err(|e| {
            GverError::version(format!("'{}' is not a semantic version: {}", text, e))
        })?;

        Ok(SemVer {
            core: MajorMinorPatch::new(parsed.major, parsed.minor, parsed.patch),
            prerelease: parsed.pre.as_str().to_string(),
            build: parsed.build.as_str().to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.core.major
    }

    pub fn minor(&self) -> u64 {
        self.core.minor
    }

    pub fn patch(&self) -> u64 {
        self.core.patch
    }

    /// The `major.minor.patch` part only
    pub fn mmp(&self) -> MajorMinorPatch {
        self.core
    }

    /// Add increments component-wise; prerelease and build are left alone.
    ///
    /// Fails without touching `self` when a component would exceed `u64::MAX`.
    pub fn add_increments(&mut self, increments: MajorMinorPatch) -> Result<()> {
        let core = MajorMinorPatch::new(
            checked_add("major", self.core.major, increments.major)?,
            checked_add("minor", self.core.minor, increments.minor)?,
            checked_add("patch", self.core.patch, increments.patch)?,
        );
        self.core = core;
        Ok(())
    }
}

fn checked_add(component: &str, base: u64, increment: u64) -> Result<u64> {
    base.checked_add(increment).ok_or_else(|| {
        GverError::version(format!(
            "{} version {} cannot be increased by {}",
            component, base, increment
        ))
    })
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.core)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for SemVer {
    type Err = GverError;

    fn from_str(s: &str) -> Result<Self> {
        SemVer::parse(s)
    }
}
