use crate::domain::SemVer;
use git2::Oid;
use tracing::{debug, info};

/// A tag as enumerated by the repository: its short name and the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub target: Oid,
}

impl TagRef {
    /// Create a new tag reference
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        TagRef {
            name: name.into(),
            target,
        }
    }

    /// The part of the name expected to hold the version (one leading `v` removed)
    pub fn version_part(&self) -> &str {
        self.name.strip_prefix('v').unwrap_or(&self.name)
    }

    /// Parse the tag name as a version, if it is one
    pub fn version(&self) -> Option<SemVer> {
        SemVer::parse(self.version_part()).ok()
    }
}

/// A tag whose name parsed as a version, and the commit history stops at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub name: String,
    pub version: SemVer,
    pub anchor: Oid,
}

/// Find the first tag, in enumeration order, whose name is a version.
///
/// Tags that are not versions are skipped. This deliberately does not look
/// for the highest version: when several release tags exist the one the
/// repository lists first wins.
pub fn resolve_version_tag<I>(tags: I) -> Option<VersionTag>
where
    I: IntoIterator<Item = TagRef>,
{
    for tag in tags {
        match tag.version() {
            Some(version) => {
                info!(tag = %tag.name, version = %version, "Found version tag");
                return Some(VersionTag {
                    name: tag.name,
                    version,
                    anchor: tag.target,
                });
            }
            None => {
                debug!(tag = %tag.name, "Found tag but could not parse version");
            }
        }
    }

    None
}
