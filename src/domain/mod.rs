//! Domain logic - pure version rules independent of git operations

pub mod branch;
pub mod sanitize;
pub mod tag;
pub mod version;

pub use branch::BranchContext;
pub use sanitize::sanitize;
pub use tag::{resolve_version_tag, TagRef, VersionTag};
pub use version::{MajorMinorPatch, SemVer};
