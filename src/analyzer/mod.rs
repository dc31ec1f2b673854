//! Analysis engine for turning commit history into version increments

pub mod version_analyzer;

pub use version_analyzer::{HistoryWalk, VersionAnalyzer, VersionBump, WalkStop};
