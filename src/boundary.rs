use std::fmt;

/// Non-fatal conditions met while deriving a version.
/// The version is still produced, but these should be reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// The repository has no commits
    NoCommits,
    /// History ended before the version tag or a root commit was reached
    IncompleteHistory { visited: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoCommits => write!(f, "No git history found (no commits)"),
            BoundaryWarning::IncompleteHistory { visited } => write!(
                f,
                "Did not find the complete git history after {} commits. Version might be incorrect.",
                visited
            ),
        }
    }
}
