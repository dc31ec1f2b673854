use crate::domain::sanitize;
use regex::Regex;

/// Represents the checked-out branch and whether it is the release branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_main: bool,
}

impl BranchContext {
    /// Classify a branch name against the release-branch pattern
    pub fn new(name: impl Into<String>, main_branch: &Regex) -> Self {
        let name = name.into();
        let is_main = main_branch.is_match(&name);

        BranchContext { name, is_main }
    }

    /// Prerelease label for this branch, `None` on the release branch
    pub fn prerelease(&self) -> Option<String> {
        if self.is_main {
            None
        } else {
            Some(sanitize(&self.name))
        }
    }
}
