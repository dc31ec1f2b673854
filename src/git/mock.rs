use crate::domain::TagRef;
use crate::error::{GverError, Result};
use crate::git::{CommitInfo, CommitIter, Repository};
use git2::Oid;
use std::cell::Cell;

/// Mock repository for testing without actual git operations.
///
/// Commits are kept newest first, tags in insertion order.
pub struct MockRepository {
    commits: Vec<CommitInfo>,
    tags: Vec<TagRef>,
    branch: Option<String>,
    pulled: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository on `main`
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
            branch: Some("main".to_string()),
            pulled: Cell::new(0),
        }
    }

    /// Add a commit older than every commit added so far
    pub fn push_commit(&mut self, info: CommitInfo) {
        self.commits.push(info);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.push(TagRef::new(name, oid));
    }

    /// Set the checked-out branch; `None` makes `current_branch` fail
    pub fn set_branch(&mut self, branch: Option<&str>) {
        self.branch = branch.map(str::to_string);
    }

    /// How many commits have been read through `walk_history`
    pub fn commits_pulled(&self) -> usize {
        self.pulled.get()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn version_tags(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags.clone())
    }

    fn walk_history(&self, _all_branches: bool) -> Result<CommitIter<'_>> {
        Ok(Box::new(self.commits.iter().map(move |commit| {
            self.pulled.set(self.pulled.get() + 1);
            Ok(commit.clone())
        })))
    }

    fn current_branch(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| GverError::repository("HEAD is not a branch"))
    }
}
