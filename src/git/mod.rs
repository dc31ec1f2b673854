//! Git access layer
//!
//! The version engine only needs three things from a repository: its tags,
//! a lazy walk over its history, and the name of the checked-out branch.
//! The [Repository] trait captures exactly that, so the engine can run
//! against a real repository or an in-memory one.
//!
//! - [repository::Git2Repository]: backed by libgit2 through the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use gver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> gver::Result<()> {
//! for commit in repo.walk_history(true)? {
//!     let commit = commit?;
//!     println!("{} {}", commit.id, commit.summary());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagRef;
use crate::error::Result;
use git2::Oid;

/// Commit information needed for classification
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit id
    pub id: Oid,
    /// The full commit message
    pub message: String,
    /// Number of parents; zero for a root commit
    pub parent_count: usize,
}

impl CommitInfo {
    /// Create commit info from its parts
    pub fn new(id: Oid, message: impl Into<String>, parent_count: usize) -> Self {
        CommitInfo {
            id,
            message: message.into(),
            parent_count,
        }
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// True when the commit has no parents
    pub fn is_root(&self) -> bool {
        self.parent_count == 0
    }
}

/// Lazy, forward-only sequence of commits, newest first.
///
/// Dropping the iterator stops the walk; no further commits are read.
pub type CommitIter<'a> = Box<dyn Iterator<Item = Result<CommitInfo>> + 'a>;

/// Read-only repository operations used to derive a version
pub trait Repository {
    /// All tags with the commit each one points to.
    ///
    /// Annotated tags are peeled to their commit. The order is whatever the
    /// implementation enumerates by default (by name for [Git2Repository]);
    /// callers rely on it when picking the first version tag.
    fn version_tags(&self) -> Result<Vec<TagRef>>;

    /// Walk the commit history newest first.
    ///
    /// With `all_branches` every local branch head is a starting point in
    /// addition to `HEAD`; otherwise only `HEAD` is walked. An empty
    /// repository yields an empty sequence.
    fn walk_history(&self, all_branches: bool) -> Result<CommitIter<'_>>;

    /// Short name of the checked-out branch (e.g. `main`, `feature/login`).
    fn current_branch(&self) -> Result<String>;
}
