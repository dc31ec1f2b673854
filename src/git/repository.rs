use crate::domain::TagRef;
use crate::error::{GverError, Result};
use crate::git::{CommitInfo, CommitIter};
use git2::{ErrorCode, Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            GverError::repository(format!("no git repository at '{}': {}", path.display(), e))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Top of the working tree, or the git directory for a bare repository
    pub fn root(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    fn commit_info(&self, oid: Oid) -> Result<CommitInfo> {
        let commit = self.repo.find_commit(oid)?;
        let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

        Ok(CommitInfo::new(oid, message, commit.parent_count()))
    }
}

impl super::Repository for Git2Repository {
    fn version_tags(&self) -> Result<Vec<TagRef>> {
        let tag_names = self.repo.tag_names(None)?;
        let mut names: Vec<&str> = tag_names.iter().flatten().collect();
        names.sort_unstable();

        let mut tags = Vec::with_capacity(names.len());
        for name in names {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
            match reference.peel_to_commit() {
                Ok(commit) => tags.push(TagRef::new(name, commit.id())),
                // tags on trees or blobs can never be a history anchor
                Err(e) => debug!(
                    tag = name,
                    error = %e,
                    "Skipping tag that does not point to a commit"
                ),
            }
        }

        Ok(tags)
    }

    fn walk_history(&self, all_branches: bool) -> Result<CommitIter<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;

        match revwalk.push_head() {
            Ok(()) => {}
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                debug!("HEAD has no commits yet");
            }
            Err(e) => return Err(e.into()),
        }

        if all_branches {
            revwalk.push_glob("refs/heads")?;
        }

        Ok(Box::new(revwalk.map(move |oid| {
            let oid = oid?;
            self.commit_info(oid)
        })))
    }

    fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) => head
                .shorthand()
                .map(str::to_string)
                .ok_or_else(|| GverError::repository("HEAD name is not valid UTF-8")),
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                // no commits yet, but HEAD still names the branch to be born
                let head = self.repo.find_reference("HEAD")?;
                let target = head.symbolic_target().unwrap_or("HEAD");
                Ok(target
                    .strip_prefix("refs/heads/")
                    .unwrap_or(target)
                    .to_string())
            }
            Err(e) => Err(e.into()),
        }
    }
}
