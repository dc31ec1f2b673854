// Shared helpers for building throwaway git repositories
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use std::cell::Cell;
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    clock: Cell<i64>,
}

impl TestRepo {
    /// Empty repository whose HEAD points at the unborn branch `main`
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        repo.set_head("refs/heads/main")
            .expect("Could not point HEAD at main");

        TestRepo {
            dir,
            repo,
            clock: Cell::new(1_700_000_000),
        }
    }

    fn signature(&self) -> Signature<'static> {
        // strictly increasing times keep the time-sorted walk deterministic
        self.clock.set(self.clock.get() + 60);
        Signature::new("Test User", "test@example.com", &Time::new(self.clock.get(), 0))
            .expect("Could not create signature")
    }

    /// Commit on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        self.commit_on("HEAD", message, &parents)
    }

    /// Commit on `branch` on top of `parent`, leaving HEAD alone
    pub fn commit_on_branch(&self, branch: &str, parent: Oid, message: &str) -> Oid {
        let parent = self.repo.find_commit(parent).expect("Could not find parent");
        self.commit_on(&format!("refs/heads/{}", branch), message, &[&parent])
    }

    fn commit_on(&self, update_ref: &str, message: &str, parents: &[&git2::Commit]) -> Oid {
        let sig = self.signature();
        let tree_id = self
            .repo
            .treebuilder(None)
            .and_then(|builder| builder.write())
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        self.repo
            .commit(Some(update_ref), &sig, &sig, message, &tree, parents)
            .expect("Could not create commit")
    }

    pub fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn annotated_tag(&self, name: &str, target: Oid) {
        let sig = self.signature();
        let object = self.repo.find_object(target, None).unwrap();
        self.repo
            .tag(name, &object, &sig, &format!("Release {}", name), false)
            .expect("Could not create annotated tag");
    }

    /// Create `name` at HEAD and check it out
    pub fn switch_to_new_branch(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &head, false).unwrap();
        self.repo.set_head(&format!("refs/heads/{}", name)).unwrap();
    }
}
