use crate::boundary::BoundaryWarning;
use crate::domain::MajorMinorPatch;
use crate::error::Result;
use crate::git::CommitInfo;
use git2::Oid;
use regex::Regex;
use tracing::{debug, info};

const LOG_MESSAGE_LIMIT: usize = 100;

/// Version bump a single commit asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// How a history walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStop {
    /// Reached the commit of the version tag
    Anchor,
    /// Ran out of commits at a root commit
    Root,
    /// Ran out of commits while the last one still had parents
    Incomplete,
    /// There were no commits at all
    Empty,
}

/// Outcome of walking history back to the anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryWalk {
    pub increments: MajorMinorPatch,
    /// Commits classified, not counting the anchor
    pub counted: usize,
    pub stop: WalkStop,
}

impl HistoryWalk {
    /// The non-fatal problem this walk ran into, if any
    pub fn warning(&self) -> Option<BoundaryWarning> {
        match self.stop {
            WalkStop::Empty => Some(BoundaryWarning::NoCommits),
            WalkStop::Incomplete => Some(BoundaryWarning::IncompleteHistory {
                visited: self.counted,
            }),
            WalkStop::Anchor | WalkStop::Root => None,
        }
    }
}

/// Classifies commits by message and accumulates version increments
pub struct VersionAnalyzer {
    major_trigger: Regex,
    minor_trigger: Regex,
}

impl VersionAnalyzer {
    /// Create a new analyzer from the major and minor trigger patterns
    pub fn new(major_trigger: Regex, minor_trigger: Regex) -> Self {
        VersionAnalyzer {
            major_trigger,
            minor_trigger,
        }
    }

    /// Bump a single message asks for, ignoring history context
    pub fn classify(&self, message: &str) -> VersionBump {
        if self.major_trigger.is_match(message) {
            VersionBump::Major
        } else if self.minor_trigger.is_match(message) {
            VersionBump::Minor
        } else {
            VersionBump::Patch
        }
    }

    /// Walk commits newest first until `anchor` or the end of history.
    ///
    /// Every major commit counts. Once one has been seen, older commits no
    /// longer count towards minor or patch; likewise a minor commit stops
    /// patch counting for everything older. Commits that match neither
    /// pattern are patches.
    pub fn walk<I>(&self, commits: I, anchor: Option<Oid>) -> Result<HistoryWalk>
    where
        I: IntoIterator<Item = Result<CommitInfo>>,
    {
        let mut increments = MajorMinorPatch::default();
        let mut counted = 0;
        let mut last_was_root = None;

        for commit in commits {
            let commit = commit?;

            if Some(commit.id) == anchor {
                debug!(commit = %commit.id, "Found start commit, stop increasing version");
                return Ok(self.finish(increments, counted, WalkStop::Anchor));
            }

            counted += 1;
            last_was_root = Some(commit.is_root());
            let message = short_message(commit.summary());

            match self.classify(&commit.message) {
                VersionBump::Major => {
                    increments.major += 1;
                    debug!(commit_message = message, increments = %increments, "Major version increase");
                }
                VersionBump::Minor if increments.major == 0 => {
                    increments.minor += 1;
                    debug!(commit_message = message, increments = %increments, "Minor version increase");
                }
                VersionBump::Patch if increments.major == 0 && increments.minor == 0 => {
                    increments.patch += 1;
                    debug!(commit_message = message, increments = %increments, "Patch version increase");
                }
                // locked out by a newer major or minor commit
                VersionBump::Minor | VersionBump::Patch => {}
            }
        }

        let stop = match last_was_root {
            None => WalkStop::Empty,
            Some(true) => WalkStop::Root,
            Some(false) => WalkStop::Incomplete,
        };

        Ok(self.finish(increments, counted, stop))
    }

    fn finish(&self, increments: MajorMinorPatch, counted: usize, stop: WalkStop) -> HistoryWalk {
        info!(count = counted, increments = %increments, "Parsed all commits");

        HistoryWalk {
            increments,
            counted,
            stop,
        }
    }
}

fn short_message(message: &str) -> &str {
    match message.char_indices().nth(LOG_MESSAGE_LIMIT) {
        Some((idx, _)) => &message[..idx],
        None => message,
    }
}
