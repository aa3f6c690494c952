//! Commit metadata model.
//!
//! # Responsibility
//! - Hold the metadata of one version-control commit as read from `commits`.
//!
//! # Invariants
//! - A `Commit` is never mutated after construction; fields are read-only.
//! - Equality and hashing compare all nine fields.
//! - Timestamps are kept as the stored text, unparsed.

use serde::Serialize;

/// Positional row shape of the `commits` table.
///
/// Order: cid, author name, author email, author date, committer name,
/// committer email, commit date, summary, merge flag.
pub type CommitRow = (
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    bool,
);

/// Immutable metadata of one commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Commit {
    cid: String,
    author_name: String,
    author_email: String,
    author_date: String,
    committer_name: String,
    committer_email: String,
    commit_date: String,
    summary: String,
    is_merge: bool,
}

impl From<CommitRow> for Commit {
    fn from(row: CommitRow) -> Self {
        let (
            cid,
            author_name,
            author_email,
            author_date,
            committer_name,
            committer_email,
            commit_date,
            summary,
            is_merge,
        ) = row;

        Self {
            cid,
            author_name,
            author_email,
            author_date,
            committer_name,
            committer_email,
            commit_date,
            summary,
            is_merge,
        }
    }
}

impl Commit {
    /// Version-control hash of this commit.
    pub fn cid(&self) -> &str {
        &self.cid
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_email(&self) -> &str {
        &self.author_email
    }

    /// Author timestamp exactly as stored.
    pub fn author_date(&self) -> &str {
        &self.author_date
    }

    pub fn committer_name(&self) -> &str {
        &self.committer_name
    }

    pub fn committer_email(&self) -> &str {
        &self.committer_email
    }

    /// Commit timestamp exactly as stored.
    pub fn commit_date(&self) -> &str {
        &self.commit_date
    }

    /// Commit message. Invalid UTF-8 from storage has already been replaced.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// True when the commit has more than one parent.
    pub fn is_merge(&self) -> bool {
        self.is_merge
    }
}
