//! Commit repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Materialize every row of the `commits` table as a `Commit`.
//!
//! # Invariants
//! - The connection is opened at construction and released when the
//!   repository is dropped or closed.
//! - Commit messages with invalid UTF-8 are decoded with replacement
//!   characters instead of failing the scan.

use super::scan::{flag, read_all, text};
use super::RepoResult;
use crate::db::{close_dataset, open_dataset, DbResult};
use crate::model::commit::Commit;
use rusqlite::{Connection, Row};
use std::path::Path;

const COMMITS_TABLE: &str = "commits";

/// Positional column order of `commits`.
const COMMIT_COLUMNS: [&str; 9] = [
    "cid",
    "author_name",
    "author_email",
    "author_date",
    "committer_name",
    "committer_email",
    "commit_date",
    "summary",
    "is_merge",
];

/// Repository interface for reading commits.
pub trait CommitsRepository {
    /// Returns every commit in storage order. No ordering is guaranteed.
    fn get_all(&self) -> RepoResult<Vec<Commit>>;
}

/// SQLite-backed commit repository owning its connection.
pub struct SqliteCommitsRepository {
    conn: Connection,
}

impl SqliteCommitsRepository {
    /// Opens the dataset at `path` read-only.
    ///
    /// # Errors
    /// - Returns the driver error when the file is missing, unreadable, or
    ///   not a SQLite database.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::from_connection(open_dataset(path)?))
    }

    /// Wraps an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Closes the connection, reporting failures that a drop would hide.
    pub fn close(self) -> DbResult<()> {
        close_dataset(self.conn)
    }
}

impl CommitsRepository for SqliteCommitsRepository {
    fn get_all(&self) -> RepoResult<Vec<Commit>> {
        read_all(&self.conn, COMMITS_TABLE, &COMMIT_COLUMNS, parse_commit_row)
    }
}

fn parse_commit_row(row: &Row<'_>) -> RepoResult<Commit> {
    let [
        cid,
        author_name,
        author_email,
        author_date,
        committer_name,
        committer_email,
        commit_date,
        summary,
        is_merge,
    ] = COMMIT_COLUMNS;

    Ok(Commit::from((
        text(row, 0, cid)?,
        text(row, 1, author_name)?,
        text(row, 2, author_email)?,
        text(row, 3, author_date)?,
        text(row, 4, committer_name)?,
        text(row, 5, committer_email)?,
        text(row, 6, commit_date)?,
        text(row, 7, summary)?,
        flag(row, 8, is_merge)?,
    )))
}
