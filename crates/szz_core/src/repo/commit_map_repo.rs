//! Commit-map repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Materialize every row of the `commitmap` table as a `CommitMap`.
//!
//! # Invariants
//! - `repo` is `None` exactly when the stored column is NULL.
//! - Text decoding follows the same lenient rule as the commit repository.

use super::scan::{optional_text, read_all, text};
use super::RepoResult;
use crate::db::{close_dataset, open_dataset, DbResult};
use crate::model::commit_map::CommitMap;
use rusqlite::{Connection, Row};
use std::path::Path;

const COMMIT_MAP_TABLE: &str = "commitmap";

/// Positional column order of `commitmap`.
const COMMIT_MAP_COLUMNS: [&str; 3] = ["cid", "original_cid", "repo"];

/// Repository interface for reading commit id mappings.
pub trait CommitMapRepository {
    /// Returns every mapping in storage order. No ordering is guaranteed.
    fn get_all(&self) -> RepoResult<Vec<CommitMap>>;
}

/// SQLite-backed commit-map repository owning its connection.
pub struct SqliteCommitMapRepository {
    conn: Connection,
}

impl SqliteCommitMapRepository {
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

impl CommitMapRepository for SqliteCommitMapRepository {
    fn get_all(&self) -> RepoResult<Vec<CommitMap>> {
        read_all(
            &self.conn,
            COMMIT_MAP_TABLE,
            &COMMIT_MAP_COLUMNS,
            parse_commit_map_row,
        )
    }
}

fn parse_commit_map_row(row: &Row<'_>) -> RepoResult<CommitMap> {
    let [cid, original_cid, repo] = COMMIT_MAP_COLUMNS;

    Ok(CommitMap {
        cid: text(row, 0, cid)?,
        original_cid: text(row, 1, original_cid)?,
        repo: optional_text(row, 2, repo)?,
    })
}
