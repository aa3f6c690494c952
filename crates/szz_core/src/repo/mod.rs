//! Read-only repositories over a mining dataset.
//!
//! # Responsibility
//! - Define one read-all contract per dataset table.
//! - Keep SQL and row unpacking inside the persistence boundary.
//!
//! # Invariants
//! - Repositories never write to the dataset.
//! - Text columns are decoded leniently; invalid UTF-8 never fails a read.
//! - Driver errors reach callers unchanged inside `RepoError::Db`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod commit_map_repo;
pub mod commits_repo;
mod scan;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for dataset reads.
#[derive(Debug)]
pub enum RepoError {
    /// Connection, SQL or schema failure reported by SQLite.
    Db(DbError),
    /// A row could not be unpacked into its model.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid dataset row: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
