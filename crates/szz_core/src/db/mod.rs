//! SQLite connection bootstrap for mining datasets.
//!
//! # Responsibility
//! - Open dataset files read-only and verify they are SQLite databases.
//! - Carry driver errors to callers without reinterpreting them.
//!
//! # Invariants
//! - Datasets are never created or written by this crate.
//! - A returned connection has already read the database header.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{close_dataset, open_dataset, open_dataset_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
