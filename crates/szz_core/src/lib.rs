//! Read-only access to SZZ mining datasets stored in SQLite.
//! Commits and commit-id remappings are exposed through one repository each.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{open_dataset, open_dataset_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::commit::{Commit, CommitRow};
pub use model::commit_map::CommitMap;
pub use repo::commit_map_repo::{CommitMapRepository, SqliteCommitMapRepository};
pub use repo::commits_repo::{CommitsRepository, SqliteCommitsRepository};
pub use repo::{RepoError, RepoResult};
