//! Records read from a mining dataset.
//!
//! # Responsibility
//! - Define the value types produced by the repositories.
//!
//! # Invariants
//! - `Commit` is immutable once built; `CommitMap` is a plain mutable record.
//! - No referential check ties `CommitMap::cid` to a stored `Commit`.

pub mod commit;
pub mod commit_map;
