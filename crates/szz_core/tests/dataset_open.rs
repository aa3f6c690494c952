use rusqlite::Connection;
use std::fs;
use szz_core::{open_dataset, DbError, SqliteCommitMapRepository, SqliteCommitsRepository};

#[test]
fn opening_missing_file_fails_at_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.db");

    let err = SqliteCommitsRepository::open(&path).err().unwrap();

    assert!(matches!(err, DbError::Sqlite(_)));
    assert!(!path.exists(), "read-only open must not create the file");
}

#[test]
fn opening_non_database_file_fails_at_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");
    fs::write(&path, "this is a plain text file, not a sqlite database. ".repeat(20)).unwrap();

    let err = SqliteCommitMapRepository::open(&path).err().unwrap();

    assert!(matches!(err, DbError::Sqlite(_)));
    assert!(err.to_string().contains("not a database"));
}

#[test]
fn opened_dataset_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("CREATE TABLE commitmap (cid TEXT, original_cid TEXT, repo TEXT);")
        .unwrap();

    let conn = open_dataset(&path).unwrap();
    let result = conn.execute("INSERT INTO commitmap VALUES ('a', 'b', NULL);", []);

    assert!(result.is_err());
}

#[test]
fn both_repositories_can_share_one_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch(
            "CREATE TABLE commits (
                cid TEXT, author_name TEXT, author_email TEXT, author_date TEXT,
                committer_name TEXT, committer_email TEXT, commit_date TEXT,
                summary TEXT, is_merge INTEGER
             );
             CREATE TABLE commitmap (cid TEXT, original_cid TEXT, repo TEXT);
             INSERT INTO commits VALUES ('c1', 'A', 'a@x', 'd', 'A', 'a@x', 'd', 's', 0);
             INSERT INTO commitmap VALUES ('c1', 'o1', NULL);",
        )
        .unwrap();

    let commits = SqliteCommitsRepository::open(&path).unwrap();
    let maps = SqliteCommitMapRepository::open(&path).unwrap();

    let all_commits = szz_core::CommitsRepository::get_all(&commits).unwrap();
    let all_maps = szz_core::CommitMapRepository::get_all(&maps).unwrap();
    assert_eq!(all_commits[0].cid(), all_maps[0].cid);

    commits.close().unwrap();
    maps.close().unwrap();
}
