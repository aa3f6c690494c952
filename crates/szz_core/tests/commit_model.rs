use std::collections::HashSet;
use szz_core::{Commit, CommitRow};

fn sample_row() -> CommitRow {
    (
        "a1b2c3".to_string(),
        "Ann".to_string(),
        "ann@x.com".to_string(),
        "2020-01-01".to_string(),
        "Ann".to_string(),
        "ann@x.com".to_string(),
        "2020-01-01".to_string(),
        "fix bug".to_string(),
        false,
    )
}

#[test]
fn commit_from_row_keeps_positional_fields() {
    let commit = Commit::from(sample_row());

    assert_eq!(commit.cid(), "a1b2c3");
    assert_eq!(commit.author_name(), "Ann");
    assert_eq!(commit.author_email(), "ann@x.com");
    assert_eq!(commit.author_date(), "2020-01-01");
    assert_eq!(commit.committer_name(), "Ann");
    assert_eq!(commit.committer_email(), "ann@x.com");
    assert_eq!(commit.commit_date(), "2020-01-01");
    assert_eq!(commit.summary(), "fix bug");
    assert!(!commit.is_merge());
}

#[test]
fn commits_from_identical_rows_are_equal_and_hash_alike() {
    let first = Commit::from(sample_row());
    let second = Commit::from(sample_row());

    assert_eq!(first, second);
    let set: HashSet<Commit> = [first, second].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn commits_differing_only_in_merge_flag_are_not_equal() {
    let mut row = sample_row();
    row.8 = true;

    assert_ne!(Commit::from(sample_row()), Commit::from(row));
}

#[test]
fn commit_serializes_with_field_names() {
    let json = serde_json::to_value(Commit::from(sample_row())).unwrap();

    assert_eq!(json["cid"], "a1b2c3");
    assert_eq!(json["committer_email"], "ann@x.com");
    assert_eq!(json["summary"], "fix bug");
    assert_eq!(json["is_merge"], false);
}
