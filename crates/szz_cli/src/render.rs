//! Text and JSON output for `szz-data` subcommands.
//!
//! # Invariants
//! - Every function writes only to the given writer and returns its errors.
//! - Index output is ordered by key.

use crate::cli::IndexKey;
use std::collections::BTreeMap;
use std::io::{self, Write};
use szz_core::{Commit, CommitMap};

/// One line per commit: cid, merge marker, commit date, author email and the
/// first line of the message. `json` switches to a pretty JSON array.
pub fn write_commits(out: &mut impl Write, commits: &[Commit], json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, commits)?;
        return writeln!(out);
    }

    for commit in commits {
        let title = commit.summary().lines().next().unwrap_or_default();
        let marker = if commit.is_merge() { "M" } else { "-" };
        writeln!(
            out,
            "{} {} {} <{}> {}",
            commit.cid(),
            marker,
            commit.commit_date(),
            commit.author_email(),
            title
        )?;
    }
    Ok(())
}

/// One line per mapping: cid, original cid and repo (`-` when absent).
pub fn write_commit_maps(out: &mut impl Write, maps: &[CommitMap], json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, maps)?;
        return writeln!(out);
    }

    for map in maps {
        writeln!(
            out,
            "{} {} {}",
            map.cid,
            map.original_cid,
            map.repo.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

/// JSON object keyed by the chosen id; duplicate keys keep the last mapping.
pub fn write_index(out: &mut impl Write, maps: &[CommitMap], key: IndexKey) -> io::Result<()> {
    let index = match key {
        IndexKey::Cid => CommitMap::index_by_cid(maps),
        IndexKey::OriginalCid => CommitMap::index_by_original_cid(maps),
    };
    let ordered: BTreeMap<_, _> = index.into_iter().collect();

    serde_json::to_writer_pretty(&mut *out, &ordered)?;
    writeln!(out)
}

pub fn write_stats(out: &mut impl Write, commits: &[Commit], maps: &[CommitMap]) -> io::Result<()> {
    let merges = commits.iter().filter(|commit| commit.is_merge()).count();
    writeln!(out, "commits={}", commits.len())?;
    writeln!(out, "merge_commits={merges}")?;
    writeln!(out, "commitmap={}", maps.len())
}

#[cfg(test)]
mod tests {
    use super::{write_commit_maps, write_commits, write_index, write_stats};
    use crate::cli::IndexKey;
    use szz_core::{Commit, CommitMap};

    fn commit(cid: &str, summary: &str, is_merge: bool) -> Commit {
        Commit::from((
            cid.to_string(),
            "Ann".to_string(),
            "ann@x.com".to_string(),
            "2020-01-01".to_string(),
            "Ann".to_string(),
            "ann@x.com".to_string(),
            "2020-01-02".to_string(),
            summary.to_string(),
            is_merge,
        ))
    }

    fn render(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commit_lines_use_first_message_line_and_merge_marker() {
        let commits = vec![
            commit("c1", "fix bug\n\nlong body", false),
            commit("c2", "Merge branch 'dev'", true),
        ];

        let text = render(|out| write_commits(out, &commits, false));

        assert_eq!(
            text,
            "c1 - 2020-01-02 <ann@x.com> fix bug\n\
             c2 M 2020-01-02 <ann@x.com> Merge branch 'dev'\n"
        );
    }

    #[test]
    fn commits_json_is_an_array() {
        let commits = vec![commit("c1", "fix bug", false)];

        let text = render(|out| write_commits(out, &commits, true));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["cid"], "c1");
        assert_eq!(value[0]["is_merge"], false);
    }

    #[test]
    fn commit_map_lines_mark_missing_repo() {
        let maps = vec![
            CommitMap::with_repo("new1", "old1", "repoA"),
            CommitMap::new("new2", "old2"),
        ];

        let text = render(|out| write_commit_maps(out, &maps, false));

        assert_eq!(text, "new1 old1 repoA\nnew2 old2 -\n");
    }

    #[test]
    fn index_by_cid_is_sorted_and_keeps_last_duplicate() {
        let maps = vec![
            CommitMap::new("zeta", "old0"),
            CommitMap::new("dup", "old1"),
            CommitMap::with_repo("dup", "old2", "repoB"),
        ];

        let text = render(|out| write_index(out, &maps, IndexKey::Cid));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["dup"]["original_cid"], "old2");
        assert_eq!(value["dup"]["repo"], "repoB");
        assert_eq!(value["zeta"]["original_cid"], "old0");
        assert!(text.find("\"dup\"").unwrap() < text.find("\"zeta\"").unwrap());
    }

    #[test]
    fn index_by_original_cid_uses_original_ids_as_keys() {
        let maps = vec![CommitMap::new("new1", "old1"), CommitMap::new("new2", "old2")];

        let text = render(|out| write_index(out, &maps, IndexKey::OriginalCid));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["old1"]["cid"], "new1");
        assert_eq!(value["old2"]["cid"], "new2");
        assert!(value.get("new1").is_none());
    }

    #[test]
    fn stats_count_merge_commits() {
        let commits = vec![
            commit("c1", "a", false),
            commit("c2", "b", true),
            commit("c3", "c", true),
            commit("c4", "d", false),
        ];
        let maps = vec![CommitMap::new("c1", "o1")];

        let text = render(|out| write_stats(out, &commits, &maps));

        assert_eq!(text, "commits=4\nmerge_commits=2\ncommitmap=1\n");
    }
}
