//! Shared full-table scan and lenient column decoding.

use super::{RepoError, RepoResult};
use log::{debug, error};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use std::time::Instant;

/// Runs `SELECT * FROM <table>` and unpacks every row with `parse`.
///
/// Rows come back in whatever order SQLite yields them. The statement must
/// produce exactly `columns.len()` columns.
pub(crate) fn read_all<T, F>(
    conn: &Connection,
    table: &'static str,
    columns: &[&str],
    parse: F,
) -> RepoResult<Vec<T>>
where
    F: Fn(&Row<'_>) -> RepoResult<T>,
{
    let started_at = Instant::now();
    match scan(conn, table, columns, parse) {
        Ok(items) => {
            debug!(
                "event=repo_get_all module=repo status=ok table={} rows={} duration_ms={}",
                table,
                items.len(),
                started_at.elapsed().as_millis()
            );
            Ok(items)
        }
        Err(err) => {
            error!(
                "event=repo_get_all module=repo status=error table={} duration_ms={} error={}",
                table,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn scan<T, F>(conn: &Connection, table: &str, columns: &[&str], parse: F) -> RepoResult<Vec<T>>
where
    F: Fn(&Row<'_>) -> RepoResult<T>,
{
    let mut stmt = conn.prepare(&format!("SELECT * FROM {table};"))?;

    let found = stmt.column_count();
    if found != columns.len() {
        return Err(RepoError::InvalidData(format!(
            "table `{table}` has {found} columns, expected {}",
            columns.len()
        )));
    }

    let mut rows = stmt.query([])?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }

    Ok(items)
}

/// Reads a required text column, replacing invalid UTF-8 sequences.
pub(crate) fn text(row: &Row<'_>, idx: usize, column: &str) -> RepoResult<String> {
    optional_text(row, idx, column)?
        .ok_or_else(|| RepoError::InvalidData(format!("NULL in required column `{column}`")))
}

/// Reads a nullable text column, replacing invalid UTF-8 sequences.
pub(crate) fn optional_text(
    row: &Row<'_>,
    idx: usize,
    column: &str,
) -> RepoResult<Option<String>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Ok(Some(String::from_utf8_lossy(bytes).into_owned()))
        }
        other => Err(RepoError::InvalidData(format!(
            "expected text in column `{column}`, found {}",
            other.data_type()
        ))),
    }
}

/// Reads an integer flag column; any non-zero value is `true`.
pub(crate) fn flag(row: &Row<'_>, idx: usize, column: &str) -> RepoResult<bool> {
    match row.get_ref(idx)? {
        ValueRef::Integer(value) => Ok(value != 0),
        other => Err(RepoError::InvalidData(format!(
            "expected integer flag in column `{column}`, found {}",
            other.data_type()
        ))),
    }
}
