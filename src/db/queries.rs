// Database queries: every SQL statement the store runs.
//
// Functions take a Connection so they can be tested against an in-memory
// database; the SqliteDatabase backend opens a connection per call and
// delegates here.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{info, warn};

use super::models::{RankedResult, StoreOutcome, StoreStats, TitleSummary};
use crate::text::rank::WordCount;

// --- Titles ---

/// Find the id of a stored title, ignoring case.
///
/// SQLite's NOCASE only folds ASCII, so the lowercased title is also tried
/// for stored titles outside that range.
pub fn find_title_id(conn: &Connection, title: &str) -> Result<Option<i64>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM titles
         WHERE title = ?1 COLLATE NOCASE OR title = ?2
         ORDER BY id
         LIMIT 1",
    )?;
    let id = stmt
        .query_row(params![title, title.to_lowercase()], |row| row.get(0))
        .optional()?;
    Ok(id)
}

/// Store a title and its ranked words, unless the title already exists.
///
/// The existence check and both inserts run in one transaction: either the
/// title row and every word row are written, or nothing is.
pub fn store_ranking(
    conn: &mut Connection,
    title: &str,
    url: &str,
    words: &[WordCount],
) -> Result<StoreOutcome> {
    let tx = conn.transaction().context("Failed to begin transaction")?;

    if let Some(title_id) = find_title_id(&tx, title)? {
        warn!(title, title_id, "Title already stored, skipping insert");
        return Ok(StoreOutcome::AlreadyExists { title_id });
    }

    tx.execute(
        "INSERT INTO titles (title, url) VALUES (?1, ?2)",
        params![title, url],
    )?;
    let title_id = tx.last_insert_rowid();

    {
        let mut stmt = tx.prepare(
            "INSERT INTO counts (title_id, rank, word, count) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (i, wc) in words.iter().enumerate() {
            stmt.execute(params![title_id, (i + 1) as i64, wc.word, wc.count])?;
        }
    }

    tx.commit().context("Failed to commit ranking")?;

    info!(title, title_id, words = words.len(), "Stored ranking");
    Ok(StoreOutcome::Stored { title_id })
}

/// Load a stored ranking by title, ignoring case. Words come back in rank order.
pub fn lookup_ranking(conn: &Connection, title: &str) -> Result<Option<RankedResult>> {
    let Some(title_id) = find_title_id(conn, title)? else {
        return Ok(None);
    };

    let (stored_title, url): (String, String) = conn.query_row(
        "SELECT title, url FROM titles WHERE id = ?1",
        params![title_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let mut stmt =
        conn.prepare("SELECT word, count FROM counts WHERE title_id = ?1 ORDER BY rank")?;
    let rows = stmt.query_map(params![title_id], |row| {
        Ok(WordCount {
            word: row.get(0)?,
            count: row.get(1)?,
        })
    })?;

    let mut words = Vec::new();
    for row in rows {
        words.push(row?);
    }

    Ok(Some(RankedResult {
        title: stored_title,
        url,
        words,
    }))
}

/// All stored titles, alphabetically.
pub fn list_titles(conn: &Connection) -> Result<Vec<TitleSummary>> {
    let mut stmt = conn.prepare(
        "SELECT t.id, t.title, t.url, COUNT(c.rank), t.created_at
         FROM titles t
         LEFT JOIN counts c ON c.title_id = t.id
         GROUP BY t.id
         ORDER BY t.title COLLATE NOCASE, t.id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(TitleSummary {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            word_count: row.get(3)?,
            created_at: row.get(4)?,
        })
    })?;

    let mut titles = Vec::new();
    for row in rows {
        titles.push(row?);
    }
    Ok(titles)
}

/// Row counts for both tables.
pub fn stats(conn: &Connection) -> Result<StoreStats> {
    let titles: i64 = conn.query_row("SELECT COUNT(*) FROM titles", [], |row| row.get(0))?;
    let word_rows: i64 = conn.query_row("SELECT COUNT(*) FROM counts", [], |row| row.get(0))?;
    Ok(StoreStats { titles, word_rows })
}
