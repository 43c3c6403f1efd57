// Database layer: SQLite storage for titles and their ranked words.
//
// rusqlite's "bundled" feature means there's no system SQLite dependency.
// The database file lives wherever WORDRANK_DB_PATH points (defaults to
// ./wordrank.db).

pub mod models;
pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use traits::Database;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create the database file and its tables if needed.
///
/// Called by `wordrank init`; safe to run again on an existing database.
pub fn initialize(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "Failed to create directory for database: {}",
                    db_path.display()
                )
            })?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    // WAL is persistent in the file, so later connections inherit it
    conn.pragma_update(None, "journal_mode", "WAL")?;

    schema::create_tables(&conn)?;

    Ok(())
}

/// Open one connection to an existing database.
pub fn connect(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}

/// Initialize the database and return the SQLite backend.
pub fn initialize_sqlite(db_path: &Path) -> Result<Arc<dyn Database>> {
    initialize(db_path)?;
    Ok(Arc::new(sqlite::SqliteDatabase::new(db_path)))
}

/// Return the SQLite backend for a database that must already exist.
pub fn open_sqlite(db_path: &Path) -> Result<Arc<dyn Database>> {
    if !db_path.exists() {
        anyhow::bail!(
            "Database not found at {}. Run `wordrank init` first.",
            db_path.display()
        );
    }
    Ok(Arc::new(sqlite::SqliteDatabase::new(db_path)))
}
