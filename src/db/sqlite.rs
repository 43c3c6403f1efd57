// SqliteDatabase: rusqlite backend implementing the Database trait.
//
// Only the path is kept. Each trait method opens its own Connection, runs
// the queries.rs function, and drops the connection before returning, so
// nothing is shared between operations.

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;

use super::models::{RankedResult, StoreOutcome, StoreStats, TitleSummary};
use super::traits::Database;
use crate::text::rank::WordCount;

pub struct SqliteDatabase {
    path: PathBuf,
}

impl SqliteDatabase {
    /// Point at an existing, initialized database file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        super::connect(&self.path)
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.connect()?;
        super::schema::table_count(&conn)
    }

    async fn store_ranking(
        &self,
        title: &str,
        url: &str,
        words: &[WordCount],
    ) -> Result<StoreOutcome> {
        let mut conn = self.connect()?;
        super::queries::store_ranking(&mut conn, title, url, words)
    }

    async fn lookup_ranking(&self, title: &str) -> Result<Option<RankedResult>> {
        let conn = self.connect()?;
        super::queries::lookup_ranking(&conn, title)
    }

    async fn list_titles(&self) -> Result<Vec<TitleSummary>> {
        let conn = self.connect()?;
        super::queries::list_titles(&conn)
    }

    async fn stats(&self) -> Result<StoreStats> {
        let conn = self.connect()?;
        super::queries::stats(&conn)
    }
}
