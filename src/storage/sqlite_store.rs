// SQLite history of extractions
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;

use super::CoordinateSink;
use crate::types::{CoordinatePair, Extraction, Result};

pub struct SqliteStore {
    conn: Connection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredExtraction {
    pub id: i64,
    pub source: String,
    pub extraction: Extraction,
    pub extracted_at: String,
}

impl SqliteStore {
    /// Open (or create) a store at `path`; `None` keeps everything in memory.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        let conn = if let Some(p) = path {
            Connection::open(p)?
        } else {
            Connection::open_in_memory()?
        };

        Self::create_schema(&conn)?;

        Ok(Self { conn })
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(r#"
            CREATE TABLE IF NOT EXISTS extractions (
                id INTEGER PRIMARY KEY,
                source TEXT NOT NULL,
                original_lat TEXT NOT NULL,
                original_lon TEXT NOT NULL,
                adjusted_lat TEXT NOT NULL,
                adjusted_lon TEXT NOT NULL,
                extracted_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_extractions_time
                ON extractions(extracted_at);
        "#)?;
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM extractions",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<StoredExtraction>> {
        let mut stmt = self.conn.prepare(
            r#"SELECT id, source, original_lat, original_lon,
                      adjusted_lat, adjusted_lon, extracted_at
               FROM extractions
               ORDER BY id DESC
               LIMIT ?1"#,
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(StoredExtraction {
                id: row.get(0)?,
                source: row.get(1)?,
                extraction: Extraction {
                    original: CoordinatePair::new(
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ),
                    adjusted: CoordinatePair::new(
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                    ),
                },
                extracted_at: row.get(6)?,
            })
        })?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

impl CoordinateSink for SqliteStore {
    fn record(&mut self, source: &str, extraction: &Extraction) -> Result<()> {
        self.conn.execute(
            r#"INSERT INTO extractions
                   (source, original_lat, original_lon, adjusted_lat, adjusted_lon, extracted_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            params![
                source,
                extraction.original.latitude,
                extraction.original.longitude,
                extraction.adjusted.latitude,
                extraction.adjusted.longitude,
                Utc::now().to_rfc3339(),
            ],
        )?;
        tracing::debug!("Stored extraction #{}", self.conn.last_insert_rowid());
        Ok(())
    }
}
