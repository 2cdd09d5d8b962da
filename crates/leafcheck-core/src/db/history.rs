//! Scan history database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::{HealthStatus, ScanRecord};

impl Database {
    /// Append a scan to the history.
    pub fn insert_scan(&self, record: &ScanRecord) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO scan_history (scan_id, status, confidence, disease, image_digest, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.scan_id,
                record.status.as_str(),
                record.confidence,
                record.disease,
                record.image_digest,
                record.created_at,
            ],
        )?;
        Ok(())
    }

    /// Past scans, newest first.
    pub fn list_scans(&self, limit: Option<usize>) -> DbResult<Vec<ScanRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT scan_id, status, confidence, disease, image_digest, created_at
            FROM scan_history
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?
            "#,
        )?;

        let limit = limit.map(|n| n as i64).unwrap_or(-1);
        let rows = stmt.query_map([limit], |row| {
            Ok(ScanRow {
                scan_id: row.get(0)?,
                status: row.get(1)?,
                confidence: row.get(2)?,
                disease: row.get(3)?,
                image_digest: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.try_into()?);
        }
        Ok(records)
    }

    /// The most recent scan, if any.
    pub fn latest_scan(&self) -> DbResult<Option<ScanRecord>> {
        let result = self
            .conn
            .query_row(
                r#"
                SELECT scan_id, status, confidence, disease, image_digest, created_at
                FROM scan_history
                ORDER BY created_at DESC, rowid DESC
                LIMIT 1
                "#,
                [],
                |row| {
                    Ok(ScanRow {
                        scan_id: row.get(0)?,
                        status: row.get(1)?,
                        confidence: row.get(2)?,
                        disease: row.get(3)?,
                        image_digest: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                },
            )
            .optional()?;

        result.map(|row| row.try_into()).transpose()
    }

    /// Number of stored scans.
    pub fn count_scans(&self) -> DbResult<u64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM scan_history", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Delete the whole history. Returns rows removed.
    pub fn clear_scans(&self) -> DbResult<u64> {
        let removed = self.conn.execute("DELETE FROM scan_history", [])?;
        Ok(removed as u64)
    }
}

/// Intermediate row struct for database mapping.
struct ScanRow {
    scan_id: String,
    status: String,
    confidence: f64,
    disease: Option<String>,
    image_digest: Option<String>,
    created_at: String,
}

impl TryFrom<ScanRow> for ScanRecord {
    type Error = DbError;

    fn try_from(row: ScanRow) -> Result<Self, Self::Error> {
        let status = HealthStatus::parse(&row.status)
            .ok_or_else(|| DbError::InvalidValue(format!("status '{}'", row.status)))?;
        Ok(ScanRecord {
            scan_id: row.scan_id,
            status,
            confidence: row.confidence,
            disease: row.disease,
            image_digest: row.image_digest,
            created_at: row.created_at,
        })
    }
}
