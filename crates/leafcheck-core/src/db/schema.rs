//! SQLite schema definition.

/// Complete database schema for leafcheck.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Scan History
-- ============================================================================

-- Append-only log of past analyses. Rows are never updated.
CREATE TABLE IF NOT EXISTS scan_history (
    scan_id TEXT PRIMARY KEY,
    status TEXT NOT NULL CHECK (status IN ('healthy', 'diseased')),
    confidence REAL NOT NULL,
    disease TEXT,
    image_digest TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_scan_history_created_at ON scan_history(created_at);
"#;
