//! SQL schema for the Die Compare SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from being reused after a delete.
CREATE TABLE IF NOT EXISTS dies (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    chip_name        TEXT    NOT NULL,
    manufacturer     TEXT    NOT NULL,
    process_node     TEXT    NOT NULL,
    die_size_mm2     REAL    NOT NULL,
    transistor_count TEXT    NOT NULL,   -- free text, e.g. '80 billion'
    release_date     TEXT    NOT NULL,
    category         TEXT    NOT NULL,   -- open set: 'CPU', 'GPU', 'SoC', ...
    notes            TEXT,
    created_at       TEXT    NOT NULL,   -- ISO 8601 UTC; server-assigned
    is_public        INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX IF NOT EXISTS dies_chip_name_idx    ON dies(chip_name);
CREATE INDEX IF NOT EXISTS dies_manufacturer_idx ON dies(manufacturer);
CREATE INDEX IF NOT EXISTS dies_category_idx     ON dies(category);

PRAGMA user_version = 1;
";
