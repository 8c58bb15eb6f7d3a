//! Encoding and decoding helpers between Rust domain types and the values
//! stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; `is_public` as `0`/`1`.

use chrono::{DateTime, Utc};
use diecompare_core::{DieId, DieRecord, NewDie};

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` that builds a [`RawDie`].
pub const DIE_COLUMNS: &str = "id, chip_name, manufacturer, process_node, die_size_mm2, \
   transistor_count, release_date, category, notes, is_public, created_at";

/// Values read directly from a `dies` row.
pub struct RawDie {
  pub id:               DieId,
  pub chip_name:        String,
  pub manufacturer:     String,
  pub process_node:     String,
  pub die_size_mm2:     f64,
  pub transistor_count: String,
  pub release_date:     String,
  pub category:         String,
  pub notes:            Option<String>,
  pub is_public:        bool,
  pub created_at:       String,
}

impl RawDie {
  /// Read a row selected with [`DIE_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawDie {
      id:               row.get(0)?,
      chip_name:        row.get(1)?,
      manufacturer:     row.get(2)?,
      process_node:     row.get(3)?,
      die_size_mm2:     row.get(4)?,
      transistor_count: row.get(5)?,
      release_date:     row.get(6)?,
      category:         row.get(7)?,
      notes:            row.get(8)?,
      is_public:        row.get(9)?,
      created_at:       row.get(10)?,
    })
  }

  pub fn into_record(self) -> Result<DieRecord> {
    let created_at = decode_dt(&self.created_at)?;
    let die = NewDie {
      chip_name:        self.chip_name,
      manufacturer:     self.manufacturer,
      process_node:     self.process_node,
      die_size_mm2:     self.die_size_mm2,
      transistor_count: self.transistor_count,
      release_date:     self.release_date,
      category:         self.category,
      notes:            self.notes,
      is_public:        self.is_public,
    };
    Ok(DieRecord::from_parts(self.id, created_at, die))
  }
}
