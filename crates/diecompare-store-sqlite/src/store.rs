//! [`SqliteStore`] — the SQLite implementation of [`DieStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use diecompare_core::{
  DieId, DieQuery, DieRecord, DieStats, DieStore, ImportOutcome, NewDie,
};

use crate::{
  encode::{DIE_COLUMNS, RawDie, encode_dt},
  schema::SCHEMA,
  Result,
};

const INSERT_DIE: &str = "INSERT INTO dies (
     chip_name, manufacturer, process_node, die_size_mm2, transistor_count,
     release_date, category, notes, is_public, created_at
   ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A die catalogue backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Insert one row and return its new id. Shared by single creates and the
/// batched import, which runs it inside a transaction.
fn insert_die(
  conn: &rusqlite::Connection,
  die: &NewDie,
  created_at: &str,
) -> rusqlite::Result<DieId> {
  conn.execute(
    INSERT_DIE,
    rusqlite::params![
      die.chip_name,
      die.manufacturer,
      die.process_node,
      die.die_size_mm2,
      die.transistor_count,
      die.release_date,
      die.category,
      die.notes,
      die.is_public,
      created_at,
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

// ─── DieStore impl ───────────────────────────────────────────────────────────

impl DieStore for SqliteStore {
  type Error = crate::Error;

  async fn create(&self, input: NewDie) -> Result<DieRecord> {
    let created_at = Utc::now();
    let at_str     = encode_dt(created_at);

    let record = self
      .conn
      .call(move |conn| {
        let id = insert_die(conn, &input, &at_str)?;
        Ok(DieRecord::from_parts(id, created_at, input))
      })
      .await?;

    Ok(record)
  }

  async fn list(&self, query: &DieQuery) -> Result<Vec<DieRecord>> {
    let category   = query.category_filter().map(str::to_owned);
    let public     = query.public;
    // SQLite treats a negative LIMIT as unbounded.
    let limit_val  = query.limit.map_or(-1, i64::from);
    let offset_val = i64::from(query.offset);

    let raws: Vec<RawDie> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {DIE_COLUMNS}
           FROM dies
           WHERE (?1 IS NULL OR category  = ?1)
             AND (?2 IS NULL OR is_public = ?2)
           ORDER BY id
           LIMIT ?3 OFFSET ?4"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![category, public, limit_val, offset_val],
            RawDie::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDie::into_record).collect()
  }

  async fn get(&self, id: DieId) -> Result<Option<DieRecord>> {
    let raw: Option<RawDie> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {DIE_COLUMNS} FROM dies WHERE id = ?1"),
            rusqlite::params![id],
            RawDie::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawDie::into_record).transpose()
  }

  async fn update(&self, id: DieId, input: NewDie) -> Result<Option<DieRecord>> {
    let Some(mut record) = self.get(id).await? else {
      return Ok(None);
    };
    record.replace(input);

    let row = record.clone();
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE dies SET
             chip_name = ?2, manufacturer = ?3, process_node = ?4,
             die_size_mm2 = ?5, transistor_count = ?6, release_date = ?7,
             category = ?8, notes = ?9, is_public = ?10
           WHERE id = ?1",
          rusqlite::params![
            row.id,
            row.chip_name,
            row.manufacturer,
            row.process_node,
            row.die_size_mm2,
            row.transistor_count,
            row.release_date,
            row.category,
            row.notes,
            row.is_public,
          ],
        )?)
      })
      .await?;

    // Deleted between the read and the write.
    Ok((changed > 0).then_some(record))
  }

  async fn delete(&self, id: DieId) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM dies WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(removed > 0)
  }

  async fn stats(&self) -> Result<DieStats> {
    let (total, public, categories): (i64, i64, i64) = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT COUNT(*),
                  COALESCE(SUM(is_public = 1), 0),
                  COUNT(DISTINCT category)
           FROM dies",
          [],
          |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )?)
      })
      .await?;

    Ok(DieStats {
      total_dies:  total as u64,
      public_dies: public as u64,
      categories:  categories as u64,
    })
  }

  async fn insert_missing(&self, dies: Vec<NewDie>) -> Result<ImportOutcome> {
    let at_str = encode_dt(Utc::now());

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut outcome = ImportOutcome::default();
        {
          let mut existing = tx.prepare(
            "SELECT 1 FROM dies WHERE chip_name = ?1 AND manufacturer = ?2 LIMIT 1",
          )?;
          for die in &dies {
            if existing.exists(rusqlite::params![die.chip_name, die.manufacturer])? {
              outcome.skipped += 1;
            } else {
              insert_die(&tx, die, &at_str)?;
              outcome.imported += 1;
            }
          }
        }
        tx.commit()?;
        Ok(outcome)
      })
      .await?;

    Ok(outcome)
  }
}
