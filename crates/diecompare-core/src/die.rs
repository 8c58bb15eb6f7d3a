//! The die record and the types used to create, query and summarise it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::int_bool;

/// Store-assigned identifier of a [`DieRecord`]. Never reused.
pub type DieId = i64;

/// Default page size for [`DieQuery`].
pub const DEFAULT_LIMIT: u32 = 100;

// ─── Records ─────────────────────────────────────────────────────────────────

/// The client-supplied part of a die record.
///
/// Used as the body of create and update requests and as the unit of import.
/// Update replaces every field of the stored record with the fields of this
/// struct; `id` and `created_at` are never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDie {
  pub chip_name:        String,
  pub manufacturer:     String,
  /// Free-text node label, e.g. `"5nm"`.
  pub process_node:     String,
  pub die_size_mm2:     f64,
  /// Kept as text; counts like `"80 billion"` are never parsed.
  pub transistor_count: String,
  /// Free-text date label, not validated as a calendar date.
  pub release_date:     String,
  /// Open set: `"CPU"`, `"GPU"`, `"SoC"`, ...
  pub category:         String,
  #[serde(default)]
  pub notes:            Option<String>,
  #[serde(default = "int_bool::visible", with = "int_bool")]
  pub is_public:        bool,
}

/// A die record as persisted by a [`DieStore`](crate::store::DieStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieRecord {
  pub id:               DieId,
  pub chip_name:        String,
  pub manufacturer:     String,
  pub process_node:     String,
  pub die_size_mm2:     f64,
  pub transistor_count: String,
  pub release_date:     String,
  pub category:         String,
  pub notes:            Option<String>,
  #[serde(with = "int_bool")]
  pub is_public:        bool,
  /// Set by the store at insertion; immutable afterwards.
  pub created_at:       DateTime<Utc>,
}

impl DieRecord {
  /// Assemble a stored record from its identity and its mutable fields.
  pub fn from_parts(id: DieId, created_at: DateTime<Utc>, die: NewDie) -> Self {
    Self {
      id,
      chip_name: die.chip_name,
      manufacturer: die.manufacturer,
      process_node: die.process_node,
      die_size_mm2: die.die_size_mm2,
      transistor_count: die.transistor_count,
      release_date: die.release_date,
      category: die.category,
      notes: die.notes,
      is_public: die.is_public,
      created_at,
    }
  }

  /// Replace every mutable field with those of `die`, keeping `id` and
  /// `created_at`.
  pub fn replace(&mut self, die: NewDie) {
    let NewDie {
      chip_name,
      manufacturer,
      process_node,
      die_size_mm2,
      transistor_count,
      release_date,
      category,
      notes,
      is_public,
    } = die;
    self.chip_name = chip_name;
    self.manufacturer = manufacturer;
    self.process_node = process_node;
    self.die_size_mm2 = die_size_mm2;
    self.transistor_count = transistor_count;
    self.release_date = release_date;
    self.category = category;
    self.notes = notes;
    self.is_public = is_public;
  }
}

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`DieStore::list`](crate::store::DieStore::list).
#[derive(Debug, Clone)]
pub struct DieQuery {
  pub offset:   u32,
  /// `None` returns every remaining row.
  pub limit:    Option<u32>,
  /// Exact, case-sensitive match. `None` or an empty string matches all.
  pub category: Option<String>,
  /// `None` disables the visibility filter.
  pub public:   Option<bool>,
}

impl Default for DieQuery {
  fn default() -> Self {
    Self {
      offset:   0,
      limit:    Some(DEFAULT_LIMIT),
      category: None,
      public:   Some(true),
    }
  }
}

impl DieQuery {
  /// The category filter, with an empty string treated as absent.
  pub fn category_filter(&self) -> Option<&str> {
    self.category.as_deref().filter(|c| !c.is_empty())
  }
}

// ─── Aggregates ──────────────────────────────────────────────────────────────

/// Aggregate counts over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieStats {
  /// All records, regardless of visibility.
  pub total_dies:  u64,
  pub public_dies: u64,
  /// Number of distinct `category` values.
  pub categories:  u64,
}
