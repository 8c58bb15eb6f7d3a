//! The `DieStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `diecompare-store-sqlite`).
//! The API and server crates depend on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::{
  die::{DieId, DieQuery, DieRecord, DieStats, NewDie},
  import::ImportOutcome,
};

/// Abstraction over a die catalogue backend.
///
/// Absence is reported as `Ok(None)` / `Ok(false)`, never as an error; the
/// caller decides whether a missing record is a failure.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait DieStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record. The store assigns `id` and `created_at`.
  fn create(
    &self,
    input: NewDie,
  ) -> impl Future<Output = Result<DieRecord, Self::Error>> + Send + '_;

  /// Records matching `query`, in storage order.
  fn list<'a>(
    &'a self,
    query: &'a DieQuery,
  ) -> impl Future<Output = Result<Vec<DieRecord>, Self::Error>> + Send + 'a;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: DieId,
  ) -> impl Future<Output = Result<Option<DieRecord>, Self::Error>> + Send + '_;

  /// Replace every field of record `id` except `id` and `created_at`.
  /// Returns the updated record, or `None` if not found.
  fn update(
    &self,
    id: DieId,
    input: NewDie,
  ) -> impl Future<Output = Result<Option<DieRecord>, Self::Error>> + Send + '_;

  /// Remove record `id`. Returns `false` if it did not exist.
  fn delete(
    &self,
    id: DieId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn stats(&self) -> impl Future<Output = Result<DieStats, Self::Error>> + Send + '_;

  /// Insert each die whose `(manufacturer, chip_name)` pair is not yet
  /// stored, in order, as one atomic batch.
  ///
  /// Matching is exact and case-sensitive. A pair repeated within `dies` is
  /// skipped on its second occurrence.
  fn insert_missing(
    &self,
    dies: Vec<NewDie>,
  ) -> impl Future<Output = Result<ImportOutcome, Self::Error>> + Send + '_;
}
