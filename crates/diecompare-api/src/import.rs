//! Handlers for `/import` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/import/public-dies` | Insert catalog entries not yet stored |
//! | `GET`  | `/import/available-count` | Size of the built-in catalog |

use std::sync::Arc;

use axum::{Json, extract::State};
use diecompare_core::{DieStore, ImportSummary, catalog, import::import_catalog};
use serde::Serialize;

use crate::error::ApiError;

/// `POST /import/public-dies`
///
/// Entries are matched on `(manufacturer, chip_name)`; existing pairs are
/// skipped. The whole run is one transaction.
pub async fn run<S: DieStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<ImportSummary>, ApiError> {
  tracing::info!(entries = catalog::available_count(), "loading public die catalog");
  let summary = import_catalog(store.as_ref())
    .await
    .map_err(ApiError::store)?;
  tracing::info!(
    imported = summary.imported_count,
    skipped = summary.skipped_count,
    "catalog import finished"
  );
  Ok(Json(summary))
}

#[derive(Debug, Serialize)]
pub struct AvailableCount {
  pub available_count: usize,
}

/// `GET /import/available-count`
pub async fn available_count() -> Json<AvailableCount> {
  Json(AvailableCount { available_count: catalog::available_count() })
}
