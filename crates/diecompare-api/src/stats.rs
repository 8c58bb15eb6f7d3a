//! Handler for `GET /stats`.

use std::sync::Arc;

use axum::{Json, extract::State};
use diecompare_core::{DieStats, DieStore};

use crate::error::ApiError;

/// `GET /stats` — `{"total_dies":..,"public_dies":..,"categories":..}`
pub async fn handler<S: DieStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<DieStats>, ApiError> {
  let stats = store.stats().await.map_err(ApiError::store)?;
  Ok(Json(stats))
}
