//! Handlers for `/dies` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/dies` | Optional `skip`, `limit`, `category`, `is_public` |
//! | `POST`   | `/dies` | Body: [`NewDie`]; returns 200 + stored record |
//! | `GET`    | `/dies/:id` | 404 if not found |
//! | `PUT`    | `/dies/:id` | Body: [`NewDie`]; full replacement, 404 if not found |
//! | `DELETE` | `/dies/:id` | 404 if not found |

use std::sync::Arc;

use axum::{Json, extract::State};
use diecompare_core::{
  DieId, DieQuery, DieRecord, DieStore, NewDie, die::DEFAULT_LIMIT, int_bool,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  error::ApiError,
  extract::{Body, Id, Params},
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Negative values count as `0`.
  #[serde(default)]
  pub skip:      i64,
  /// Negative means no limit.
  #[serde(default = "default_limit")]
  pub limit:     i64,
  /// Exact match; empty means no filter.
  pub category:  Option<String>,
  /// `1` (default) for public records, `0` for private ones.
  #[serde(default = "int_bool::visible", with = "int_bool")]
  pub is_public: bool,
}

fn default_limit() -> i64 { i64::from(DEFAULT_LIMIT) }

fn clamp_u32(v: i64) -> u32 { u32::try_from(v.max(0)).unwrap_or(u32::MAX) }

impl From<ListParams> for DieQuery {
  fn from(p: ListParams) -> Self {
    DieQuery {
      offset:   clamp_u32(p.skip),
      limit:    (p.limit >= 0).then(|| clamp_u32(p.limit)),
      category: p.category,
      public:   Some(p.is_public),
    }
  }
}

/// `GET /dies[?skip=0][&limit=100][&category=GPU][&is_public=1]`
pub async fn list<S: DieStore>(
  State(store): State<Arc<S>>,
  Params(params): Params<ListParams>,
) -> Result<Json<Vec<DieRecord>>, ApiError> {
  let query = DieQuery::from(params);
  let dies = store.list(&query).await.map_err(ApiError::store)?;
  Ok(Json(dies))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /dies` — returns the stored [`DieRecord`].
pub async fn create<S: DieStore>(
  State(store): State<Arc<S>>,
  Body(body): Body<NewDie>,
) -> Result<Json<DieRecord>, ApiError> {
  let die = store.create(body).await.map_err(ApiError::store)?;
  tracing::debug!(id = die.id, chip = %die.chip_name, "created die");
  Ok(Json(die))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /dies/:id`
pub async fn get_one<S: DieStore>(
  State(store): State<Arc<S>>,
  Id(id): Id<DieId>,
) -> Result<Json<DieRecord>, ApiError> {
  let die = store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(die))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /dies/:id` — every field is replaced; omitted `notes` becomes null and
/// omitted `is_public` becomes `1`.
pub async fn update_one<S: DieStore>(
  State(store): State<Arc<S>>,
  Id(id): Id<DieId>,
  Body(body): Body<NewDie>,
) -> Result<Json<DieRecord>, ApiError> {
  let die = store
    .update(id, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(die))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /dies/:id`
pub async fn delete_one<S: DieStore>(
  State(store): State<Arc<S>>,
  Id(id): Id<DieId>,
) -> Result<Json<Value>, ApiError> {
  if !store.delete(id).await.map_err(ApiError::store)? {
    return Err(not_found(id));
  }
  Ok(Json(json!({ "message": "Die deleted successfully" })))
}

fn not_found(id: DieId) -> ApiError { ApiError::NotFound(format!("die {id} not found")) }
