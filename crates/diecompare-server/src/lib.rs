//! HTTP server for the Die Compare catalogue.
//!
//! Wraps the [`diecompare_api`] router with the service identity route, CORS
//! and request tracing.

pub mod export;
pub mod settings;

use std::sync::Arc;

use axum::{
  Json, Router,
  http::HeaderValue,
  routing::get,
};
use diecompare_core::DieStore;
use serde_json::{Value, json};
use tower_http::{
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

pub use settings::ServerConfig;

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: `/` plus the API under `/api`.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: DieStore + 'static,
{
  Router::new()
    .route("/", get(identity))
    .nest("/api", diecompare_api::api_router(store))
    .layer(cors_layer(&config.origins()))
    .layer(TraceLayer::new_for_http())
}

/// `GET /` — service name and version.
async fn identity() -> Json<Value> {
  Json(json!({
    "message": "Die Compare API",
    "version": env!("CARGO_PKG_VERSION"),
  }))
}

/// CORS for the given origins. Credentials are allowed, so methods and
/// headers are mirrored from the request rather than wildcarded. A `*` entry
/// mirrors any request origin, since `*` cannot be sent with credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let layer = CorsLayer::new()
    .allow_credentials(true)
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request());

  if origins.iter().any(|o| o == "*") {
    tracing::warn!("CORS origin `*` configured; mirroring every request origin");
    return layer.allow_origin(AllowOrigin::mirror_request());
  }

  let origins: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|o| match HeaderValue::from_str(o) {
      Ok(v) => Some(v),
      Err(_) => {
        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();

  layer.allow_origin(AllowOrigin::list(origins))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
