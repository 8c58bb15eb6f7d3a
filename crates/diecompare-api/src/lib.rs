//! JSON REST API for Die Compare.
//!
//! Exposes an axum [`Router`] backed by any [`diecompare_core::DieStore`].
//! CORS, tracing and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", diecompare_api::api_router(store.clone()))
//! ```

pub mod dies;
pub mod error;
pub mod extract;
pub mod import;
pub mod stats;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use diecompare_core::DieStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DieStore + 'static,
{
  Router::new()
    // Dies
    .route("/dies", get(dies::list::<S>).post(dies::create::<S>))
    .route(
      "/dies/{id}",
      get(dies::get_one::<S>)
        .put(dies::update_one::<S>)
        .delete(dies::delete_one::<S>),
    )
    // Aggregates
    .route("/stats", get(stats::handler::<S>))
    // Seed import
    .route("/import/public-dies", post(import::run::<S>))
    .route("/import/available-count", get(import::available_count))
    .with_state(store)
}
