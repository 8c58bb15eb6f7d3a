//! Core types and trait definitions for the Die Compare catalogue.
//!
//! This crate has no HTTP or database dependencies.
//! The store, API and server crates all depend on it.

pub mod catalog;
pub mod die;
pub mod import;
pub mod int_bool;
pub mod store;

pub use die::{DieId, DieQuery, DieRecord, DieStats, NewDie};
pub use import::{ImportOutcome, ImportSummary};
pub use store::DieStore;
