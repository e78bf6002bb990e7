//! chanstats server library entry.
//!
//! This crate wires the config layer, shared state, and the single
//! `/stats.json` read endpoint into a servable axum app. It is intended to
//! be consumed by the binary (`main.rs`), by integration tests, and by an
//! embedding producer process that publishes snapshots into the shared
//! cache.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
