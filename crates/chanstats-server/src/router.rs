//! Axum router wiring.
//!
//! Exposes a single `/stats.json` read route.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

/// Fixed path of the read endpoint.
pub const STATS_PATH: &str = "/stats.json";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(STATS_PATH, get(ops::stats_json))
        .with_state(state)
}
