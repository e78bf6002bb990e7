//! Read-side HTTP endpoint.
//!
//! - `/stats.json` : latest published statistics snapshot
//!
//! The handler is stateless: it copies the current cache handle and writes
//! it to the wire unchanged. Absence of data is not an error; before the
//! first publish the body is the `{}` placeholder, still with status 200.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;

pub async fn stats_json(State(state): State<AppState>) -> Response {
    let body = state.cache().latest();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
