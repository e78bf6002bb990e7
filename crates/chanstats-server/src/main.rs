//! chanstats server binary.
//!
//! Serves the latest published statistics snapshot:
//! - Single read endpoint: GET /stats.json
//! - Snapshot source: the in-process `SnapshotCache` (published out-of-band)
//! - Config: chanstats.yaml if present, built-in defaults otherwise

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use chanstats_server::{app_state, config, router};

const CONFIG_PATH: &str = "chanstats.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default(CONFIG_PATH).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen_addr()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, path = router::STATS_PATH, "chanstats-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
