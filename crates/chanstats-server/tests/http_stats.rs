//! End-to-end tests against a real listener on an ephemeral port.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use chanstats_server::{app_state::AppState, config::ServerConfig, router};

/// Bind an ephemeral port, serve the app in a background task, and hand back
/// the address plus the state so tests can publish into the cache.
async fn spawn_server() -> (SocketAddr, AppState) {
    let state = AppState::new(ServerConfig::default());
    let app = router::build_router(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, state)
}

/// Minimal HTTP/1.1 GET. Returns (head lowercased, body bytes).
async fn http_get(addr: SocketAddr, path: &str) -> (String, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header/body separator");
    let head = String::from_utf8(raw[..split].to_vec())
        .unwrap()
        .to_ascii_lowercase();
    let body = raw[split + 4..].to_vec();
    (head, body)
}

#[tokio::test]
async fn stats_json_serves_published_snapshot_verbatim() {
    let (addr, state) = spawn_server().await;
    state.cache().publish(Bytes::from_static(b"{\"count\":42}"));

    let (head, body) = http_get(addr, router::STATS_PATH).await;

    assert!(head.starts_with("http/1.1 200"), "head: {head}");
    assert!(head.contains("content-type: application/json"), "head: {head}");
    assert_eq!(body, b"{\"count\":42}");
}

#[tokio::test]
async fn stats_json_before_first_publish_is_200_with_empty_document() {
    let (addr, _state) = spawn_server().await;

    let (head, body) = http_get(addr, router::STATS_PATH).await;

    assert!(head.starts_with("http/1.1 200"), "head: {head}");
    assert!(head.contains("content-type: application/json"), "head: {head}");
    assert_eq!(body, b"{}");
}

#[tokio::test]
async fn stats_json_always_reflects_the_latest_publish() {
    let (addr, state) = spawn_server().await;

    let stale = serde_json::json!({ "channels": 1 }).to_string();
    let fresh = serde_json::json!({ "channels": 7, "messages": 120 }).to_string();

    state.cache().publish(Bytes::from(stale));
    state.cache().publish(Bytes::from(fresh.clone()));

    let (head, body) = http_get(addr, router::STATS_PATH).await;

    assert!(head.starts_with("http/1.1 200"), "head: {head}");
    assert_eq!(body, fresh.as_bytes());
}
