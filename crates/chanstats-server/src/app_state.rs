//! Shared application state.
//!
//! Holds the parsed config and the one `SnapshotCache` instance every
//! request handler reads from. The cache is injected here by construction
//! rather than living in a global; its lifetime is the process lifetime.

use std::sync::Arc;

use chanstats_core::SnapshotCache;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    cache: SnapshotCache,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                cache: SnapshotCache::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    /// The process-wide snapshot cache. Handlers read it; the producer side
    /// publishes into it through this same handle.
    pub fn cache(&self) -> &SnapshotCache {
        &self.inner.cache
    }
}
