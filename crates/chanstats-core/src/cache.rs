//! Single-slot cache for the published statistics snapshot.
//!
//! One producer replaces the snapshot wholesale; many request handlers read
//! it concurrently. The slot is an atomically swapped `Arc`, so a reader
//! never blocks on a writer for longer than the pointer swap and never
//! observes a torn payload.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use bytes::Bytes;

/// Body served before the first publish. A valid, empty JSON document.
pub const EMPTY_SNAPSHOT: &[u8] = b"{}";

/// Holds the latest published snapshot.
///
/// The payload is opaque: no parsing, no validation. Callers get a `Bytes`
/// handle that stays alive for as long as they hold it, but is not
/// guaranteed to still be the current snapshot after the call returns.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    slot: ArcSwapOption<Bytes>,
}

impl SnapshotCache {
    /// Create an empty cache (nothing published yet).
    pub fn new() -> Self {
        Self {
            slot: ArcSwapOption::const_empty(),
        }
    }

    /// Atomically replace the current snapshot.
    ///
    /// Always succeeds, for any byte sequence (including empty). When
    /// publishes overlap, the last one to complete wins; each publish is
    /// indivisible.
    pub fn publish(&self, payload: Bytes) {
        tracing::debug!(len = payload.len(), "snapshot published");
        self.slot.store(Some(Arc::new(payload)));
    }

    /// The most recently published snapshot, or [`EMPTY_SNAPSHOT`] if
    /// nothing has been published yet.
    pub fn latest(&self) -> Bytes {
        match self.slot.load_full() {
            Some(payload) => Bytes::clone(&payload),
            None => Bytes::from_static(EMPTY_SNAPSHOT),
        }
    }

    /// Whether at least one publish has happened.
    pub fn has_published(&self) -> bool {
        self.slot.load().is_some()
    }
}
