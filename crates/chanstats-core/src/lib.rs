//! chanstats core: the single-slot snapshot cache and shared error surface.
//!
//! This crate holds the process-wide store for the published statistics
//! snapshot and the error types shared with the server. It intentionally
//! carries no transport or runtime dependencies so a producer process can
//! depend on it without pulling in the HTTP stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StatsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cache;
pub mod error;

pub use cache::SnapshotCache;

/// Shared result type.
pub use error::{Result, StatsError};
