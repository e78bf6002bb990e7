//! Top-level facade crate for chanstats.
//!
//! Re-exports the core cache types and the server library so a producer
//! process can depend on a single crate: serve with `server::router`, and
//! publish into the same `core::SnapshotCache` the handlers read from.

pub mod core {
    pub use chanstats_core::*;
}

pub mod server {
    pub use chanstats_server::*;
}
