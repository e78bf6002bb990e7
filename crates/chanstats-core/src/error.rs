//! Shared error type across chanstats crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type used by core and server.
///
/// The cache itself is infallible; these variants cover the config layer and
/// startup plumbing.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
