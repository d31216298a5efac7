//! Feed error types.

use std::path::PathBuf;

/// Errors that can occur while fetching or decoding the real-time feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed endpoint answered with a non-success status
    #[error("feed returned status {status}")]
    Status { status: u16 },

    /// Reading a feed snapshot from disk failed
    #[error("failed to read feed snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Bytes are not a valid GTFS-Realtime message
    #[error("failed to decode feed: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Client could not be built from its configuration
    #[error("invalid feed configuration: {0}")]
    Config(String),
}
