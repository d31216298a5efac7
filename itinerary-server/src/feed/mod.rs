//! Real-time feed access.
//!
//! Fetches GTFS-Realtime trip updates, decodes them into ordered stop
//! events per trip, and derives the segments the planner searches over.
//!
//! Key characteristics of the feed:
//! - Times are POSIX seconds; they are converted to the network's home
//!   timezone on decode
//! - A stop may carry only an arrival (terminus) or only a departure
//!   (origin); segments need both ends

mod client;
mod decode;
mod error;
mod segments;

pub use client::{FeedClient, FeedConfig, FeedSource, FileFeed};
pub use decode::{FeedDecoder, GtfsRealtimeDecoder, RawTripUpdate, StopEvent};
pub use error::FeedError;
pub use segments::derive_segments;
