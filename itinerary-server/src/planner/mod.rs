//! Itinerary planner over real-time trip segments.
//!
//! This module implements the core planning pipeline:
//! segments are grouped into a [`TripGraph`], explored with a
//! time-expanded search ordered by arrival time, and the raw paths are
//! consolidated into ranked [`Route`](crate::domain::Route)s.
//!
//! The search visits each station at most once per calendar date and
//! stops at the look-ahead horizon, so it enumerates many candidate
//! paths; the consolidator keeps the fastest one per departing train.

mod config;
mod consolidate;
mod graph;
mod search;

pub use config::{ConfigError, SearchConfig};
pub use consolidate::{
    apply_transfer_policy, best_per_departure, merge_paths, process_routes, sort_by_departure,
};
pub use graph::{TripGraph, build_graph};
pub use search::{Path, SearchRequest, SearchResult, find_routes, search};
