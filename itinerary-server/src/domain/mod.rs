//! Domain types for the itinerary planner.
//!
//! This module contains the core domain model types that represent
//! validated feed data. Types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod route;
mod segment;
mod station;
mod time;

pub use error::DomainError;
pub use route::Route;
pub use segment::{RouteInfo, Segment};
pub use station::{StopId, TripId};
pub use time::{
    DEFAULT_TIMEZONE, NetworkTime, format_clock, format_duration, from_unix_seconds,
    in_timezone, service_date,
};
