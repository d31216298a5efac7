//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from feed and API errors.

use super::StopId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A hop that arrives before it departs
    #[error("segment {0} -> {1} arrives before it departs")]
    ArrivalBeforeDeparture(StopId, StopId),

    /// Consecutive segments of a path don't share a station
    #[error("path breaks between {0} and {1}")]
    DiscontinuousPath(StopId, StopId),

    /// Path has no segments
    #[error("path must have at least one segment")]
    EmptyPath,

    /// Path ends somewhere other than the requested destination
    #[error("path ends at {actual}, expected {expected}")]
    WrongDestination { expected: StopId, actual: StopId },
}
