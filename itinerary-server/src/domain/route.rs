//! Route types.
//!
//! A `Route` is a complete itinerary from origin to destination: the
//! rides actually taken, one leg per trip, with transfers between them.

use std::sync::Arc;

use chrono::Duration;

use super::{DomainError, NetworkTime, Segment, StopId};

/// A complete itinerary from origin to destination.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (`to_station` of one = `from_station` of next)
/// - Consecutive legs are on different trips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    legs: Vec<Segment>,
}

impl Route {
    /// Merge a raw search path into legs and validate it.
    ///
    /// Consecutive segments of the same trip collapse into one leg. A
    /// segment on a different trip starts a new leg (a transfer). The
    /// segments in `path` are never modified.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `path` is empty
    /// - two consecutive segments don't share a station
    /// - the last leg doesn't end at `destination`
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use chrono::TimeZone;
    /// use itinerary_server::domain::{Route, RouteInfo, Segment, StopId, TripId, DEFAULT_TIMEZONE};
    ///
    /// let at = |h, m| DEFAULT_TIMEZONE.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap();
    /// let hop = |from: &str, to: &str, dep, arr| {
    ///     Arc::new(Segment::new(dep, arr, "1", 0, StopId::new(from), StopId::new(to),
    ///         TripId::new("T1"), RouteInfo::unknown()).unwrap())
    /// };
    ///
    /// let path = vec![hop("A", "B", at(10, 0), at(10, 20)), hop("B", "C", at(10, 25), at(10, 50))];
    /// let route = Route::from_path(&path, &StopId::new("C")).unwrap();
    ///
    /// assert_eq!(route.legs().len(), 1);
    /// assert_eq!(route.transfer_count(), 0);
    /// assert_eq!(route.total_duration(), chrono::Duration::minutes(50));
    /// ```
    pub fn from_path(path: &[Arc<Segment>], destination: &StopId) -> Result<Self, DomainError> {
        let mut iter = path.iter();
        let first = iter.next().ok_or(DomainError::EmptyPath)?;

        let mut legs = Vec::new();
        let mut current: Segment = Segment::clone(first);

        for next in iter {
            if next.from_station() != current.to_station() {
                return Err(DomainError::DiscontinuousPath(
                    current.to_station().clone(),
                    next.from_station().clone(),
                ));
            }

            if current.continues_into(next) {
                current = current.extended_by(next);
            } else {
                let finished = std::mem::replace(&mut current, Segment::clone(next));
                legs.push(finished);
            }
        }

        if current.to_station() != destination {
            return Err(DomainError::WrongDestination {
                expected: destination.clone(),
                actual: current.to_station().clone(),
            });
        }

        legs.push(current);
        Ok(Self { legs })
    }

    /// Returns the legs of this route, in travel order.
    pub fn legs(&self) -> &[Segment] {
        &self.legs
    }

    /// Returns the first leg.
    pub fn first_leg(&self) -> &Segment {
        // Non-empty by construction
        &self.legs[0]
    }

    /// Returns the last leg.
    pub fn last_leg(&self) -> &Segment {
        &self.legs[self.legs.len() - 1]
    }

    /// Station where the route starts.
    pub fn origin(&self) -> &StopId {
        self.first_leg().from_station()
    }

    /// Station where the route ends.
    pub fn destination(&self) -> &StopId {
        self.last_leg().to_station()
    }

    /// Departure time of the first leg.
    pub fn departure_time(&self) -> NetworkTime {
        self.first_leg().departure_time()
    }

    /// Arrival time of the last leg.
    pub fn arrival_time(&self) -> NetworkTime {
        self.last_leg().arrival_time()
    }

    /// Number of changes between trips.
    pub fn transfer_count(&self) -> usize {
        self.legs.len() - 1
    }

    /// Returns true if the route is a single ride.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    /// Time from first departure to final arrival, layovers included.
    pub fn total_duration(&self) -> Duration {
        self.arrival_time()
            .signed_duration_since(self.departure_time())
    }
}
