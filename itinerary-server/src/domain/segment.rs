//! Segment type: one scheduled hop of one trip.

use super::{DomainError, NetworkTime, StopId, TripId};

/// Display metadata for a route (branch), resolved once per segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    /// Human-readable route name, e.g. "Babylon Branch"
    pub name: String,
    /// Background color as a hex string without `#`
    pub color: String,
    /// Foreground color as a hex string without `#`
    pub text_color: String,
}

impl RouteInfo {
    /// Create route metadata from its parts.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            text_color: text_color.into(),
        }
    }

    /// Placeholder used when a route id is not in the catalog.
    pub fn unknown() -> Self {
        Self::new("Unknown Route", "CCCCCC", "000000")
    }
}

/// One scheduled hop between two consecutive stops of a single trip.
///
/// Also used for merged legs: a leg is a segment whose `to_station` and
/// `arrival_time` have been extended along the same trip. Merging builds
/// a new value, see [`Segment::extended_by`].
///
/// # Invariants
///
/// - `arrival_time >= departure_time`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    departure_time: NetworkTime,
    arrival_time: NetworkTime,
    pub route_id: String,
    pub direction_id: u32,
    from_station: StopId,
    to_station: StopId,
    trip_id: TripId,
    pub route: RouteInfo,
}

impl Segment {
    /// Construct a segment, validating that it doesn't arrive before departing.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        departure_time: NetworkTime,
        arrival_time: NetworkTime,
        route_id: impl Into<String>,
        direction_id: u32,
        from_station: StopId,
        to_station: StopId,
        trip_id: TripId,
        route: RouteInfo,
    ) -> Result<Self, DomainError> {
        if arrival_time < departure_time {
            return Err(DomainError::ArrivalBeforeDeparture(from_station, to_station));
        }

        Ok(Self {
            departure_time,
            arrival_time,
            route_id: route_id.into(),
            direction_id,
            from_station,
            to_station,
            trip_id,
            route,
        })
    }

    pub fn departure_time(&self) -> NetworkTime {
        self.departure_time
    }

    pub fn arrival_time(&self) -> NetworkTime {
        self.arrival_time
    }

    pub fn from_station(&self) -> &StopId {
        &self.from_station
    }

    pub fn to_station(&self) -> &StopId {
        &self.to_station
    }

    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    /// Returns true if `next` is the following hop of the same ride.
    pub fn continues_into(&self, next: &Segment) -> bool {
        self.trip_id == next.trip_id && self.to_station == next.from_station
    }

    /// A new segment covering this one and `next`, keeping this segment's
    /// departure and route data and taking `next`'s destination and arrival.
    ///
    /// `self` is left untouched; callers check continuity beforehand.
    pub fn extended_by(&self, next: &Segment) -> Segment {
        Segment {
            to_station: next.to_station.clone(),
            arrival_time: next.arrival_time.max(self.departure_time),
            ..self.clone()
        }
    }
}
