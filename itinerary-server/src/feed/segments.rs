//! Segment derivation from decoded trip updates.

use tracing::debug;

use crate::domain::Segment;
use crate::reference::RouteCatalog;

use super::decode::RawTripUpdate;

/// Derive one segment per adjacent pair of stop events.
///
/// A pair yields a segment only when the earlier stop has a departure
/// time and the later stop has an arrival time. Pairs that would arrive
/// before departing are dropped. Route metadata is resolved once per
/// segment from `routes`.
pub fn derive_segments(trips: &[RawTripUpdate], routes: &RouteCatalog) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut skipped = 0usize;

    for trip in trips {
        let route = routes.lookup(&trip.route_id);

        for pair in trip.stops.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let (Some(departure), Some(arrival)) = (from.departure, to.arrival) else {
                continue;
            };

            match Segment::new(
                departure,
                arrival,
                trip.route_id.clone(),
                trip.direction_id,
                from.stop_id.clone(),
                to.stop_id.clone(),
                trip.trip_id.clone(),
                route.clone(),
            ) {
                Ok(segment) => segments.push(segment),
                Err(e) => {
                    skipped += 1;
                    debug!(trip = %trip.trip_id, error = %e, "skipping segment");
                }
            }
        }
    }

    debug!(
        trips = trips.len(),
        segments = segments.len(),
        skipped,
        "derived segments from feed"
    );
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_TIMEZONE, NetworkTime, StopId, TripId};
    use crate::feed::decode::StopEvent;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> NetworkTime {
        DEFAULT_TIMEZONE
            .with_ymd_and_hms(2024, 3, 15, h, m, 0)
            .single()
            .unwrap()
    }

    fn event(
        seq: u32,
        id: &str,
        arr: Option<NetworkTime>,
        dep: Option<NetworkTime>,
    ) -> StopEvent {
        StopEvent {
            stop_id: StopId::new(id),
            sequence: seq,
            arrival: arr,
            departure: dep,
        }
    }

    fn trip(id: &str, route_id: &str, stops: Vec<StopEvent>) -> RawTripUpdate {
        RawTripUpdate {
            trip_id: TripId::new(id),
            route_id: route_id.to_string(),
            direction_id: 0,
            stops,
        }
    }

    #[test]
    fn adjacent_pairs_become_segments() {
        let trips = vec![trip(
            "T1",
            "1",
            vec![
                event(1, "A", None, Some(at(10, 0))),
                event(2, "B", Some(at(10, 20)), Some(at(10, 25))),
                event(3, "C", Some(at(10, 50)), None),
            ],
        )];

        let segments = derive_segments(&trips, &RouteCatalog::lirr());

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].from_station().as_str(), "A");
        assert_eq!(segments[0].to_station().as_str(), "B");
        assert_eq!(segments[0].departure_time(), at(10, 0));
        assert_eq!(segments[0].arrival_time(), at(10, 20));
        assert_eq!(segments[1].from_station().as_str(), "B");
        assert_eq!(segments[1].departure_time(), at(10, 25));
        assert_eq!(segments[1].route.name, "Babylon Branch");
        assert_eq!(segments[1].trip_id().as_str(), "T1");
    }

    #[test]
    fn pairs_missing_times_are_skipped() {
        let trips = vec![trip(
            "T1",
            "1",
            vec![
                event(1, "A", None, None),
                event(2, "B", Some(at(10, 20)), Some(at(10, 25))),
                event(3, "C", None, Some(at(10, 55))),
                event(4, "D", Some(at(11, 10)), None),
            ],
        )];

        let segments = derive_segments(&trips, &RouteCatalog::lirr());

        // A has no departure, C has no arrival: only C -> D survives
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].from_station().as_str(), "C");
        assert_eq!(segments[0].to_station().as_str(), "D");
    }

    #[test]
    fn arrival_before_departure_is_dropped() {
        let trips = vec![trip(
            "T1",
            "1",
            vec![
                event(1, "A", None, Some(at(10, 30))),
                event(2, "B", Some(at(10, 20)), None),
            ],
        )];

        assert!(derive_segments(&trips, &RouteCatalog::lirr()).is_empty());
    }

    #[test]
    fn unknown_route_gets_placeholder() {
        let trips = vec![trip(
            "T1",
            "unknown",
            vec![
                event(1, "A", None, Some(at(10, 0))),
                event(2, "B", Some(at(10, 20)), None),
            ],
        )];

        let segments = derive_segments(&trips, &RouteCatalog::lirr());
        assert_eq!(segments[0].route.name, "Unknown Route");
        assert_eq!(segments[0].route.color, "CCCCCC");
        assert_eq!(segments[0].route.text_color, "000000");
    }

    #[test]
    fn single_stop_trip_has_no_segments() {
        let trips = vec![trip("T1", "1", vec![event(1, "A", None, Some(at(10, 0)))])];
        assert!(derive_segments(&trips, &RouteCatalog::lirr()).is_empty());
    }
}
