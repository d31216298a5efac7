//! GTFS-Realtime decoding into per-trip stop events.

use chrono_tz::Tz;
use gtfs_realtime::trip_update::{StopTimeEvent, StopTimeUpdate};
use gtfs_realtime::{FeedMessage, TripUpdate};
use prost::Message;
use tracing::debug;

use crate::domain::{NetworkTime, StopId, TripId, from_unix_seconds};

use super::error::FeedError;

/// One stop of a trip as published in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopEvent {
    pub stop_id: StopId,
    pub sequence: u32,
    pub arrival: Option<NetworkTime>,
    pub departure: Option<NetworkTime>,
}

/// A decoded trip update with its stops ordered by sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTripUpdate {
    pub trip_id: TripId,
    pub route_id: String,
    pub direction_id: u32,
    pub stops: Vec<StopEvent>,
}

/// Turns raw feed bytes into trip updates.
///
/// This abstraction allows the service to be tested with canned trips.
pub trait FeedDecoder {
    /// Decode one feed snapshot.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawTripUpdate>, FeedError>;
}

/// Decoder for protobuf-encoded GTFS-Realtime trip update feeds.
#[derive(Debug, Clone, Copy)]
pub struct GtfsRealtimeDecoder {
    timezone: Tz,
}

impl GtfsRealtimeDecoder {
    /// Create a decoder producing instants in the given timezone.
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    fn convert_trip(&self, update: TripUpdate) -> RawTripUpdate {
        let trip = update.trip;
        let mut stops: Vec<StopEvent> = update
            .stop_time_update
            .into_iter()
            .map(|stu| self.convert_stop(stu))
            .collect();
        stops.sort_by_key(|s| s.sequence);

        RawTripUpdate {
            trip_id: TripId::new(trip.trip_id.unwrap_or_default()),
            route_id: trip.route_id.unwrap_or_default(),
            direction_id: trip.direction_id.unwrap_or_default(),
            stops,
        }
    }

    fn convert_stop(&self, update: StopTimeUpdate) -> StopEvent {
        // An event without an absolute time carries nothing to plan with
        let instant = |event: Option<StopTimeEvent>| {
            event
                .and_then(|e| e.time)
                .and_then(|secs| from_unix_seconds(secs, self.timezone))
        };

        StopEvent {
            stop_id: StopId::new(update.stop_id.unwrap_or_default()),
            sequence: update.stop_sequence.unwrap_or_default(),
            arrival: instant(update.arrival),
            departure: instant(update.departure),
        }
    }
}

impl FeedDecoder for GtfsRealtimeDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawTripUpdate>, FeedError> {
        let feed = FeedMessage::decode(bytes)?;
        let entity_count = feed.entity.len();

        let trips: Vec<RawTripUpdate> = feed
            .entity
            .into_iter()
            .filter(|e| !e.is_deleted.unwrap_or(false))
            .filter_map(|e| e.trip_update)
            .map(|update| self.convert_trip(update))
            .collect();

        debug!(
            entities = entity_count,
            trips = trips.len(),
            "decoded GTFS-Realtime feed"
        );
        Ok(trips)
    }
}
