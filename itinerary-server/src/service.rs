//! Itinerary search service.
//!
//! Wires the pipeline together for one query: fetch the latest feed,
//! decode it, derive segments, build the trip graph, search, consolidate
//! and format. Feed failures degrade to an empty answer; only an unknown
//! station name or an unusable search window is reported to the caller.

use std::sync::Arc;
use std::time::Instant;

use chrono::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::{NetworkTime, Segment, StopId};
use crate::feed::{
    FeedDecoder, FeedError, FeedSource, GtfsRealtimeDecoder, RawTripUpdate, derive_segments,
};
use crate::format::{DisplayRecord, format_routes};
use crate::planner::{SearchConfig, SearchRequest, build_graph, process_routes, search};
use crate::reference::{RouteCatalog, StationDirectory};

/// Errors reported to callers of [`ItineraryService::search`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("unknown station: {0}")]
    UnknownStation(String),

    #[error("invalid search window: {0} minutes")]
    InvalidWindow(i64),
}

/// A rider's question: trains between two named stations.
#[derive(Debug, Clone)]
pub struct TrainQuery {
    /// Origin station name
    pub from: String,
    /// Destination station name
    pub to: String,
    /// Offer itineraries with transfers even when a direct one exists
    pub include_transfers: bool,
    /// How far ahead of `now` to look
    pub max_search_time: Duration,
    /// Time the search starts from
    pub now: NetworkTime,
}

impl TrainQuery {
    /// Create a query using the defaults from `config`.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        now: NetworkTime,
        config: &SearchConfig,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            include_transfers: config.include_transfers,
            max_search_time: config.horizon(),
            now,
        }
    }

    /// Set whether transfers are included.
    pub fn with_transfers(mut self, include: bool) -> Self {
        self.include_transfers = include;
        self
    }

    /// Set the look-ahead window.
    pub fn with_max_search_time(mut self, window: Duration) -> Self {
        self.max_search_time = window;
        self
    }
}

/// Answers [`TrainQuery`]s from a live feed.
///
/// Reference tables are shared read-only. Every search works on a fresh
/// feed snapshot and its own graph, so one service can serve concurrent
/// requests.
#[derive(Debug)]
pub struct ItineraryService<S, D = GtfsRealtimeDecoder> {
    source: S,
    decoder: D,
    stations: Arc<StationDirectory>,
    routes: Arc<RouteCatalog>,
    config: SearchConfig,
}

impl<S: FeedSource> ItineraryService<S> {
    /// Create a service decoding GTFS-Realtime in the configured timezone.
    pub fn gtfs_realtime(
        source: S,
        stations: Arc<StationDirectory>,
        routes: Arc<RouteCatalog>,
        config: SearchConfig,
    ) -> Self {
        let decoder = GtfsRealtimeDecoder::new(config.timezone);
        Self::new(source, decoder, stations, routes, config)
    }
}

impl<S: FeedSource, D: FeedDecoder> ItineraryService<S, D> {
    /// Create a service from its parts.
    pub fn new(
        source: S,
        decoder: D,
        stations: Arc<StationDirectory>,
        routes: Arc<RouteCatalog>,
        config: SearchConfig,
    ) -> Self {
        Self {
            source,
            decoder,
            stations,
            routes,
            config,
        }
    }

    /// Station directory used to resolve names.
    pub fn stations(&self) -> &StationDirectory {
        &self.stations
    }

    /// Search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find itineraries for a query.
    ///
    /// Returns an empty list when the feed can't be fetched or decoded,
    /// or when no itinerary exists within the query window. Station
    /// names and the window are checked before the feed is fetched.
    pub async fn search(&self, query: &TrainQuery) -> Result<Vec<DisplayRecord>, SearchError> {
        let (start, end) = self.resolve(query)?;
        check_window(query)?;

        let trips = match self.load_trips().await {
            Ok(trips) => trips,
            Err(e) => {
                error!(error = %e, "feed unavailable, returning no itineraries");
                return Ok(Vec::new());
            }
        };

        let records = self.plan(&trips, &start, &end, query);
        info!(
            from = %query.from,
            to = %query.to,
            results = records.len(),
            "itinerary search complete"
        );
        Ok(records)
    }

    /// Run the pure pipeline over already-decoded trips.
    ///
    /// Station names in `query` are ignored; `start` and `end` are used.
    pub fn plan(
        &self,
        trips: &[RawTripUpdate],
        start: &StopId,
        end: &StopId,
        query: &TrainQuery,
    ) -> Vec<DisplayRecord> {
        let segments: Vec<Segment> = derive_segments(trips, &self.routes);
        let graph = build_graph(segments);
        debug!(
            stations = graph.station_count(),
            segments = graph.segment_count(),
            "built trip graph"
        );

        let request = SearchRequest::new(
            start.clone(),
            end.clone(),
            query.now,
            query.max_search_time,
        );
        let deadline = self.config.budget().map(|budget| Instant::now() + budget);
        let result = search(&graph, &request, deadline);

        if result.cut_short {
            warn!(
                states = result.states_explored,
                paths = result.paths.len(),
                "search budget exhausted, returning partial results"
            );
        }

        let routes = process_routes(&result.paths, query.include_transfers, end);
        format_routes(&routes, &self.stations, self.config.timezone)
    }

    fn resolve(&self, query: &TrainQuery) -> Result<(StopId, StopId), SearchError> {
        let lookup = |name: &str| {
            self.stations
                .id_of(name)
                .cloned()
                .ok_or_else(|| SearchError::UnknownStation(name.to_string()))
        };
        Ok((lookup(&query.from)?, lookup(&query.to)?))
    }

    async fn load_trips(&self) -> Result<Vec<RawTripUpdate>, FeedError> {
        let bytes = self.source.fetch().await?;
        self.decoder.decode(&bytes)
    }
}

/// The window must be positive and end within the calendar.
fn check_window(query: &TrainQuery) -> Result<(), SearchError> {
    let window = query.max_search_time;
    if window <= Duration::zero() || query.now.checked_add_signed(window).is_none() {
        return Err(SearchError::InvalidWindow(window.num_minutes()));
    }
    Ok(())
}
