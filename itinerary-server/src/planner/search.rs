//! Time-expanded itinerary search.
//!
//! Explores the trip graph from a start stop in order of arrival time,
//! enumerating every path that reaches the destination before the
//! look-ahead horizon. Paths are returned raw; merging them into legs
//! and picking the best ones happens in the consolidator.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use chrono::{Duration, NaiveDate};
use tracing::{debug, trace, warn};

use crate::domain::{NetworkTime, Segment, StopId, service_date};

use super::graph::TripGraph;

/// A raw search path: the segments taken, in order.
pub type Path = Vec<Arc<Segment>>;

/// Request for one search over a trip graph.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Stop to start from.
    pub start: StopId,

    /// Stop to reach.
    pub end: StopId,

    /// Earliest time a first segment may depart.
    pub start_time: NetworkTime,

    /// How far past `start_time` to keep exploring.
    pub horizon: Duration,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(start: StopId, end: StopId, start_time: NetworkTime, horizon: Duration) -> Self {
        Self {
            start,
            end,
            start_time,
            horizon,
        }
    }

    /// Latest instant still explored, or `None` if the horizon overflows.
    pub fn cutoff(&self) -> Option<NetworkTime> {
        self.start_time.checked_add_signed(self.horizon)
    }
}

/// Result of a search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Every path that reached the destination, in the order found.
    pub paths: Vec<Path>,

    /// Number of queue entries popped.
    pub states_explored: usize,

    /// True if the deadline stopped the search before the horizon did.
    pub cut_short: bool,
}

/// Queue entry during search.
#[derive(Debug, Clone)]
struct SearchState {
    /// Arrival time at `station`.
    time: NetworkTime,

    /// Push order; breaks ties between equal times.
    seq: u64,

    /// Segments taken so far.
    path: Path,

    /// Current station.
    station: StopId,

    /// Stations arrived at along this path.
    visited: HashSet<StopId>,
}

// Min-heap on (time, seq). Paths and visited sets never take part.
impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}

impl Eq for SearchState {}

/// Priority queue that stamps each entry with a monotonic sequence number.
struct Frontier {
    heap: BinaryHeap<SearchState>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, time: NetworkTime, path: Path, station: StopId, visited: HashSet<StopId>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(SearchState {
            time,
            seq,
            path,
            station,
            visited,
        });
    }

    fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop()
    }
}

/// Find every path from `start` to `end` within `max_search_time` of `start_time`.
///
/// Convenience wrapper over [`search`] without a deadline.
pub fn find_routes(
    graph: &TripGraph,
    start: &StopId,
    end: &StopId,
    start_time: NetworkTime,
    max_search_time: Duration,
) -> Vec<Path> {
    let request = SearchRequest::new(start.clone(), end.clone(), start_time, max_search_time);
    search(graph, &request, None).paths
}

/// Run a time-expanded search.
///
/// Entries are popped in order of arrival time. The first entry later
/// than `start_time + horizon` ends the search. Entries at the
/// destination are recorded and not expanded. Any other station is
/// expanded at most once per calendar date; a segment is taken if it
/// departs no earlier than the current time and doesn't lead back to a
/// station already on the path.
///
/// If `deadline` passes, the paths found so far are returned with
/// `cut_short` set. A request whose horizon overflows the calendar is
/// rejected up front and yields no paths.
pub fn search(graph: &TripGraph, request: &SearchRequest, deadline: Option<Instant>) -> SearchResult {
    let mut result = SearchResult::default();
    let Some(cutoff) = request.cutoff() else {
        warn!(
            start_time = %request.start_time,
            horizon_mins = request.horizon.num_minutes(),
            "search horizon overflows, not searching"
        );
        return result;
    };
    let mut finalized: HashSet<(StopId, NaiveDate)> = HashSet::new();

    let mut frontier = Frontier::new();
    frontier.push(
        request.start_time,
        Vec::new(),
        request.start.clone(),
        HashSet::new(),
    );

    while let Some(state) = frontier.pop() {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            result.cut_short = true;
            break;
        }

        result.states_explored += 1;

        if state.time > cutoff {
            trace!(time = %state.time, "reached search horizon");
            break;
        }

        if state.station == request.end {
            trace!(hops = state.path.len(), arrival = %state.time, "found path to destination");
            result.paths.push(state.path);
            continue;
        }

        if !finalized.insert((state.station.clone(), service_date(&state.time))) {
            continue;
        }

        for segment in graph.departures(&state.station) {
            if segment.departure_time() < state.time
                || state.visited.contains(segment.to_station())
            {
                continue;
            }

            let mut path = Vec::with_capacity(state.path.len() + 1);
            path.extend(state.path.iter().cloned());
            path.push(Arc::clone(segment));

            let mut visited = state.visited.clone();
            visited.insert(segment.to_station().clone());

            frontier.push(
                segment.arrival_time(),
                path,
                segment.to_station().clone(),
                visited,
            );
        }
    }

    debug!(
        start = %request.start,
        end = %request.end,
        paths = result.paths.len(),
        states = result.states_explored,
        cut_short = result.cut_short,
        "search finished"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_TIMEZONE, RouteInfo, TripId};
    use crate::planner::graph::build_graph;
    use chrono::TimeZone;

    fn on(day: u32, h: u32, m: u32) -> NetworkTime {
        DEFAULT_TIMEZONE
            .with_ymd_and_hms(2024, 3, day, h, m, 0)
            .single()
            .unwrap()
    }

    fn at(h: u32, m: u32) -> NetworkTime {
        on(15, h, m)
    }

    fn stop(s: &str) -> StopId {
        StopId::new(s)
    }

    fn hop(from: &str, to: &str, dep: NetworkTime, arr: NetworkTime, trip: &str) -> Segment {
        Segment::new(
            dep,
            arr,
            "1",
            0,
            stop(from),
            stop(to),
            TripId::new(trip),
            RouteInfo::unknown(),
        )
        .unwrap()
    }

    /// A→B (trip 1), B→C (trip 1), B→D (trip 2).
    fn sample_graph() -> TripGraph {
        build_graph(vec![
            hop("A", "B", at(10, 0), at(10, 20), "1"),
            hop("B", "C", at(10, 25), at(10, 50), "1"),
            hop("B", "D", at(10, 30), at(11, 0), "2"),
        ])
    }

    fn stations(path: &Path) -> Vec<&str> {
        let mut out: Vec<&str> = path.iter().map(|s| s.from_station().as_str()).collect();
        if let Some(last) = path.last() {
            out.push(last.to_station().as_str());
        }
        out
    }

    #[test]
    fn finds_same_trip_path() {
        let paths = find_routes(
            &sample_graph(),
            &stop("A"),
            &stop("C"),
            at(9, 0),
            Duration::hours(6),
        );

        assert_eq!(paths.len(), 1);
        assert_eq!(stations(&paths[0]), vec!["A", "B", "C"]);
    }

    #[test]
    fn finds_transfer_path() {
        let paths = find_routes(
            &sample_graph(),
            &stop("A"),
            &stop("D"),
            at(9, 0),
            Duration::hours(6),
        );

        assert_eq!(paths.len(), 1);
        assert_eq!(stations(&paths[0]), vec!["A", "B", "D"]);
        assert_eq!(paths[0][1].trip_id().as_str(), "2");
    }

    #[test]
    fn unreachable_destination() {
        let paths = find_routes(
            &sample_graph(),
            &stop("A"),
            &stop("Z"),
            at(9, 0),
            Duration::hours(6),
        );
        assert!(paths.is_empty());
    }

    #[test]
    fn segments_departing_before_now_are_ignored() {
        let paths = find_routes(
            &sample_graph(),
            &stop("A"),
            &stop("C"),
            at(10, 1),
            Duration::hours(6),
        );
        assert!(paths.is_empty());
    }

    #[test]
    fn connection_must_depart_after_arrival() {
        let graph = build_graph(vec![
            hop("A", "B", at(10, 0), at(10, 30), "1"),
            hop("B", "C", at(10, 20), at(10, 40), "2"),
        ]);
        let paths = find_routes(&graph, &stop("A"), &stop("C"), at(9, 0), Duration::hours(6));
        assert!(paths.is_empty());
    }

    #[test]
    fn horizon_bounds_arrivals() {
        // Arrival at C is 10:50, 110 minutes after 09:00
        let graph = sample_graph();
        let short = find_routes(&graph, &stop("A"), &stop("C"), at(9, 0), Duration::minutes(109));
        assert!(short.is_empty());

        let exact = find_routes(&graph, &stop("A"), &stop("C"), at(9, 0), Duration::minutes(110));
        assert_eq!(exact.len(), 1);
    }

    #[test]
    fn horizon_past_end_of_calendar_searches_nothing() {
        let horizon = Duration::try_minutes(100_000_000_000_000).unwrap();
        let request = SearchRequest::new(stop("A"), stop("C"), at(9, 0), horizon);
        assert!(request.cutoff().is_none());

        let result = search(&sample_graph(), &request, None);

        assert!(result.paths.is_empty());
        assert_eq!(result.states_explored, 0);
        assert!(!result.cut_short);
    }

    #[test]
    fn start_equals_end_gives_empty_path() {
        let paths = find_routes(
            &sample_graph(),
            &stop("A"),
            &stop("A"),
            at(9, 0),
            Duration::hours(6),
        );
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_empty());
    }

    #[test]
    fn station_without_departures_is_not_an_error() {
        let paths = find_routes(
            &sample_graph(),
            &stop("Q"),
            &stop("C"),
            at(9, 0),
            Duration::hours(6),
        );
        assert!(paths.is_empty());
    }

    #[test]
    fn enumerates_competing_paths() {
        // Two trains from A reach C; both paths are returned
        let graph = build_graph(vec![
            hop("A", "C", at(10, 0), at(10, 40), "1"),
            hop("A", "B", at(10, 5), at(10, 15), "2"),
            hop("B", "C", at(10, 20), at(10, 30), "2"),
        ]);
        let paths = find_routes(&graph, &stop("A"), &stop("C"), at(9, 0), Duration::hours(6));

        assert_eq!(paths.len(), 2);
        // Found in arrival order
        assert_eq!(stations(&paths[0]), vec!["A", "B", "C"]);
        assert_eq!(stations(&paths[1]), vec!["A", "C"]);
    }

    #[test]
    fn destination_reached_twice_via_different_paths() {
        let graph = build_graph(vec![
            hop("A", "C", at(10, 0), at(10, 30), "1"),
            hop("A", "C", at(11, 0), at(11, 30), "2"),
        ]);
        let paths = find_routes(&graph, &stop("A"), &stop("C"), at(9, 0), Duration::hours(6));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn station_expanded_once_per_day() {
        // The second arrival at B (via X) is not expanded again, so the
        // later B→C segment is only reachable from the first arrival.
        let graph = build_graph(vec![
            hop("A", "B", at(10, 0), at(10, 10), "1"),
            hop("A", "X", at(10, 0), at(10, 5), "2"),
            hop("X", "B", at(10, 6), at(10, 20), "2"),
            hop("B", "C", at(10, 30), at(10, 40), "3"),
        ]);
        let paths = find_routes(&graph, &stop("A"), &stop("C"), at(9, 0), Duration::hours(6));

        assert_eq!(paths.len(), 1);
        assert_eq!(stations(&paths[0]), vec!["A", "B", "C"]);
    }

    #[test]
    fn station_expanded_again_on_new_day() {
        // B is first reached late on the 15th, then again after midnight
        let graph = build_graph(vec![
            hop("A", "B", on(15, 23, 0), on(15, 23, 10), "1"),
            hop("A", "X", on(15, 23, 0), on(15, 23, 30), "2"),
            hop("X", "B", on(15, 23, 50), on(16, 0, 10), "2"),
            hop("B", "C", on(16, 0, 20), on(16, 0, 40), "3"),
        ]);
        let paths = find_routes(
            &graph,
            &stop("A"),
            &stop("C"),
            on(15, 22, 0),
            Duration::hours(6),
        );

        // Both arrivals at B lead on to C
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn path_never_revisits_a_station() {
        let graph = build_graph(vec![
            hop("A", "B", at(10, 0), at(10, 10), "1"),
            hop("B", "C", at(10, 15), at(10, 25), "1"),
            hop("C", "B", at(10, 30), at(10, 40), "2"),
            hop("B", "D", at(10, 45), at(10, 55), "3"),
        ]);
        let paths = find_routes(&graph, &stop("A"), &stop("D"), at(9, 0), Duration::hours(6));

        assert_eq!(paths.len(), 1);
        assert_eq!(stations(&paths[0]), vec!["A", "B", "D"]);
    }

    #[test]
    fn equal_times_pop_in_push_order() {
        let mut frontier = Frontier::new();
        frontier.push(at(10, 0), Vec::new(), stop("first"), HashSet::new());
        frontier.push(at(10, 0), Vec::new(), stop("second"), HashSet::new());
        frontier.push(at(9, 0), Vec::new(), stop("earliest"), HashSet::new());

        let order: Vec<StopId> = std::iter::from_fn(|| frontier.pop().map(|s| s.station)).collect();
        assert_eq!(order, vec![stop("earliest"), stop("first"), stop("second")]);
    }

    #[test]
    fn expired_deadline_cuts_search_short() {
        let request = SearchRequest::new(stop("A"), stop("C"), at(9, 0), Duration::hours(6));
        let result = search(&sample_graph(), &request, Some(Instant::now()));

        assert!(result.cut_short);
        assert!(result.paths.is_empty());
    }

    #[test]
    fn generous_deadline_matches_unbounded_search() {
        let request = SearchRequest::new(stop("A"), stop("D"), at(9, 0), Duration::hours(6));
        let deadline = Instant::now() + std::time::Duration::from_secs(60);
        let result = search(&sample_graph(), &request, Some(deadline));

        assert!(!result.cut_short);
        assert_eq!(result.paths.len(), 1);
        assert!(result.states_explored >= 3);
    }
}
