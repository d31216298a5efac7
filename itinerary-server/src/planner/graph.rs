//! Trip graph: outbound segments keyed by origin stop.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Segment, StopId};

/// Adjacency from a stop to the segments departing it.
///
/// Built once per search and read-only afterwards. Segments are held in
/// `Arc`s so that search paths can share them without copying.
#[derive(Debug, Clone, Default)]
pub struct TripGraph {
    outbound: HashMap<StopId, Vec<Arc<Segment>>>,
    segment_count: usize,
}

impl TripGraph {
    /// Segments departing `station`; empty for unknown stations.
    pub fn departures(&self, station: &StopId) -> &[Arc<Segment>] {
        self.outbound.get(station).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of stations with at least one departure.
    pub fn station_count(&self) -> usize {
        self.outbound.len()
    }

    /// Total number of segments in the graph.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }
}

/// Group segments by their `from_station`.
///
/// Station ids are not checked against any reference data.
pub fn build_graph<I>(segments: I) -> TripGraph
where
    I: IntoIterator<Item = Segment>,
{
    let mut graph = TripGraph::default();
    for segment in segments {
        graph
            .outbound
            .entry(segment.from_station().clone())
            .or_default()
            .push(Arc::new(segment));
        graph.segment_count += 1;
    }
    graph
}
