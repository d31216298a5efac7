//! Route consolidation for search results.
//!
//! Turns raw search paths into ranked routes: merge same-trip hops into
//! legs, keep the fastest route per departing train, order by departure,
//! and apply the transfer policy.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use crate::domain::{NetworkTime, Route, StopId};

use super::search::Path;

/// Consolidate raw paths into the final ordered route list.
///
/// The result is deterministic for identical inputs.
pub fn process_routes(paths: &[Path], include_transfers: bool, end_station: &StopId) -> Vec<Route> {
    let routes = merge_paths(paths, end_station);
    let merged = routes.len();

    let routes = best_per_departure(routes);
    let routes = sort_by_departure(routes);
    let routes = apply_transfer_policy(routes, include_transfers);

    debug!(
        paths = paths.len(),
        merged,
        kept = routes.len(),
        include_transfers,
        "consolidated routes"
    );
    routes
}

/// Merge each path into legs, dropping paths that are broken or end elsewhere.
pub fn merge_paths(paths: &[Path], end_station: &StopId) -> Vec<Route> {
    paths
        .iter()
        .filter_map(|path| match Route::from_path(path, end_station) {
            Ok(route) => Some(route),
            Err(e) => {
                trace!(error = %e, "discarding path");
                None
            }
        })
        .collect()
}

/// Keep the shortest route for each (origin, first departure) pair.
///
/// When durations tie, the route seen first is kept.
pub fn best_per_departure(routes: Vec<Route>) -> Vec<Route> {
    if routes.len() <= 1 {
        return routes;
    }

    let mut best: Vec<Route> = Vec::with_capacity(routes.len());
    let mut index: HashMap<(StopId, NetworkTime), usize> = HashMap::new();

    for route in routes {
        let key = (route.origin().clone(), route.departure_time());
        match index.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(best.len());
                best.push(route);
            }
            Entry::Occupied(slot) => {
                let existing = &mut best[*slot.get()];
                if route.total_duration() < existing.total_duration() {
                    *existing = route;
                }
            }
        }
    }

    best
}

/// Order routes by first departure, then by origin.
pub fn sort_by_departure(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(|a, b| {
        a.departure_time()
            .cmp(&b.departure_time())
            .then_with(|| a.origin().cmp(b.origin()))
    });
    routes
}

/// Drop routes with transfers unless they are asked for.
///
/// If no direct route remains, the unfiltered list is returned instead
/// of nothing.
pub fn apply_transfer_policy(routes: Vec<Route>, include_transfers: bool) -> Vec<Route> {
    if include_transfers {
        return routes;
    }

    let direct: Vec<Route> = routes.iter().filter(|r| r.is_direct()).cloned().collect();
    if direct.is_empty() { routes } else { direct }
}
