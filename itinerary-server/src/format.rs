//! Presentation records for consolidated routes.

use chrono_tz::Tz;
use serde::Serialize;

use crate::domain::{Route, format_clock, format_duration, in_timezone};
use crate::reference::StationDirectory;

/// One itinerary as shown to a rider.
///
/// Station, route and time fields describe the first leg of the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    /// Name of the first leg's arrival stop; `None` if the id is unknown.
    pub destination_station_name: Option<String>,
    pub route_name: String,
    pub route_text_color: String,
    pub route_color: String,
    /// First departure as a 12-hour clock, e.g. `"10:00 AM"`.
    pub departure_time: String,
    /// Door-to-door time as `H:MM:SS`.
    pub total_time: String,
    pub is_direct: bool,
}

impl DisplayRecord {
    /// Build the display record for a route, showing times in `timezone`.
    pub fn from_route(route: &Route, stations: &StationDirectory, timezone: Tz) -> Self {
        let first = route.first_leg();

        Self {
            destination_station_name: stations.name_of(first.to_station()).map(str::to_string),
            route_name: first.route.name.clone(),
            route_text_color: first.route.text_color.clone(),
            route_color: first.route.color.clone(),
            departure_time: format_clock(&in_timezone(&first.departure_time(), timezone)),
            total_time: format_duration(route.total_duration()),
            is_direct: route.is_direct(),
        }
    }
}

/// Format every route, preserving order.
pub fn format_routes(routes: &[Route], stations: &StationDirectory, timezone: Tz) -> Vec<DisplayRecord> {
    routes
        .iter()
        .map(|route| DisplayRecord::from_route(route, stations, timezone))
        .collect()
}
