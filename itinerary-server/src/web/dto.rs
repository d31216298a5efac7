//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::format::DisplayRecord;

/// Origin used when a request names none.
pub const DEFAULT_FROM: &str = "Forest Hills";

/// Destination used when a request names none.
pub const DEFAULT_TO: &str = "Penn Station";

fn default_from() -> String {
    DEFAULT_FROM.to_string()
}

fn default_to() -> String {
    DEFAULT_TO.to_string()
}

/// Query string for `/api/trains`.
#[derive(Debug, Deserialize)]
pub struct TrainsRequest {
    /// Origin station name
    #[serde(default = "default_from")]
    pub from: String,

    /// Destination station name
    #[serde(default = "default_to")]
    pub to: String,

    /// Whether to offer itineraries with transfers (defaults to the server config)
    pub include_transfers: Option<bool>,

    /// Look-ahead window in minutes (defaults to the server config)
    pub max_search_mins: Option<i64>,
}

/// Response for `/api/trains`.
#[derive(Debug, Serialize)]
pub struct TrainsResponse {
    /// Itineraries ordered by first departure
    pub trains: Vec<DisplayRecord>,
}

/// Response for `/api/stations`.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Station names, sorted alphabetically
    pub stations: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
