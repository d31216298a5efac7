//! Route id → display metadata lookup.

use std::collections::HashMap;

use crate::domain::RouteInfo;

/// Long Island Rail Road branches as (route id, name, color, text color).
const LIRR_ROUTES: &[(&str, &str, &str, &str)] = &[
    ("1", "Babylon Branch", "00985F", "FFFFFF"),
    ("2", "Hempstead Branch", "CE8E00", "121212"),
    ("3", "Oyster Bay Branch", "00AF3F", "FFFFFF"),
    ("4", "Ronkonkoma Branch", "A626AA", "FFFFFF"),
    ("5", "Montauk Branch", "00B2A9", "121212"),
    ("6", "Long Beach Branch", "FF6319", "FFFFFF"),
    ("7", "Far Rockaway Branch", "6E3219", "FFFFFF"),
    ("8", "West Hempstead Branch", "00A1DE", "121212"),
    ("9", "Port Washington Branch", "C60C30", "FFFFFF"),
    ("10", "Port Jefferson Branch", "006EC7", "FFFFFF"),
    ("11", "Belmont Park", "60269E", "FFFFFF"),
    ("12", "City Terminal Zone", "4D5357", "FFFFFF"),
];

/// Read-only route metadata with a placeholder for unknown ids.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: HashMap<String, RouteInfo>,
    fallback: RouteInfo,
}

impl RouteCatalog {
    /// Build a catalog from (route id, info) pairs.
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = (S, RouteInfo)>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(|(id, info)| (id.into(), info)).collect(),
            fallback: RouteInfo::unknown(),
        }
    }

    /// The Long Island Rail Road branch table.
    pub fn lirr() -> Self {
        Self::new(
            LIRR_ROUTES
                .iter()
                .map(|(id, name, color, text)| (*id, RouteInfo::new(*name, *color, *text))),
        )
    }

    /// Metadata for a route, or the "Unknown Route" placeholder.
    pub fn lookup(&self, route_id: &str) -> &RouteInfo {
        self.routes.get(route_id).unwrap_or(&self.fallback)
    }

    /// Number of known routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self::new(std::iter::empty::<(String, RouteInfo)>())
    }
}
