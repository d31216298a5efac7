//! Static reference data: station names and route metadata.
//!
//! Both tables are immutable values built at startup and injected where
//! they are needed.

mod routes;
mod stations;

pub use routes::RouteCatalog;
pub use stations::StationDirectory;
