//! Web layer for the itinerary planner.
//!
//! Provides a JSON API for listing stations and finding trains.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
