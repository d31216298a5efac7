//! Application state for the web layer.

use std::sync::Arc;

use crate::service::ItineraryService;

/// Shared application state.
///
/// Cloned per request; the service itself is shared.
pub struct AppState<S> {
    /// Itinerary search over the live feed
    pub itineraries: Arc<ItineraryService<S>>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(itineraries: ItineraryService<S>) -> Self {
        Self {
            itineraries: Arc::new(itineraries),
        }
    }
}

// Manual impl: the feed source itself need not be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            itineraries: Arc::clone(&self.itineraries),
        }
    }
}
