//! Search configuration for the itinerary planner.

use chrono::Duration;
use chrono_tz::Tz;
use thiserror::Error;

use crate::domain::DEFAULT_TIMEZONE;

/// Default look-ahead in minutes (6 hours).
const DEFAULT_HORIZON_MINS: i64 = 360;

/// Errors from building a [`SearchConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Horizon is zero, negative, or too large to represent
    #[error("search horizon must be a positive number of minutes, got {0}")]
    InvalidHorizon(i64),
}

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How far ahead of "now" to explore.
    /// Queue entries later than this end the search.
    horizon: Duration,

    /// Whether itineraries with transfers are offered when a direct one exists.
    pub include_transfers: bool,

    /// Timezone used for calendar dates and displayed times.
    pub timezone: Tz,

    /// Wall-clock budget for one search (milliseconds).
    /// When exceeded, the paths found so far are returned.
    pub budget_ms: Option<u64>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHorizon`] unless `horizon_mins` is
    /// positive and fits in a [`Duration`].
    pub fn new(
        horizon_mins: i64,
        include_transfers: bool,
        timezone: Tz,
        budget_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let horizon = Duration::try_minutes(horizon_mins)
            .filter(|h| *h > Duration::zero())
            .ok_or(ConfigError::InvalidHorizon(horizon_mins))?;

        Ok(Self {
            horizon,
            include_transfers,
            timezone,
            budget_ms,
        })
    }

    /// Returns the look-ahead horizon as a Duration.
    pub fn horizon(&self) -> Duration {
        self.horizon
    }

    /// Returns the look-ahead horizon in whole minutes.
    pub fn horizon_mins(&self) -> i64 {
        self.horizon.num_minutes()
    }

    /// Returns the search budget as a std Duration, if set.
    pub fn budget(&self) -> Option<std::time::Duration> {
        self.budget_ms.map(std::time::Duration::from_millis)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            horizon: Duration::minutes(DEFAULT_HORIZON_MINS),
            include_transfers: false,
            timezone: DEFAULT_TIMEZONE,
            budget_ms: None,
        }
    }
}
