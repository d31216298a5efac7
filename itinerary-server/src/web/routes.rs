//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Duration, Utc};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::feed::FeedSource;
use crate::service::{SearchError, TrainQuery};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: FeedSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations::<S>))
        .route("/api/trains", get(find_trains::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All known station names.
async fn list_stations<S>(State(state): State<AppState<S>>) -> Json<StationsResponse>
where
    S: FeedSource + Send + Sync + 'static,
{
    let stations = state
        .itineraries
        .stations()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(StationsResponse { stations })
}

/// Itineraries between two stations, departing from now.
async fn find_trains<S>(
    State(state): State<AppState<S>>,
    Query(req): Query<TrainsRequest>,
) -> Result<Json<TrainsResponse>, AppError>
where
    S: FeedSource + Send + Sync + 'static,
{
    let service = &state.itineraries;
    let config = service.config();
    let now = Utc::now().with_timezone(&config.timezone);

    let mut query = TrainQuery::new(req.from, req.to, now, config);
    if let Some(include) = req.include_transfers {
        query = query.with_transfers(include);
    }
    if let Some(mins) = req.max_search_mins {
        let window = Duration::try_minutes(mins)
            .filter(|w| *w > Duration::zero() && now.checked_add_signed(*w).is_some())
            .ok_or_else(|| AppError::BadRequest {
                message: format!("Invalid max_search_mins: {mins}"),
            })?;
        query = query.with_max_search_time(window);
    }

    let trains = service.search(&query).await?;
    Ok(Json(TrainsResponse { trains }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownStation(_) | SearchError::InvalidWindow(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedError;
    use crate::planner::SearchConfig;
    use crate::reference::{RouteCatalog, StationDirectory};
    use crate::service::ItineraryService;
    use std::sync::Arc;

    /// A feed with no trips in it.
    struct EmptyFeed;

    impl FeedSource for EmptyFeed {
        async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
            Ok(Vec::new())
        }
    }

    fn state() -> AppState<EmptyFeed> {
        AppState::new(ItineraryService::gtfs_realtime(
            EmptyFeed,
            Arc::new(StationDirectory::lirr()),
            Arc::new(RouteCatalog::lirr()),
            SearchConfig::default(),
        ))
    }

    fn request(from: &str, to: &str) -> TrainsRequest {
        TrainsRequest {
            from: from.to_string(),
            to: to.to_string(),
            include_transfers: None,
            max_search_mins: None,
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn stations_are_sorted() {
        let Json(response) = list_stations(State(state())).await;

        assert_eq!(response.stations.len(), StationDirectory::lirr().len());
        assert!(response.stations.windows(2).all(|w| w[0] <= w[1]));
        assert!(response.stations.iter().any(|s| s == "Penn Station"));
    }

    #[tokio::test]
    async fn empty_feed_gives_no_trains() {
        let result = find_trains(State(state()), Query(request("Forest Hills", "Penn Station"))).await;

        let Json(response) = result.unwrap();
        assert!(response.trains.is_empty());
    }

    #[tokio::test]
    async fn unknown_station_is_bad_request() {
        let result = find_trains(State(state()), Query(request("Atlantis", "Penn Station"))).await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "unknown station: Atlantis");
    }

    #[tokio::test]
    async fn non_positive_window_is_bad_request() {
        let mut req = request("Forest Hills", "Penn Station");
        req.max_search_mins = Some(0);

        let result = find_trains(State(state()), Query(req)).await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn window_past_end_of_calendar_is_bad_request() {
        let mut req = request("Forest Hills", "Penn Station");
        req.max_search_mins = Some(100_000_000_000_000);

        let result = find_trains(State(state()), Query(req)).await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid max_search_mins: 100000000000000");
    }

    #[tokio::test]
    async fn window_outside_duration_range_is_bad_request() {
        let mut req = request("Forest Hills", "Penn Station");
        req.max_search_mins = Some(i64::MAX);

        let result = find_trains(State(state()), Query(req)).await;

        assert_eq!(
            result.unwrap_err().into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn search_errors_map_to_bad_request() {
        for err in [
            SearchError::UnknownStation("Atlantis".to_string()),
            SearchError::InvalidWindow(-1),
        ] {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
