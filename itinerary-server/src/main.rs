use std::error::Error;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use chrono_tz::Tz;
use tracing::info;
use tracing_subscriber::EnvFilter;

use itinerary_server::feed::{FeedClient, FeedConfig, FeedSource, FileFeed};
use itinerary_server::planner::SearchConfig;
use itinerary_server::reference::{RouteCatalog, StationDirectory};
use itinerary_server::service::ItineraryService;
use itinerary_server::web::{AppState, create_router};

/// Address to listen on when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

type BoxError = Box<dyn Error + Send + Sync>;

/// Read and parse an environment variable, if set.
fn env_var<T>(name: &str) -> Result<Option<T>, BoxError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("invalid {name} {raw:?}: {e}").into()),
        Err(_) => Ok(None),
    }
}

fn search_config() -> Result<SearchConfig, BoxError> {
    let defaults = SearchConfig::default();
    Ok(SearchConfig::new(
        env_var("SEARCH_HORIZON_MINS")?.unwrap_or(defaults.horizon_mins()),
        env_var("INCLUDE_TRANSFERS")?.unwrap_or(defaults.include_transfers),
        env_var::<Tz>("HOME_TIMEZONE")?.unwrap_or(defaults.timezone),
        env_var("SEARCH_BUDGET_MS")?.or(defaults.budget_ms),
    )?)
}

fn feed_config() -> Result<FeedConfig, BoxError> {
    let mut config = match env_var::<String>("FEED_URL")? {
        Some(url) => FeedConfig::new(url),
        None => FeedConfig::default(),
    };
    if let Some(key) = env_var::<String>("FEED_API_KEY")? {
        config = config.with_api_key(key);
    }
    if let Some(secs) = env_var("FEED_TIMEOUT_SECS")? {
        config = config.with_timeout(secs);
    }
    Ok(config)
}

async fn serve<S>(source: S, config: SearchConfig, addr: SocketAddr) -> Result<(), BoxError>
where
    S: FeedSource + Send + Sync + 'static,
{
    let stations = StationDirectory::lirr();
    let routes = RouteCatalog::lirr();
    info!(stations = stations.len(), routes = routes.len(), "loaded reference data");

    let service =
        ItineraryService::gtfs_realtime(source, Arc::new(stations), Arc::new(routes), config);
    let app = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Itinerary planner listening on http://{addr}");
    info!("  GET /health        - Health check");
    info!("  GET /api/stations  - Station names");
    info!("  GET /api/trains    - Trains between two stations");

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let search_config = search_config()?;
    let addr: SocketAddr =
        env_var("BIND_ADDR")?.unwrap_or(SocketAddr::from_str(DEFAULT_BIND_ADDR)?);

    info!(
        horizon_mins = search_config.horizon_mins(),
        timezone = %search_config.timezone,
        budget_ms = ?search_config.budget_ms,
        "search configuration"
    );

    match env_var::<String>("FEED_FILE")? {
        Some(path) => {
            info!(%path, "reading feed snapshots from disk");
            serve(FileFeed::new(path), search_config, addr).await
        }
        None => {
            let client = FeedClient::new(feed_config()?)?;
            info!(url = client.url(), "fetching live feed");
            serve(client, search_config, addr).await
        }
    }
}
