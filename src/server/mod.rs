//! Server initialization and routing

use crate::api;
use crate::authy::{AccessChecker, AuthyClient};
use crate::config::Config;
use crate::middleware::access::{require_access, AccessGate};
use crate::middleware::content_type::require_json;
use crate::middleware::rate_limit::{enforce_rate_limit, RateLimitState};
use crate::middleware::uuid_path::require_uuid_path;
use crate::migration;
use crate::repository::{
    AddressRepository, AddressRepositoryImpl, CountryRepository, CountryRepositoryImpl,
};
use anyhow::Result;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Required access level for user-facing address routes
const USER_ACCESS_LEVEL: u8 = 10;
/// Required access level for admin routes
const ADMIN_ACCESS_LEVEL: u8 = 5;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub address_repo: Arc<dyn AddressRepository>,
    pub country_repo: Arc<dyn CountryRepository>,
}

/// Run the server
pub async fn run(config: Config) -> Result<()> {
    // Create database connection pool
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    info!("Connected to database");

    migration::run_migrations(&db_pool).await?;

    let address_repo = Arc::new(AddressRepositoryImpl::new(db_pool.clone()));
    let country_repo = Arc::new(CountryRepositoryImpl::new(db_pool));
    let checker: Arc<dyn AccessChecker> = Arc::new(AuthyClient::new(&config.check_access));
    let rate_limit = RateLimitState::address_defaults(config.rate_limit.enabled);

    let state = AppState {
        config: Arc::new(config.clone()),
        address_repo,
        country_repo,
    };

    let app = build_router(state, checker, rate_limit);

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the HTTP router
///
/// The access checker and rate limiter are passed in separately from the
/// state so tests can substitute both without a live access-control
/// service.
pub fn build_router(
    state: AppState,
    checker: Arc<dyn AccessChecker>,
    rate_limit: RateLimitState,
) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_gate = AccessGate::new(checker.clone(), USER_ACCESS_LEVEL);
    let admin_gate = AccessGate::new(checker, ADMIN_ACCESS_LEVEL);

    let user_routes = Router::new()
        .route(
            "/address",
            get(api::address::list).post(api::address::create),
        )
        .route_layer(from_fn_with_state(user_gate.clone(), require_access));

    let single_routes = Router::new()
        .route(
            "/address/{address_id}",
            get(api::address::get_one)
                .delete(api::address::delete_one)
                .fallback(api::not_found),
        )
        .route_layer(from_fn_with_state(user_gate, require_access))
        // malformed ids belong to the catch-all, not the gate
        .route_layer(from_fn(require_uuid_path));

    let admin_routes = Router::new()
        .route("/address/admin/address", get(api::admin::list_all))
        .route("/address/admin/ratelimited", get(api::admin::rate_limited))
        .route_layer(from_fn_with_state(admin_gate, require_access));

    Router::new()
        .route("/address/status", get(api::status::system_running))
        .route("/address/countries", get(api::country::list))
        .merge(admin_routes)
        .merge(user_routes)
        .merge(single_routes)
        .fallback(api::not_found)
        .layer(from_fn_with_state(rate_limit, enforce_rate_limit))
        .layer(from_fn(require_json))
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
