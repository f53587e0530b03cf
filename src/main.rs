use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bookgate::adapters::auth::JwtSessionValidator;
use bookgate::adapters::http::{purchase_router, PurchaseAppState};
use bookgate::adapters::payment::SimulatedGateway;
use bookgate::adapters::postgres::{PostgresPurchaseReader, PostgresPurchaseRepository};
use bookgate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load and validate configuration first
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bookgate v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    info!("Connecting to {}", config.database.redacted_url());
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;
    info!("Database pool initialized");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    // Wire the adapters behind their ports
    let state = PurchaseAppState {
        repository: Arc::new(PostgresPurchaseRepository::new(pool.clone())),
        reader: Arc::new(PostgresPurchaseReader::new(pool)),
        gateway: Arc::new(SimulatedGateway::new(&config.payment)),
        session_validator: Arc::new(JwtSessionValidator::new(&config.auth)),
        ebook_title: config.product.ebook_title.clone(),
    };

    // Build router with the shared middleware stack
    let app = purchase_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config
        .server
        .socket_addr()
        .context("invalid bind address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// CORS restricted to the configured storefront origins; permissive when
/// none are configured (local development).
fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}
