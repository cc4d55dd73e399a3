//! decision-matrix HTTP server binary.
//!
//! Loads configuration from the environment, connects to PostgreSQL, applies
//! migrations, and serves the results and ratings APIs.

use std::sync::Arc;

use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use decision_matrix::adapters::http::{
    ratings_routes, results_routes, RatingsAppState, ResultsAppState,
};
use decision_matrix::adapters::postgres::{
    PostgresAlternativeReader, PostgresAnalysisAccessChecker, PostgresCriterionReader,
    PostgresRatingReader, PostgresRatingWriter,
};
use decision_matrix::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.server);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let access_checker = Arc::new(PostgresAnalysisAccessChecker::new(pool.clone()));
    let alternative_reader = Arc::new(PostgresAlternativeReader::new(pool.clone()));
    let criterion_reader = Arc::new(PostgresCriterionReader::new(pool.clone()));

    let results_state = ResultsAppState::new(
        access_checker.clone(),
        alternative_reader.clone(),
        criterion_reader.clone(),
        Arc::new(PostgresRatingReader::new(pool.clone())),
    );
    let ratings_state = RatingsAppState::new(
        access_checker,
        alternative_reader,
        criterion_reader,
        Arc::new(PostgresRatingWriter::new(pool)),
    );

    let app = results_routes(results_state)
        .merge(ratings_routes(ratings_state))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "decision-matrix listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
