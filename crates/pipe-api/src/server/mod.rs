//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pipe_cache::{RedisCounterStore, RedisPool, RedisPoolConfig};
use pipe_common::{AppConfig, AppError};
use pipe_db::{
    create_pool, PgAggregateSource, PgLivecommentRepository, PgLivestreamRepository,
    PgReactionRepository, PgThemeRepository, PgTipRepository, PgUserRepository,
};
use pipe_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = pipe_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending schema migrations
    pipe_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool.clone());
    info!("Redis connection established");

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let livestream_repo = Arc::new(PgLivestreamRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let tip_repo = Arc::new(PgTipRepository::new(pool.clone()));
    let livecomment_repo = Arc::new(PgLivecommentRepository::new(pool.clone()));
    let theme_repo = Arc::new(PgThemeRepository::new(pool.clone()));

    // Create the dual-store seams
    let counter_store = Arc::new(RedisCounterStore::new(redis_pool));
    let aggregate_source = Arc::new(PgAggregateSource::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(shared_redis)
        .user_repo(user_repo)
        .livestream_repo(livestream_repo)
        .reaction_repo(reaction_repo)
        .tip_repo(tip_repo)
        .livecomment_repo(livecomment_repo)
        .theme_repo(theme_repo)
        .counter_store(counter_store)
        .aggregate_source(aggregate_source)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
