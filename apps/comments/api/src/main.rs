use axum_helpers::server::{cors_layer, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::RetryConfig;
use database::postgres::connect_from_config_with_retry;
use domain_comments::PgCommentRepository;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation, so startup errors get the report format
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_from_config_with_retry(
        config.database.clone(),
        Some(RetryConfig::new().with_max_retries(5)),
    )
    .await
    .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let state = AppState {
        config,
        comments: PgCommentRepository::new(db),
    };

    let cors = state
        .config
        .cors_allowed_origin
        .as_deref()
        .map(cors_layer)
        .transpose()?;

    // - /api/v1/comments: comment CRUD
    // - /health: liveness with app name/version
    // - /ready: database ping
    let app = create_router::<openapi::ApiDoc>(api::routes(&state), cors)
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        request_timeout = ?state.config.request_timeout,
        "Starting comments API"
    );

    let server = state.config.server.clone();
    let db = state.comments.db().clone();

    create_production_app(app, &server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(()) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Comments API shutdown complete");
    Ok(())
}
