mod observability;

pub mod utility;

pub use prescripto_primitives::error::ApiError;

use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::migrations::run_migrations;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, load_env};
use eyre::Report;
use prescripto_core::app_state::AppState;
use prescripto_primitives::models::app_config::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting Prescripto API...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. bring the schema up to date
    run_migrations(&pool)?;

    // 6. build application state
    let state = AppState::new(pool, config)?;

    if state.razorpay.is_none() {
        info!("Payments disabled: Razorpay is not configured");
    }

    // 7. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 8. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 9. start HTTP server
    serve(app).await?;

    info!("Prescripto API shut down gracefully");
    Ok(())
}
