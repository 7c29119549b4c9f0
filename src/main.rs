use tracing_subscriber::EnvFilter;

use rentboard::{config::Config, error::AppError, scheduler::reconciliation, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting rentboard");

    // Start the reservation reconciliation scheduler
    let mut scheduler = reconciliation::start_scheduler(
        db.clone(),
        config.reconcile_interval_secs,
        config.expiry_notice_days,
    )
    .await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to listen for shutdown: {}", e)))?;

    tracing::info!("Shutdown signal received, stopping scheduler");

    scheduler.shutdown().await?;

    Ok(())
}
