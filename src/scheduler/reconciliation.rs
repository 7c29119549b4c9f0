use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::reconciliation::ReconciliationService,
    util::clock::SystemClock,
};

/// Starts the reservation reconciliation scheduler
///
/// The scheduler runs at a fixed interval and, each tick:
/// - Deactivates rentals whose window has ended
/// - Reactivates rentals whose window is in effect
/// - Expires pending requests whose check-in date has passed
/// - Sends upcoming-expiry reminders to tenants
///
/// Ticks are single-flight: if a run is still executing when the next tick
/// fires, the tick is skipped rather than run concurrently. A failed run is
/// logged and retried on the next tick.
///
/// # Arguments
/// - `db`: Database connection
/// - `interval_secs`: Seconds between runs
/// - `notice_days`: Lookahead window (days) for expiry reminders
///
/// # Returns
/// - `Ok(JobScheduler)`: Handle used to shut the scheduler down
/// - `Err(AppError)`: Scheduler setup failed
pub async fn start_scheduler(
    db: DatabaseConnection,
    interval_secs: u64,
    notice_days: i64,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let running = Arc::new(AtomicBool::new(false));

    let job = Job::new_repeated_async(Duration::from_secs(interval_secs), move |_uuid, _lock| {
        let db = job_db.clone();
        let running = running.clone();

        Box::pin(async move {
            if running
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                tracing::warn!("Previous reconciliation run still in progress, skipping tick");
                return;
            }

            let clock = SystemClock;
            let service = ReconciliationService::new(&db, &clock, notice_days);

            if let Err(e) = service.run().await {
                tracing::error!("Error during reconciliation run: {}", e);
            }

            running.store(false, Ordering::SeqCst);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Reconciliation scheduler started (every {}s, {} day notice window)",
        interval_secs,
        notice_days
    );

    Ok(scheduler)
}
