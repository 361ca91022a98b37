use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError, model::cycle::CycleReport,
    service::maintenance::orchestrator::WeeklyOrchestrator,
};

/// Starts the weekly maintenance scheduler.
///
/// The job fires on `cron` (seconds-resolution, six fields) and runs the orchestrator for
/// the current UTC date. A run that is still in progress when the next trigger fires is
/// not overlapped; the new trigger is dropped with a warning.
///
/// # Arguments
/// - `orchestrator` - The configured weekly pipeline
/// - `cron` - Schedule expression, e.g. `0 0 0 * * Mon`
pub async fn start_scheduler(
    orchestrator: Arc<WeeklyOrchestrator>,
    cron: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;
    let guard = Arc::new(Mutex::new(()));

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let orchestrator = orchestrator.clone();
        let guard = guard.clone();

        Box::pin(async move {
            run_weekly_cycle(&orchestrator, &guard, Utc::now().date_naive()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(cron, "Weekly league scheduler started");

    Ok(scheduler)
}

/// Runs one weekly cycle unless another run holds `guard`.
///
/// # Returns
/// - `Some(CycleReport)` - The run completed
/// - `None` - A run was already in progress, or the run failed (the error is logged)
pub async fn run_weekly_cycle(
    orchestrator: &WeeklyOrchestrator,
    guard: &Mutex<()>,
    run_date: NaiveDate,
) -> Option<CycleReport> {
    let Ok(_running) = guard.try_lock() else {
        tracing::warn!(%run_date, "Weekly cycle still running, skipping this trigger");
        return None;
    };

    match orchestrator.run(run_date).await {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::error!(%run_date, "Weekly cycle failed: {}", e);
            None
        }
    }
}
