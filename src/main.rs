mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config, error::AppError, router, scheduler::weekly_cycle,
    service::maintenance::orchestrator::WeeklyOrchestrator, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let policy = startup::load_tier_policy(&config)?;

    let orchestrator = Arc::new(
        WeeklyOrchestrator::builder(db.clone(), policy, config.league).build(),
    );
    let _scheduler =
        weekly_cycle::start_scheduler(orchestrator, &config.weekly_cycle_cron).await?;

    let app = router::router().with_state(AppState::new(db));
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!(addr = %config.listen_addr, "Serving league queries");

    axum::serve(listener, app).await?;

    Ok(())
}
