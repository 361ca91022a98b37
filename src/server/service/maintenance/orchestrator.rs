//! Weekly orchestrator.
//!
//! Runs the maintenance steps in a fixed order. Each step commits its own work; a step
//! failure aborts the run and leaves earlier steps committed. Steps owned by other
//! subsystems (stats aggregation, personal and guild rewards, periodic resets) plug in
//! through `MaintenanceStep`; slots without an implementation are logged and skipped.

use chrono::NaiveDate;
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::DatabaseConnection;
use std::{collections::HashMap, sync::Arc, time::Duration};

use crate::server::{
    config::LeagueSettings,
    data::{mail::MailRepository, member::MemberRepository},
    error::AppError,
    model::cycle::{CycleReport, StepDetail, StepReport, StepStatus, WeeklyStep},
    service::{
        league::{
            calendar::WeekCalendarService, placement::EntryPlacementService,
            policy::TierPolicy, promotion::PromotionService,
        },
        maintenance::fault::{with_retry, SkipBudget, RETRY_BASE_DELAY},
    },
};

/// Inputs shared by every step of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContext {
    pub run_date: NaiveDate,
    /// Defective items a step may skip before it aborts.
    pub skip_limit: u32,
}

/// One slot of the weekly pipeline.
#[async_trait::async_trait]
pub trait MaintenanceStep: Send + Sync {
    async fn run(&self, ctx: &StepContext) -> Result<StepDetail, AppError>;
}

pub struct WeeklyOrchestrator {
    steps: HashMap<WeeklyStep, Arc<dyn MaintenanceStep>>,
    retry_limit: u32,
    retry_delay: Duration,
    skip_limit: u32,
}

impl WeeklyOrchestrator {
    /// Starts a builder with the league steps registered.
    ///
    /// Promotion/relegation, entry placement and the week window roll are registered
    /// against `db`. Collaborator slots start empty.
    pub fn builder(
        db: DatabaseConnection,
        policy: Arc<dyn TierPolicy>,
        settings: LeagueSettings,
    ) -> WeeklyOrchestratorBuilder {
        WeeklyOrchestratorBuilder {
            steps: HashMap::new(),
            retry_limit: settings.retry_limit,
            retry_delay: RETRY_BASE_DELAY,
            skip_limit: settings.skip_limit,
        }
        .with_step(
            WeeklyStep::PromotionRelegation,
            Arc::new(PromotionStep {
                db: db.clone(),
                policy,
                settings,
            }),
        )
        .with_step(
            WeeklyStep::EntryPlacement,
            Arc::new(PlacementStep {
                db: db.clone(),
                settings,
            }),
        )
        .with_step(WeeklyStep::WeekWindow, Arc::new(WeekWindowStep { db }))
    }

    /// Runs every registered step in order.
    ///
    /// # Arguments
    /// - `run_date` - Date the run is for, normally today
    ///
    /// # Returns
    /// - `Ok(CycleReport)` - Every step completed or had no implementation
    /// - `Err(AppError)` - The first failing step's error; later steps did not run
    pub async fn run(&self, run_date: NaiveDate) -> Result<CycleReport, AppError> {
        let ctx = StepContext {
            run_date,
            skip_limit: self.skip_limit,
        };
        let mut report = CycleReport {
            run_date,
            steps: Vec::with_capacity(WeeklyStep::ORDER.len()),
        };

        tracing::info!(%run_date, "Starting weekly maintenance run");

        for step in WeeklyStep::ORDER {
            let Some(handler) = self.steps.get(&step) else {
                tracing::info!(step = %step, "No implementation registered, skipping step");
                report.steps.push(StepReport {
                    step,
                    status: StepStatus::NotRegistered,
                });
                continue;
            };

            let handler = handler.as_ref();
            let ctx = &ctx;
            let (detail, attempts) =
                match with_retry(step.name(), self.retry_limit, self.retry_delay, move || {
                    handler.run(ctx)
                })
                .await
                {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::error!(step = %step, "Weekly maintenance step failed: {}", e);
                        return Err(e);
                    }
                };

            tracing::info!(step = %step, attempts, ?detail, "Step completed");
            report.steps.push(StepReport {
                step,
                status: StepStatus::Completed { attempts, detail },
            });
        }

        tracing::info!(%run_date, "Weekly maintenance run finished");

        Ok(report)
    }
}

pub struct WeeklyOrchestratorBuilder {
    steps: HashMap<WeeklyStep, Arc<dyn MaintenanceStep>>,
    retry_limit: u32,
    retry_delay: Duration,
    skip_limit: u32,
}

impl WeeklyOrchestratorBuilder {
    /// Registers `handler` for `step`, replacing any earlier registration.
    pub fn with_step(mut self, step: WeeklyStep, handler: Arc<dyn MaintenanceStep>) -> Self {
        self.steps.insert(step, handler);
        self
    }

    /// Sets the delay before the first retry of a transient failure.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn build(self) -> WeeklyOrchestrator {
        WeeklyOrchestrator {
            steps: self.steps,
            retry_limit: self.retry_limit,
            retry_delay: self.retry_delay,
            skip_limit: self.skip_limit,
        }
    }
}

struct PromotionStep {
    db: DatabaseConnection,
    policy: Arc<dyn TierPolicy>,
    settings: LeagueSettings,
}

#[async_trait::async_trait]
impl MaintenanceStep for PromotionStep {
    async fn run(&self, ctx: &StepContext) -> Result<StepDetail, AppError> {
        let members = MemberRepository::new(&self.db);
        let rewards = MailRepository::new(&self.db);
        let mut skips = SkipBudget::new(WeeklyStep::PromotionRelegation.name(), ctx.skip_limit);
        let mut rng = StdRng::from_os_rng();

        let summary = PromotionService::new(
            &self.db,
            self.policy.as_ref(),
            &members,
            &rewards,
            self.settings,
        )
        .run_cycle(ctx.run_date, &mut skips, &mut rng)
        .await?;

        Ok(StepDetail::Promotion(summary))
    }
}

struct PlacementStep {
    db: DatabaseConnection,
    settings: LeagueSettings,
}

#[async_trait::async_trait]
impl MaintenanceStep for PlacementStep {
    async fn run(&self, ctx: &StepContext) -> Result<StepDetail, AppError> {
        let members = MemberRepository::new(&self.db);
        let mut skips = SkipBudget::new(WeeklyStep::EntryPlacement.name(), ctx.skip_limit);

        let summary = EntryPlacementService::new(&self.db, &members, self.settings)
            .place_new_members(ctx.run_date, &mut skips)
            .await?;

        Ok(StepDetail::Placement(summary))
    }
}

struct WeekWindowStep {
    db: DatabaseConnection,
}

#[async_trait::async_trait]
impl MaintenanceStep for WeekWindowStep {
    async fn run(&self, ctx: &StepContext) -> Result<StepDetail, AppError> {
        let leagues_updated = WeekCalendarService::new(&self.db)
            .roll_week_window(ctx.run_date)
            .await?;

        Ok(StepDetail::WeekWindow { leagues_updated })
    }
}
