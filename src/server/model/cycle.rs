//! Outcome types of the weekly maintenance run.

use chrono::NaiveDate;
use std::fmt;

/// Steps of the weekly maintenance pipeline in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeeklyStep {
    AggregateStats,
    PersonalRewards,
    GuildRewards,
    PromotionRelegation,
    EntryPlacement,
    PeriodicReset,
    WeekWindow,
}

impl WeeklyStep {
    /// The fixed execution order.
    pub const ORDER: [WeeklyStep; 7] = [
        WeeklyStep::AggregateStats,
        WeeklyStep::PersonalRewards,
        WeeklyStep::GuildRewards,
        WeeklyStep::PromotionRelegation,
        WeeklyStep::EntryPlacement,
        WeeklyStep::PeriodicReset,
        WeeklyStep::WeekWindow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WeeklyStep::AggregateStats => "aggregate_stats",
            WeeklyStep::PersonalRewards => "personal_rewards",
            WeeklyStep::GuildRewards => "guild_rewards",
            WeeklyStep::PromotionRelegation => "promotion_relegation",
            WeeklyStep::EntryPlacement => "entry_placement",
            WeeklyStep::PeriodicReset => "periodic_reset",
            WeeklyStep::WeekWindow => "week_window",
        }
    }
}

impl fmt::Display for WeeklyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts produced by one entry placement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementSummary {
    /// Members seated in an entry-tier league.
    pub placed: u64,
    /// Entry-tier leagues created because every existing one was full.
    pub leagues_created: u64,
    /// Members skipped because they have no category.
    pub skipped: u64,
}

/// Counts produced by one promotion/relegation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromotionSummary {
    pub categories_processed: u64,
    /// Categories with no current-week leagues or already processed this cycle.
    pub categories_skipped: u64,
    pub promoted: u64,
    pub relegated: u64,
    pub stayed: u64,
    pub rewards_issued: u64,
    pub leagues_created: u64,
    /// Malformed or empty leagues that were not reshuffled.
    pub leagues_skipped: u64,
}

/// What a completed step reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepDetail {
    Placement(PlacementSummary),
    Promotion(PromotionSummary),
    /// Number of leagues whose date range was moved to the current week.
    WeekWindow { leagues_updated: u64 },
    /// Free-form count reported by a collaborating subsystem's step.
    Processed { items: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Completed { attempts: u32, detail: StepDetail },
    /// No implementation was registered for the slot.
    NotRegistered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: WeeklyStep,
    pub status: StepStatus,
}

/// Result of one full weekly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub run_date: NaiveDate,
    pub steps: Vec<StepReport>,
}

impl CycleReport {
    /// Detail reported by `step`, if it ran.
    pub fn detail(&self, step: WeeklyStep) -> Option<&StepDetail> {
        self.steps
            .iter()
            .find(|report| report.step == step)
            .and_then(|report| match &report.status {
                StepStatus::Completed { detail, .. } => Some(detail),
                StepStatus::NotRegistered => None,
            })
    }
}
