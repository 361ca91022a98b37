//! Entry placement step.
//!
//! Seats members who have no ranking in the active season into entry-tier leagues of their
//! category's current league-week. Existing entry leagues of that week are filled
//! least-loaded first up to the entry capacity; when all are full a new entry league is
//! opened at the same week.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::BTreeMap;

use crate::server::{
    config::LeagueSettings,
    data::{league::LeagueRepository, ranking::RankingRepository},
    error::AppError,
    model::{
        category::Category,
        cycle::PlacementSummary,
        league::{CreateLeagueParams, League},
        ranking::CreateRankingParams,
        season::Season,
        tier::Tier,
    },
    service::{
        collaborator::MemberStore, league::capacity::CapacityQueue,
        maintenance::fault::SkipBudget, season::SeasonService,
    },
    util::week::WeekWindow,
};

/// Bin an entry-tier member is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySlot {
    Existing(i32),
    /// Index of a league that still has to be created.
    New(usize),
}

/// In-memory outcome of placing one category's members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPlan {
    /// `(slot, member_id)` in arrival order.
    pub assignments: Vec<(EntrySlot, i32)>,
    /// Final member count of every slot, existing leagues first.
    pub loads: Vec<(EntrySlot, u32)>,
    pub new_leagues: usize,
}

/// Assigns members to entry leagues without touching the database.
///
/// # Arguments
/// - `existing` - `(league_id, current_members)` of the category's entry leagues
/// - `member_ids` - Members to seat, in arrival order
/// - `capacity` - Hard cap of an entry league
pub fn plan_entry_placement(existing: &[(i32, u32)], member_ids: &[i32], capacity: u32) -> EntryPlan {
    let mut queue = CapacityQueue::new();
    for (league_id, current) in existing {
        queue.register(EntrySlot::Existing(*league_id), *current, capacity);
    }

    let mut new_leagues = 0;
    let mut assignments = Vec::with_capacity(member_ids.len());
    for member_id in member_ids {
        let slot = match queue.place() {
            Some(slot) => slot,
            None => {
                let slot = EntrySlot::New(new_leagues);
                new_leagues += 1;
                queue.register(slot, 1, capacity);
                slot
            }
        };
        assignments.push((slot, *member_id));
    }

    EntryPlan {
        assignments,
        loads: queue.loads(),
        new_leagues,
    }
}

pub struct EntryPlacementService<'a> {
    db: &'a DatabaseConnection,
    members: &'a dyn MemberStore,
    settings: LeagueSettings,
}

impl<'a> EntryPlacementService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        members: &'a dyn MemberStore,
        settings: LeagueSettings,
    ) -> Self {
        Self {
            db,
            members,
            settings,
        }
    }

    /// Places one batch of newly eligible members.
    ///
    /// Members without a category are skipped against `skips`. Each category commits in
    /// its own transaction, so a failure leaves earlier categories placed.
    ///
    /// # Arguments
    /// - `today` - Run date, used to resolve the season and the week window
    /// - `skips` - Skip budget of the running step
    ///
    /// # Returns
    /// - `Ok(PlacementSummary)` - Counts of placed, skipped members and new leagues
    /// - `Err(AppError::LeagueErr(NoActiveSeason))` - No season is active; nothing written
    /// - `Err(AppError::LeagueErr(SkipLimitExceeded))` - Too many members lack a category
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn place_new_members(
        &self,
        today: NaiveDate,
        skips: &mut SkipBudget,
    ) -> Result<PlacementSummary, AppError> {
        let season = SeasonService::new(self.db).require_active(today).await?;

        let candidates = self
            .members
            .find_unranked(season.id, self.settings.placement_batch_size)
            .await?;

        let mut summary = PlacementSummary::default();
        let mut by_category: BTreeMap<Category, Vec<i32>> = BTreeMap::new();
        for member in candidates {
            match member.category {
                Some(category) => by_category.entry(category).or_default().push(member.id),
                None => {
                    summary.skipped += 1;
                    skips.record(format!("member {} has no category", member.id))?;
                }
            }
        }

        let window = WeekWindow::containing(today);
        for (category, member_ids) in by_category {
            let (placed, created) = self
                .place_category(&season, category, &member_ids, window)
                .await?;
            summary.placed += placed;
            summary.leagues_created += created;
        }

        tracing::info!(
            season_id = season.id,
            placed = summary.placed,
            leagues_created = summary.leagues_created,
            skipped = summary.skipped,
            "Entry placement finished"
        );

        Ok(summary)
    }

    async fn place_category(
        &self,
        season: &Season,
        category: Category,
        member_ids: &[i32],
        window: WeekWindow,
    ) -> Result<(u64, u64), AppError> {
        let capacity = self.settings.entry_league_capacity;
        let txn = self.db.begin().await?;
        let league_repo = LeagueRepository::new(&txn);
        let ranking_repo = RankingRepository::new(&txn);

        let week = league_repo
            .get_current_week(season.id, category)
            .await?
            .unwrap_or(1);
        let existing = league_repo
            .get_by_tier(season.id, category, Tier::ENTRY, week)
            .await?;
        let seeds: Vec<(i32, u32)> = existing
            .iter()
            .map(|league| (league.id, league.current_members))
            .collect();

        let plan = plan_entry_placement(&seeds, member_ids, capacity);

        let mut new_league_ids = Vec::with_capacity(plan.new_leagues);
        for (slot, load) in &plan.loads {
            match slot {
                EntrySlot::Existing(league_id) => {
                    let changed = existing
                        .iter()
                        .any(|league| league.id == *league_id && league.current_members != *load);
                    if changed {
                        league_repo.set_current_members(*league_id, *load).await?;
                    }
                }
                EntrySlot::New(index) => {
                    let league = league_repo
                        .create(CreateLeagueParams {
                            season_id: season.id,
                            category,
                            tier: Tier::ENTRY,
                            name: League::display_name(
                                category,
                                Tier::ENTRY,
                                existing.len() + index + 1,
                            ),
                            week,
                            current_members: *load,
                            capacity,
                            window,
                        })
                        .await?;
                    new_league_ids.push(league.id);
                }
            }
        }

        let rankings: Vec<CreateRankingParams> = plan
            .assignments
            .iter()
            .map(|(slot, member_id)| CreateRankingParams {
                league_id: match slot {
                    EntrySlot::Existing(league_id) => *league_id,
                    EntrySlot::New(index) => new_league_ids[*index],
                },
                member_id: *member_id,
                tier: Tier::ENTRY,
            })
            .collect();
        let placed = ranking_repo.create_many(&rankings).await?;

        txn.commit().await?;

        tracing::debug!(
            season_id = season.id,
            category = %category,
            placed,
            leagues_created = plan.new_leagues,
            "Placed members into entry leagues"
        );

        Ok((placed, plan.new_leagues as u64))
    }
}
