//! Promotion/relegation step.
//!
//! For each category every league is ranked, every member's next tier is taken from the
//! tier policy, the leagues and rankings are torn down, and new leagues of roughly the
//! target size are built from the per-tier pools at the next league-week. Malformed leagues
//! keep their members and are carried forward to the next week unchanged.
//!
//! Promotion rewards and personal-best updates happen before the teardown transaction.
//! The teardown, the rebuild and the cycle marker commit together, so a category is either
//! fully reshuffled for the ISO week or left as it was.

use chrono::NaiveDate;
use rand::{seq::SliceRandom, Rng};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::{BTreeMap, HashMap};

use crate::server::{
    config::LeagueSettings,
    data::{league::LeagueRepository, league_cycle::LeagueCycleRepository, ranking::RankingRepository},
    error::AppError,
    model::{
        category::Category,
        cycle::PromotionSummary,
        league::{CreateLeagueParams, League},
        member::Member,
        ranking::{CreateRankingParams, Ranking},
        season::Season,
        tier::Tier,
    },
    service::{
        collaborator::{MemberStore, RewardIssuer},
        league::{capacity::CapacityQueue, policy::TierPolicy},
        maintenance::fault::SkipBudget,
        season::SeasonService,
    },
    util::week::{cycle_key, WeekWindow},
};

/// Next tier of one member after the weekly ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub member_id: i32,
    pub from: Tier,
    pub to: Tier,
    /// Reward amount when `to` is a promotion above the member's personal best.
    pub reward: Option<u32>,
}

/// Number of leagues a pool of `pool_size` members is split into.
///
/// `max(1, round(pool_size / target))`, with halves rounded up.
pub fn league_count(pool_size: usize, target: u32) -> usize {
    let count = (pool_size as f64 / target.max(1) as f64).round() as usize;
    count.max(1)
}

/// Deals `pool` round-robin into `count` groups whose sizes differ by at most one.
pub fn distribute<T>(pool: Vec<T>, count: usize) -> Vec<Vec<T>> {
    let count = count.max(1);
    let per_group = pool.len().div_ceil(count) as u32;
    let mut queue = CapacityQueue::new();
    for index in 0..count {
        queue.register(index, 0, per_group.max(1));
    }

    let mut groups: Vec<Vec<T>> = (0..count).map(|_| Vec::new()).collect();
    for item in pool {
        // Total capacity is at least the pool size, so the queue never runs dry.
        let index = queue.place().unwrap_or(0);
        groups[index].push(item);
    }
    groups
}

/// Ranks one league and computes each member's next tier.
///
/// Rankings must be in store order; equal scores keep that order.
///
/// # Returns
/// - `Ok(Vec<Transition>)` - One transition per ranking, best first
/// - `Err(String)` - The league is malformed; it keeps its members and tier unranked
pub fn evaluate_league(
    league: &League,
    mut rankings: Vec<Ranking>,
    members: &HashMap<i32, Member>,
    policy: &dyn TierPolicy,
    is_final_week: bool,
) -> Result<Vec<Transition>, String> {
    for ranking in &rankings {
        let member = members
            .get(&ranking.member_id)
            .ok_or_else(|| format!("member {} not found", ranking.member_id))?;
        if member.category != Some(league.category) {
            return Err(format!(
                "member {} is not in category {}",
                member.id, league.category
            ));
        }
    }

    rankings.sort_by(|a, b| b.score.cmp(&a.score));

    let size = rankings.len();
    Ok(rankings
        .iter()
        .enumerate()
        .filter_map(|(position, ranking)| {
            let member = members.get(&ranking.member_id)?;
            let percentile = (position + 1) as f64 / size as f64;
            let to = policy.next_tier(league.tier, percentile, is_final_week);
            let reward = (to > league.tier && to > member.personal_best_tier)
                .then(|| policy.promotion_reward(to));

            Some(Transition {
                member_id: ranking.member_id,
                from: league.tier,
                to,
                reward,
            })
        })
        .collect())
}

pub struct PromotionService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a dyn TierPolicy,
    members: &'a dyn MemberStore,
    rewards: &'a dyn RewardIssuer,
    settings: LeagueSettings,
}

impl<'a> PromotionService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        policy: &'a dyn TierPolicy,
        members: &'a dyn MemberStore,
        rewards: &'a dyn RewardIssuer,
        settings: LeagueSettings,
    ) -> Self {
        Self {
            db,
            policy,
            members,
            rewards,
            settings,
        }
    }

    /// Runs the weekly promotion/relegation cycle for every category.
    ///
    /// # Arguments
    /// - `today` - Run date; resolves the season, the cycle key and the new week window
    /// - `skips` - Skip budget of the running step
    /// - `rng` - Shuffles each tier pool before it is split into leagues
    ///
    /// # Returns
    /// - `Ok(PromotionSummary)` - Counts across all categories
    /// - `Err(AppError::LeagueErr(NoActiveSeason))` - No season is active; nothing written
    /// - `Err(AppError::LeagueErr(SkipLimitExceeded))` - Too many malformed leagues
    /// - `Err(AppError::DbErr)` - Database error; categories already committed stay committed
    pub async fn run_cycle<R: Rng + Send>(
        &self,
        today: NaiveDate,
        skips: &mut SkipBudget,
        rng: &mut R,
    ) -> Result<PromotionSummary, AppError> {
        let season = SeasonService::new(self.db).require_active(today).await?;
        let cycle_key = cycle_key(today);
        let window = WeekWindow::containing(today);

        let mut summary = PromotionSummary::default();
        for category in Category::ALL {
            self.process_category(&season, category, &cycle_key, window, skips, rng, &mut summary)
                .await?;
        }

        tracing::info!(
            season_id = season.id,
            cycle_key = %cycle_key,
            categories = summary.categories_processed,
            promoted = summary.promoted,
            relegated = summary.relegated,
            stayed = summary.stayed,
            rewards = summary.rewards_issued,
            leagues_created = summary.leagues_created,
            leagues_skipped = summary.leagues_skipped,
            "Promotion cycle finished"
        );

        Ok(summary)
    }

    #[allow(clippy::too_many_arguments)]
    async fn process_category<R: Rng + Send>(
        &self,
        season: &Season,
        category: Category,
        cycle_key: &str,
        window: WeekWindow,
        skips: &mut SkipBudget,
        rng: &mut R,
        summary: &mut PromotionSummary,
    ) -> Result<(), AppError> {
        if LeagueCycleRepository::new(self.db)
            .exists(season.id, category, cycle_key)
            .await?
        {
            tracing::info!(category = %category, cycle_key, "Cycle already committed, skipping");
            summary.categories_skipped += 1;
            return Ok(());
        }

        let league_repo = LeagueRepository::new(self.db);
        let Some(week) = league_repo.get_current_week(season.id, category).await? else {
            // Leagues placed later in this ISO week must wait for next week's cycle.
            LeagueCycleRepository::new(self.db)
                .create(season.id, category, cycle_key, 0)
                .await?;
            summary.categories_skipped += 1;
            return Ok(());
        };

        let leagues = league_repo.get_by_category(season.id, category).await?;
        let league_ids: Vec<i32> = leagues.iter().map(|league| league.id).collect();
        let rankings = RankingRepository::new(self.db)
            .get_by_league_ids(&league_ids)
            .await?;

        let member_ids: Vec<i32> = rankings.iter().map(|ranking| ranking.member_id).collect();
        let members: HashMap<i32, Member> = self
            .members
            .find_by_ids(&member_ids)
            .await?
            .into_iter()
            .map(|member| (member.id, member))
            .collect();

        let mut by_league: HashMap<i32, Vec<Ranking>> = HashMap::new();
        for ranking in rankings {
            by_league.entry(ranking.league_id).or_default().push(ranking);
        }

        let is_final_week = self.policy.is_final_week(week);
        let mut teardown = Vec::with_capacity(leagues.len());
        let mut carried = Vec::new();
        let mut transitions = Vec::new();
        for league in &leagues {
            let rankings = by_league.remove(&league.id).unwrap_or_default();
            if rankings.is_empty() {
                summary.leagues_skipped += 1;
                teardown.push(league.id);
                skips.record(format!("league {} has no rankings", league.id))?;
                continue;
            }

            match evaluate_league(league, rankings, &members, self.policy, is_final_week) {
                Ok(league_transitions) => {
                    teardown.push(league.id);
                    transitions.extend(league_transitions);
                }
                Err(defect) => {
                    summary.leagues_skipped += 1;
                    carried.push(league.id);
                    skips.record(format!("league {}: {}", league.id, defect))?;
                }
            }
        }

        for transition in &transitions {
            match transition.to.cmp(&transition.from) {
                std::cmp::Ordering::Greater => summary.promoted += 1,
                std::cmp::Ordering::Less => summary.relegated += 1,
                std::cmp::Ordering::Equal => summary.stayed += 1,
            }
            if let Some(amount) = transition.reward {
                summary.rewards_issued += self.reward(transition, amount).await?;
            }
        }

        let mut pools: BTreeMap<Tier, Vec<i32>> = BTreeMap::new();
        for transition in &transitions {
            pools.entry(transition.to).or_default().push(transition.member_id);
        }

        let next_week = if is_final_week { 1 } else { week + 1 };
        let txn = self.db.begin().await?;
        let league_repo = LeagueRepository::new(&txn);
        let ranking_repo = RankingRepository::new(&txn);

        ranking_repo.delete_by_league_ids(&teardown).await?;
        league_repo.delete_by_ids(&teardown).await?;
        league_repo.carry_forward(&carried, next_week, window).await?;

        for (tier, mut pool) in pools {
            pool.shuffle(rng);
            let (count, capacity) = self.sizing(tier, pool.len());

            for (index, group) in distribute(pool, count).into_iter().enumerate() {
                let league = league_repo
                    .create(CreateLeagueParams {
                        season_id: season.id,
                        category,
                        tier,
                        name: League::display_name(category, tier, index + 1),
                        week: next_week,
                        current_members: group.len() as u32,
                        capacity,
                        window,
                    })
                    .await?;
                let seats: Vec<CreateRankingParams> = group
                    .iter()
                    .map(|member_id| CreateRankingParams {
                        league_id: league.id,
                        member_id: *member_id,
                        tier,
                    })
                    .collect();
                ranking_repo.create_many(&seats).await?;
                summary.leagues_created += 1;
            }
        }

        LeagueCycleRepository::new(&txn)
            .create(season.id, category, cycle_key, week)
            .await?;
        txn.commit().await?;

        summary.categories_processed += 1;
        tracing::debug!(
            category = %category,
            week,
            next_week,
            leagues_torn_down = teardown.len(),
            leagues_carried = carried.len(),
            "Category reshuffled"
        );

        Ok(())
    }

    /// League count and capacity for a tier pool. Entry-tier leagues keep their hard cap.
    fn sizing(&self, tier: Tier, pool_size: usize) -> (usize, u32) {
        let count = league_count(pool_size, self.settings.target_league_size);
        if tier == Tier::ENTRY {
            let capacity = self.settings.entry_league_capacity;
            let minimum = pool_size.div_ceil(capacity.max(1) as usize);
            (count.max(minimum), capacity)
        } else {
            (count, self.settings.target_league_size)
        }
    }

    /// Issues the reward, then raises the personal best.
    ///
    /// A failed message leaves the personal best where it was and aborts the category
    /// before teardown, so the next run of the cycle issues the reward again.
    async fn reward(&self, transition: &Transition, amount: u32) -> Result<u64, AppError> {
        if let Err(e) = self
            .rewards
            .create_reward_message(transition.member_id, transition.to, amount)
            .await
        {
            tracing::error!(
                member_id = transition.member_id,
                tier = %transition.to,
                "Failed to issue promotion reward: {}",
                e
            );
            return Err(e.into());
        }

        self.members
            .raise_personal_best(transition.member_id, transition.to)
            .await?;

        Ok(1)
    }
}
