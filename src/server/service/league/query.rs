//! Read-only league queries behind the HTTP routes.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{league::LeagueRepository, member::MemberRepository, ranking::RankingRepository},
    error::{league::LeagueError, AppError},
    model::{
        category::Category,
        league::{GetLeaguesParam, League, PaginatedLeagues},
        ranking::{MemberStanding, RankedMember},
        tier::Tier,
    },
    service::season::SeasonService,
};

pub struct LeagueQueryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueQueryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the active season's leagues, optionally filtered by category and tier.
    ///
    /// # Arguments
    /// - `today` - Date used to resolve the active season
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Leagues per page
    ///
    /// # Returns
    /// - `Ok(PaginatedLeagues)` - The requested page
    /// - `Err(AppError::LeagueErr(NoActiveSeason))` - No season is active
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        today: NaiveDate,
        category: Option<Category>,
        tier: Option<Tier>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedLeagues, AppError> {
        let season = SeasonService::new(self.db).require_active(today).await?;

        let leagues = LeagueRepository::new(self.db)
            .get_paginated(GetLeaguesParam {
                season_id: season.id,
                category,
                tier,
                page,
                per_page,
            })
            .await?;

        Ok(leagues)
    }

    /// Gets one league by ID.
    ///
    /// # Returns
    /// - `Ok(League)` - The league
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with this ID
    pub async fn get(&self, league_id: i32) -> Result<League, AppError> {
        LeagueRepository::new(self.db)
            .get_by_id(league_id)
            .await?
            .ok_or_else(|| LeagueError::LeagueNotFound(league_id).into())
    }

    /// Gets a league's members sorted by score, highest first.
    ///
    /// # Returns
    /// - `Ok(Vec<RankedMember>)` - Leaderboard with 1-based ranks
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with this ID
    pub async fn leaderboard(&self, league_id: i32) -> Result<Vec<RankedMember>, AppError> {
        let league = self.get(league_id).await?;

        let members = RankingRepository::new(self.db)
            .get_leaderboard(league.id)
            .await?;

        Ok(members)
    }

    /// Gets a member's current league and position in the active season.
    ///
    /// # Returns
    /// - `Ok(MemberStanding)` - League, ranking and 1-based rank
    /// - `Err(AppError::LeagueErr(MemberNotFound))` - No member with this ID
    /// - `Err(AppError::NotFound)` - The member has no league this season
    /// - `Err(AppError::LeagueErr(NoActiveSeason))` - No season is active
    pub async fn member_standing(
        &self,
        member_id: i32,
        today: NaiveDate,
    ) -> Result<MemberStanding, AppError> {
        let season = SeasonService::new(self.db).require_active(today).await?;

        MemberRepository::new(self.db)
            .get_by_id(member_id)
            .await?
            .ok_or(LeagueError::MemberNotFound(member_id))?;

        let ranking_repo = RankingRepository::new(self.db);
        let ranking = ranking_repo
            .find_for_member(member_id, season.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Member {} has no league this season", member_id))
            })?;

        let league = self.get(ranking.league_id).await?;
        let rank = ranking_repo
            .get_leaderboard(league.id)
            .await?
            .iter()
            .find(|entry| entry.member_id == member_id)
            .map(|entry| entry.rank)
            .unwrap_or_default();

        Ok(MemberStanding {
            league,
            ranking,
            rank,
        })
    }
}
