//! League data repository for database operations.
//!
//! Provides the `LeagueRepository` for creating, listing, re-dating and tearing down
//! leagues, with conversion to the `League` domain model at the repository boundary.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        category::Category,
        league::{CreateLeagueParams, GetLeaguesParam, League, PaginatedLeagues},
        tier::Tier,
    },
    util::week::WeekWindow,
};

pub struct LeagueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueRepository<'a, C> {
    /// Creates a new LeagueRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a league and returns it as a domain model.
    ///
    /// # Arguments
    /// - `params` - Season, category, tier, naming, counters and week window
    ///
    /// # Returns
    /// - `Ok(League)` - The created league
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateLeagueParams) -> Result<League, DbErr> {
        let league = entity::league::ActiveModel {
            season_id: ActiveValue::Set(params.season_id),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            tier: ActiveValue::Set(params.tier.ordinal()),
            name: ActiveValue::Set(params.name),
            week: ActiveValue::Set(params.week),
            current_members: ActiveValue::Set(params.current_members as i32),
            capacity: ActiveValue::Set(params.capacity as i32),
            start_date: ActiveValue::Set(params.window.start),
            end_date: ActiveValue::Set(params.window.end),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        League::from_entity(league)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<League>, DbErr> {
        entity::prelude::League::find_by_id(id)
            .one(self.db)
            .await?
            .map(League::from_entity)
            .transpose()
    }

    /// Gets the leagues of one tier in a season's category for one league-week, in creation order.
    pub async fn get_by_tier(
        &self,
        season_id: i32,
        category: Category,
        tier: Tier,
        week: i32,
    ) -> Result<Vec<League>, DbErr> {
        entity::prelude::League::find()
            .filter(entity::league::Column::SeasonId.eq(season_id))
            .filter(entity::league::Column::Category.eq(category.as_str()))
            .filter(entity::league::Column::Tier.eq(tier.ordinal()))
            .filter(entity::league::Column::Week.eq(week))
            .order_by_asc(entity::league::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(League::from_entity)
            .collect()
    }

    /// League-week of the category's most recently created league.
    ///
    /// Promotion rebuilds every league of a category at the next week, so the newest
    /// league always carries the category's current week, even after a final-week reset.
    ///
    /// # Returns
    /// - `Ok(Some(week))` - The current week of the category
    /// - `Ok(None)` - The category has no leagues yet
    /// - `Err(DbErr)` - Database error
    pub async fn get_current_week(
        &self,
        season_id: i32,
        category: Category,
    ) -> Result<Option<i32>, DbErr> {
        let latest = entity::prelude::League::find()
            .filter(entity::league::Column::SeasonId.eq(season_id))
            .filter(entity::league::Column::Category.eq(category.as_str()))
            .order_by_desc(entity::league::Column::Id)
            .one(self.db)
            .await?;

        Ok(latest.map(|league| league.week))
    }

    /// Gets every league of a season's category, ordered by tier then ID.
    pub async fn get_by_category(
        &self,
        season_id: i32,
        category: Category,
    ) -> Result<Vec<League>, DbErr> {
        entity::prelude::League::find()
            .filter(entity::league::Column::SeasonId.eq(season_id))
            .filter(entity::league::Column::Category.eq(category.as_str()))
            .order_by_asc(entity::league::Column::Tier)
            .order_by_asc(entity::league::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(League::from_entity)
            .collect()
    }

    /// Moves the given leagues, with their rankings, onto another league-week and window.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of leagues moved
    /// - `Err(DbErr)` - Database error
    pub async fn carry_forward(
        &self,
        ids: &[i32],
        week: i32,
        window: WeekWindow,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::League::update_many()
            .col_expr(entity::league::Column::Week, Expr::value(week))
            .col_expr(entity::league::Column::StartDate, Expr::value(window.start))
            .col_expr(entity::league::Column::EndDate, Expr::value(window.end))
            .filter(entity::league::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Overwrites the member counter of a league.
    ///
    /// # Returns
    /// - `Ok(())` - Counter updated
    /// - `Err(DbErr::RecordNotFound)` - No league with this ID
    pub async fn set_current_members(&self, id: i32, current_members: u32) -> Result<(), DbErr> {
        let league = entity::prelude::League::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("League {} not found", id)))?;

        let mut active = league.into_active_model();
        active.current_members = ActiveValue::Set(current_members as i32);
        active.update(self.db).await?;

        Ok(())
    }

    /// Hard-deletes the given leagues.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of leagues deleted
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::League::delete_many()
            .filter(entity::league::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves every league of the season that ended before `window` onto `window`.
    ///
    /// League-week numbers are left alone; only the calendar range is rolled.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of leagues re-dated
    /// - `Err(DbErr)` - Database error
    pub async fn roll_stale_windows(&self, season_id: i32, window: WeekWindow) -> Result<u64, DbErr> {
        let stale = entity::prelude::League::find()
            .filter(entity::league::Column::SeasonId.eq(season_id))
            .filter(entity::league::Column::EndDate.lt(window.start))
            .all(self.db)
            .await?;

        let mut updated = 0;
        for league in stale {
            let mut active = league.into_active_model();
            active.start_date = ActiveValue::Set(window.start);
            active.end_date = ActiveValue::Set(window.end);
            active.update(self.db).await?;
            updated += 1;
        }

        Ok(updated)
    }

    /// Gets a page of a season's leagues, ordered by category, tier descending, then ID.
    ///
    /// # Arguments
    /// - `param` - Season, optional category/tier filters and zero-indexed page
    ///
    /// # Returns
    /// - `Ok(PaginatedLeagues)` - The page with total item and page counts
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(&self, param: GetLeaguesParam) -> Result<PaginatedLeagues, DbErr> {
        let mut query = entity::prelude::League::find()
            .filter(entity::league::Column::SeasonId.eq(param.season_id));
        if let Some(category) = param.category {
            query = query.filter(entity::league::Column::Category.eq(category.as_str()));
        }
        if let Some(tier) = param.tier {
            query = query.filter(entity::league::Column::Tier.eq(tier.ordinal()));
        }

        let paginator = query
            .order_by_asc(entity::league::Column::Category)
            .order_by_desc(entity::league::Column::Tier)
            .order_by_asc(entity::league::Column::Id)
            .paginate(self.db, param.per_page);

        let counts = paginator.num_items_and_pages().await?;
        let leagues = paginator
            .fetch_page(param.page)
            .await?
            .into_iter()
            .map(League::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedLeagues {
            leagues,
            total: counts.number_of_items,
            page: param.page,
            per_page: param.per_page,
            total_pages: counts.number_of_pages,
        })
    }
}
