//! Domain models for league data operations.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::league::{LeagueDto, PaginatedLeaguesDto},
    server::{
        model::{category::Category, tier::Tier},
        util::week::WeekWindow,
    },
};

/// A group of same-category, same-tier members competing for one week.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: i32,
    pub season_id: i32,
    pub category: Category,
    pub tier: Tier,
    pub name: String,
    /// League-week counter, starting at 1 for a new cycle.
    pub week: i32,
    /// Always equal to the number of rankings referencing the league.
    pub current_members: u32,
    /// Hard cap for entry-tier leagues, soft target for reshuffled ones.
    pub capacity: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl League {
    /// Converts an entity model to a league domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(League)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored category, tier or counters are invalid
    pub fn from_entity(entity: entity::league::Model) -> Result<Self, DbErr> {
        let category = entity
            .category
            .parse::<Category>()
            .map_err(DbErr::Custom)?;
        let current_members = u32::try_from(entity.current_members).map_err(|_| {
            DbErr::Custom(format!(
                "League {} has negative member count {}",
                entity.id, entity.current_members
            ))
        })?;
        let capacity = u32::try_from(entity.capacity).map_err(|_| {
            DbErr::Custom(format!(
                "League {} has negative capacity {}",
                entity.id, entity.capacity
            ))
        })?;

        Ok(Self {
            id: entity.id,
            season_id: entity.season_id,
            category,
            tier: Tier::try_from(entity.tier)?,
            name: entity.name,
            week: entity.week,
            current_members,
            capacity,
            start_date: entity.start_date,
            end_date: entity.end_date,
        })
    }

    /// Converts the league to its wire representation.
    pub fn into_dto(self) -> LeagueDto {
        LeagueDto {
            id: self.id,
            season_id: self.season_id,
            category: self.category.as_str().to_string(),
            tier: self.tier.as_str().to_string(),
            name: self.name,
            week: self.week,
            current_members: self.current_members,
            capacity: self.capacity,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Display name of the `sequence`-th league of a category and tier, e.g. `University Gold 3`.
    pub fn display_name(category: Category, tier: Tier, sequence: usize) -> String {
        format!("{} {} {}", category.display_name(), tier, sequence)
    }
}

/// Parameters for creating a new league.
#[derive(Debug, Clone)]
pub struct CreateLeagueParams {
    pub season_id: i32,
    pub category: Category,
    pub tier: Tier,
    pub name: String,
    pub week: i32,
    pub current_members: u32,
    pub capacity: u32,
    /// Calendar week the league runs in.
    pub window: WeekWindow,
}

/// Parameters for paginated league listing within one season.
#[derive(Debug, Clone)]
pub struct GetLeaguesParam {
    pub season_id: i32,
    /// Restricts the listing to one category when set.
    pub category: Option<Category>,
    /// Restricts the listing to one tier when set.
    pub tier: Option<Tier>,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of leagues with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedLeagues {
    /// Leagues for this page.
    pub leagues: Vec<League>,
    /// Total number of leagues across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of leagues per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedLeagues {
    pub fn into_dto(self) -> PaginatedLeaguesDto {
        PaginatedLeaguesDto {
            leagues: self.leagues.into_iter().map(League::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
