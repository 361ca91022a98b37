use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LeagueDto {
    pub id: i32,
    pub season_id: i32,
    pub category: String,
    pub tier: String,
    pub name: String,
    pub week: i32,
    pub current_members: u32,
    pub capacity: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedLeaguesDto {
    pub leagues: Vec<LeagueDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RankedMemberDto {
    pub rank: u32,
    pub member_id: i32,
    pub nickname: String,
    pub score: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LeagueRankingsDto {
    pub league: LeagueDto,
    pub members: Vec<RankedMemberDto>,
}

/// A member's seat in their current league.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct MemberRankingDto {
    pub member_id: i32,
    pub rank: u32,
    pub score: i64,
    pub tier: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub joined_at: DateTime<Utc>,
    pub league: LeagueDto,
}
