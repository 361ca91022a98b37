use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::league::LeagueRankingsDto,
    server::{
        error::AppError,
        model::{category::Category, ranking::RankedMember, tier::Tier},
        service::league::query::LeagueQueryService,
        state::AppState,
    },
};

const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct LeagueListParams {
    pub category: Option<String>,
    pub tier: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// List the active season's leagues.
///
/// # Arguments
/// - `params` - Optional `category` and `tier` filters, zero-indexed `page` and `entries`
///   per page (1 to 100)
///
/// # Returns
/// - `200 OK` - Paginated leagues, highest tier first within a category
/// - `400 Bad Request` - `entries` out of range or an unknown category/tier
/// - `404 Not Found` - No active season
/// - `500 Internal Server Error` - Database error
pub async fn get_leagues(
    State(state): State<AppState>,
    Query(params): Query<LeagueListParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.entries == 0 || params.entries > MAX_ENTRIES {
        return Err(AppError::BadRequest(format!(
            "entries must be between 1 and {}",
            MAX_ENTRIES
        )));
    }

    let category = params
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(AppError::BadRequest)?;
    let tier = params
        .tier
        .as_deref()
        .map(str::parse::<Tier>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let leagues = LeagueQueryService::new(&state.db)
        .list(
            Utc::now().date_naive(),
            category,
            tier,
            params.page,
            params.entries,
        )
        .await?;

    Ok(Json(leagues.into_dto()))
}

/// Get one league.
///
/// # Returns
/// - `200 OK` - The league
/// - `404 Not Found` - No league with this ID
pub async fn get_league(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let league = LeagueQueryService::new(&state.db).get(league_id).await?;

    Ok(Json(league.into_dto()))
}

/// Get a league's members sorted by score, highest first.
///
/// # Returns
/// - `200 OK` - The league with its ranked members
/// - `404 Not Found` - No league with this ID
pub async fn get_league_rankings(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueQueryService::new(&state.db);
    let league = service.get(league_id).await?;
    let members = service.leaderboard(league_id).await?;

    Ok(Json(LeagueRankingsDto {
        league: league.into_dto(),
        members: members.into_iter().map(RankedMember::into_dto).collect(),
    }))
}
