use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::server::{
    error::AppError, service::league::query::LeagueQueryService, state::AppState,
};

/// Get a member's current ranking in the active season.
///
/// # Returns
/// - `200 OK` - Rank, score and the member's league
/// - `404 Not Found` - Unknown member, member not placed yet, or no active season
/// - `500 Internal Server Error` - Database error
pub async fn get_member_ranking(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let standing = LeagueQueryService::new(&state.db)
        .member_standing(member_id, Utc::now().date_naive())
        .await?;

    Ok(Json(standing.into_dto()))
}
