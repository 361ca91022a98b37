use axum::{routing::get, Router};

use crate::server::{
    controller::{
        league::{get_league, get_league_rankings, get_leagues},
        member::get_member_ranking,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/leagues", get(get_leagues))
        .route("/api/leagues/{league_id}", get(get_league))
        .route("/api/leagues/{league_id}/rankings", get(get_league_rankings))
        .route("/api/members/{member_id}/ranking", get(get_member_ranking))
}
