use crate::{
    model::{
        api::ErrorDto,
        league::{LeagueDto, LeagueRankingsDto, MemberRankingDto, PaginatedLeaguesDto},
    },
    server::{router::router, state::AppState},
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

mod league;

async fn get(db: &DatabaseConnection, uri: &str) -> Response {
    router()
        .with_state(AppState::new(db.clone()))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
