use super::*;

/// Tests listing leagues with a category filter.
///
/// Expected: 200 OK with only the university league
#[tokio::test]
async fn lists_leagues_filtered_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    factory::create_league(db, season.id).await?;
    let university = factory::league::LeagueFactory::new(db, season.id)
        .category("university")
        .name("University Bronze 1")
        .build()
        .await?;

    let response = get(db, "/api/leagues?category=university&entries=5").await;

    assert_eq!(response.status(), StatusCode::OK);
    let page: PaginatedLeaguesDto = json(response).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.per_page, 5);
    assert_eq!(page.leagues[0].id, university.id);
    assert_eq!(page.leagues[0].category, "university");
    assert_eq!(page.leagues[0].tier, "bronze");

    Ok(())
}

/// Tests an out-of-range page size.
///
/// Expected: 400 Bad Request with an error message
#[tokio::test]
async fn rejects_zero_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_active_season(db).await?;

    let response = get(db, "/api/leagues?entries=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json(response).await;
    assert!(error.error.contains("entries"));

    Ok(())
}

/// Tests an unknown tier filter.
///
/// Expected: 400 Bad Request with a JSON error naming the tier
#[tokio::test]
async fn rejects_unknown_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_active_season(db).await?;

    let response = get(db, "/api/leagues?tier=wood").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json(response).await;
    assert_eq!(error.error, "Unknown tier: wood");

    Ok(())
}

/// Tests listing when no season is active.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn list_without_season_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = get(db, "/api/leagues").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests fetching one league.
///
/// Expected: 200 OK with the league's fields
#[tokio::test]
async fn gets_league() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let league = factory::league::LeagueFactory::new(db, season.id)
        .week(2)
        .build()
        .await?;

    let response = get(db, &format!("/api/leagues/{}", league.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let dto: LeagueDto = json(response).await;
    assert_eq!(dto.id, league.id);
    assert_eq!(dto.week, 2);
    assert_eq!(dto.capacity, 110);

    Ok(())
}

/// Tests fetching a league that does not exist.
///
/// Expected: 404 Not Found with the league ID in the message
#[tokio::test]
async fn missing_league_returns_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = get(db, "/api/leagues/9").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = json(response).await;
    assert_eq!(error.error, "League 9 not found");

    Ok(())
}

/// Tests the league rankings route.
///
/// Expected: 200 OK with members ordered by score descending
#[tokio::test]
async fn lists_rankings_by_score() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let (league, members) =
        factory::helpers::create_league_with_members(db, season.id, &[5, 15, 10]).await?;

    let response = get(db, &format!("/api/leagues/{}/rankings", league.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let dto: LeagueRankingsDto = json(response).await;
    assert_eq!(dto.league.current_members, 3);
    let order: Vec<i32> = dto.members.iter().map(|member| member.member_id).collect();
    assert_eq!(order, vec![members[1].id, members[2].id, members[0].id]);
    assert_eq!(dto.members[0].rank, 1);

    Ok(())
}
