use super::*;

/// Tests finding the season that contains a date.
///
/// Verifies that a past season is ignored and the season spanning today is returned.
///
/// Expected: Ok(Some) with the current season
#[tokio::test]
async fn finds_season_containing_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();
    factory::season::SeasonFactory::new(db)
        .start_date(today - Duration::days(200))
        .end_date(today - Duration::days(100))
        .build()
        .await?;
    let current = factory::create_active_season(db).await?;

    let season = SeasonRepository::new(db).find_active(today).await?;

    assert_eq!(season.map(|season| season.id), Some(current.id));

    Ok(())
}

/// Tests that the season's first and last day both count as active.
///
/// Expected: Ok(Some) on both boundary dates
#[tokio::test]
async fn includes_boundary_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();
    let season = factory::season::SeasonFactory::new(db)
        .start_date(today)
        .end_date(today + Duration::days(30))
        .build()
        .await?;

    let repo = SeasonRepository::new(db);

    assert!(repo.find_active(season.start_date).await?.is_some());
    assert!(repo.find_active(season.end_date).await?.is_some());
    assert!(repo
        .find_active(season.end_date + Duration::days(1))
        .await?
        .is_none());

    Ok(())
}

/// Tests the lookup between seasons.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_between_seasons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();
    factory::season::SeasonFactory::new(db)
        .start_date(today + Duration::days(7))
        .end_date(today + Duration::days(70))
        .build()
        .await?;

    let season = SeasonRepository::new(db).find_active(today).await?;

    assert!(season.is_none());

    Ok(())
}
