use super::*;

/// Tests resolving a category's current league-week.
///
/// Verifies that the week of the newest league wins, even when an older league carries a
/// higher week number, and that other categories are ignored.
///
/// Expected: Ok(Some(1))
#[tokio::test]
async fn returns_week_of_newest_league() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    factory::league::LeagueFactory::new(db, season.id).week(4).build().await?;
    factory::league::LeagueFactory::new(db, season.id).week(1).build().await?;
    factory::league::LeagueFactory::new(db, season.id)
        .category("university")
        .week(3)
        .build()
        .await?;

    let week = LeagueRepository::new(db)
        .get_current_week(season.id, Category::Employee)
        .await?;

    assert_eq!(week, Some(1));

    Ok(())
}

/// Tests a category without leagues.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    factory::create_league(db, season.id).await?;

    let week = LeagueRepository::new(db)
        .get_current_week(season.id, Category::Other)
        .await?;

    assert!(week.is_none());

    Ok(())
}
