use super::*;

/// Tests loading one tier of one league-week.
///
/// Expected: Ok with only the Bronze league of week 2
#[tokio::test]
async fn filters_by_tier_and_week() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    factory::league::LeagueFactory::new(db, season.id)
        .week(1)
        .build()
        .await?;
    let current = factory::league::LeagueFactory::new(db, season.id)
        .week(2)
        .build()
        .await?;
    factory::league::LeagueFactory::new(db, season.id)
        .tier(Tier::Gold.ordinal())
        .week(2)
        .build()
        .await?;

    let leagues = LeagueRepository::new(db)
        .get_by_tier(season.id, Category::Employee, Tier::Bronze, 2)
        .await?;

    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].id, current.id);

    Ok(())
}
