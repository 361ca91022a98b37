use super::*;

/// Tests loading every league of a category.
///
/// Verifies that leagues of all weeks are included, other categories are excluded and the
/// result is ordered by tier then ID.
///
/// Expected: Ok with both Bronze leagues followed by the Gold league
#[tokio::test]
async fn loads_all_weeks_ordered_by_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let gold = factory::league::LeagueFactory::new(db, season.id)
        .tier(Tier::Gold.ordinal())
        .week(2)
        .build()
        .await?;
    let bronze = factory::league::LeagueFactory::new(db, season.id)
        .week(2)
        .build()
        .await?;
    let stale = factory::league::LeagueFactory::new(db, season.id)
        .week(1)
        .build()
        .await?;
    factory::league::LeagueFactory::new(db, season.id)
        .category("university")
        .build()
        .await?;

    let leagues = LeagueRepository::new(db)
        .get_by_category(season.id, Category::Employee)
        .await?;

    let ids: Vec<i32> = leagues.iter().map(|league| league.id).collect();
    assert_eq!(ids, vec![bronze.id, stale.id, gold.id]);

    Ok(())
}
