use super::*;

/// Tests creating a league.
///
/// Verifies that category and tier are stored in their column form and the week window
/// becomes the league's date range.
///
/// Expected: Ok with the stored league matching the parameters
#[tokio::test]
async fn creates_league() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let window = WeekWindow::containing(Utc::now().date_naive());

    let league = LeagueRepository::new(db)
        .create(CreateLeagueParams {
            season_id: season.id,
            category: Category::HighSchool,
            tier: Tier::Diamond,
            name: "High School Diamond 1".to_string(),
            week: 2,
            current_members: 40,
            capacity: 100,
            window,
        })
        .await?;

    assert_eq!(league.category, Category::HighSchool);
    assert_eq!(league.tier, Tier::Diamond);
    assert_eq!(league.current_members, 40);
    let stored = entity::prelude::League::find_by_id(league.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.category, "high_school");
    assert_eq!(stored.tier, 5);
    assert_eq!(stored.start_date, window.start);
    assert_eq!(stored.end_date, window.end);

    Ok(())
}
