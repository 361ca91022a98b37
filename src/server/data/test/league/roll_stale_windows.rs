use super::*;

/// Tests re-dating leagues that ended before the window.
///
/// Verifies that only the active season's stale league is moved and its week number kept.
///
/// Expected: Ok(1) with the stale league on the new window
#[tokio::test]
async fn moves_stale_leagues_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let other_season = factory::create_active_season(db).await?;
    let window = WeekWindow::containing(Utc::now().date_naive());
    let last_week = (
        window.start - Duration::days(7),
        window.end - Duration::days(7),
    );
    let stale = factory::league::LeagueFactory::new(db, season.id)
        .week(2)
        .dates(last_week.0, last_week.1)
        .build()
        .await?;
    let untouched = factory::league::LeagueFactory::new(db, other_season.id)
        .dates(last_week.0, last_week.1)
        .build()
        .await?;

    let updated = LeagueRepository::new(db)
        .roll_stale_windows(season.id, window)
        .await?;

    assert_eq!(updated, 1);
    let stale = entity::prelude::League::find_by_id(stale.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!((stale.start_date, stale.end_date), (window.start, window.end));
    assert_eq!(stale.week, 2);
    let untouched = entity::prelude::League::find_by_id(untouched.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(untouched.start_date, last_week.0);

    Ok(())
}
