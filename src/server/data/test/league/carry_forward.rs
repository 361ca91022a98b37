use super::*;

/// Tests moving leagues onto another week.
///
/// Verifies that only the listed leagues get the new week and window.
///
/// Expected: Ok(1) with the other league left at week 2
#[tokio::test]
async fn moves_listed_leagues() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let moved = factory::league::LeagueFactory::new(db, season.id)
        .week(2)
        .build()
        .await?;
    let kept = factory::league::LeagueFactory::new(db, season.id)
        .week(2)
        .build()
        .await?;
    let window = WeekWindow::containing(Utc::now().date_naive() + Duration::days(7));

    let count = LeagueRepository::new(db)
        .carry_forward(&[moved.id], 3, window)
        .await?;

    assert_eq!(count, 1);
    let moved = entity::prelude::League::find_by_id(moved.id).one(db).await?.unwrap();
    assert_eq!(moved.week, 3);
    assert_eq!(moved.start_date, window.start);
    assert_eq!(moved.end_date, window.end);
    let kept = entity::prelude::League::find_by_id(kept.id).one(db).await?.unwrap();
    assert_eq!(kept.week, 2);

    Ok(())
}

/// Tests an empty ID list.
///
/// Expected: Ok(0)
#[tokio::test]
async fn ignores_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let count = LeagueRepository::new(db)
        .carry_forward(&[], 3, WeekWindow::containing(Utc::now().date_naive()))
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
