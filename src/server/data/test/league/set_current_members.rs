use super::*;

/// Tests overwriting a league's member counter.
///
/// Expected: Ok with the new counter stored
#[tokio::test]
async fn updates_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let league = factory::create_league(db, season.id).await?;

    LeagueRepository::new(db)
        .set_current_members(league.id, 57)
        .await?;

    let stored = entity::prelude::League::find_by_id(league.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.current_members, 57);

    Ok(())
}

/// Tests updating the counter of a missing league.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn missing_league_is_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LeagueRepository::new(db).set_current_members(404, 1).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
