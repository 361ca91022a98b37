use super::*;

/// Tests deleting leagues by ID.
///
/// Expected: Ok(2) with the third league kept
#[tokio::test]
async fn deletes_only_listed_leagues() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let first = factory::create_league(db, season.id).await?;
    let second = factory::create_league(db, season.id).await?;
    let kept = factory::create_league(db, season.id).await?;

    let deleted = LeagueRepository::new(db)
        .delete_by_ids(&[first.id, second.id])
        .await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::League::find().count(db).await?, 1);
    assert!(entity::prelude::League::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting with an empty ID list.
///
/// Expected: Ok(0) with nothing removed
#[tokio::test]
async fn empty_ids_delete_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    factory::create_league(db, season.id).await?;

    let deleted = LeagueRepository::new(db).delete_by_ids(&[]).await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::League::find().count(db).await?, 1);

    Ok(())
}
