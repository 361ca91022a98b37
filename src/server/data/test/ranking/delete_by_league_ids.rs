use super::*;

/// Tests deleting the rankings of torn-down leagues.
///
/// Expected: Ok(3) with the other league's rankings kept
#[tokio::test]
async fn deletes_rankings_of_listed_leagues() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let (doomed, _) =
        factory::helpers::create_league_with_members(db, season.id, &[1, 2, 3]).await?;
    factory::helpers::create_league_with_members(db, season.id, &[4, 5]).await?;

    let deleted = RankingRepository::new(db)
        .delete_by_league_ids(&[doomed.id])
        .await?;

    assert_eq!(deleted, 3);
    assert_eq!(entity::prelude::Ranking::find().count(db).await?, 2);

    Ok(())
}
