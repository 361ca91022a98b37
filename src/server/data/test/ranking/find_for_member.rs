use super::*;

/// Tests finding a member's ranking within one season.
///
/// Verifies that a ranking from a previous season is not returned.
///
/// Expected: Ok(Some) for the current season's league
#[tokio::test]
async fn finds_ranking_in_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();
    let past = factory::season::SeasonFactory::new(db)
        .start_date(today - Duration::days(200))
        .end_date(today - Duration::days(100))
        .build()
        .await?;
    let season = factory::create_active_season(db).await?;
    let member = factory::create_member(db).await?;
    let old_league = factory::create_league(db, past.id).await?;
    factory::create_ranking(db, old_league.id, member.id).await?;
    let league = factory::create_league(db, season.id).await?;
    factory::create_ranking(db, league.id, member.id).await?;

    let repo = RankingRepository::new(db);
    let ranking = repo.find_for_member(member.id, season.id).await?;

    assert_eq!(ranking.map(|ranking| ranking.league_id), Some(league.id));

    Ok(())
}

/// Tests a member without a seat this season.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_unplaced() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let member = factory::create_member(db).await?;

    let ranking = RankingRepository::new(db)
        .find_for_member(member.id, season.id)
        .await?;

    assert!(ranking.is_none());

    Ok(())
}
