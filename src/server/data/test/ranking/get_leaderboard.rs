use super::*;

/// Tests leaderboard ordering with tied scores.
///
/// Verifies that equal scores keep seating order and ranks are consecutive from 1.
///
/// Expected: Ok with the 30 first, then the two 20s in seating order
#[tokio::test]
async fn orders_by_score_then_seating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let (league, members) =
        factory::helpers::create_league_with_members(db, season.id, &[20, 30, 20]).await?;

    let board = RankingRepository::new(db).get_leaderboard(league.id).await?;

    let order: Vec<(u32, i32)> = board
        .iter()
        .map(|entry| (entry.rank, entry.member_id))
        .collect();
    assert_eq!(
        order,
        vec![(1, members[1].id), (2, members[0].id), (3, members[2].id)]
    );

    Ok(())
}

/// Tests the leaderboard of a league with no rankings.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_league_has_empty_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let league = factory::create_league(db, season.id).await?;

    let board = RankingRepository::new(db).get_leaderboard(league.id).await?;

    assert!(board.is_empty());

    Ok(())
}
