use super::*;

/// Tests seating several members at once.
///
/// Verifies that every seat starts with a zero score and the given tier.
///
/// Expected: Ok(3) with three zero-score Silver rankings
#[tokio::test]
async fn seats_members_with_zero_score() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let league = factory::league::LeagueFactory::new(db, season.id)
        .tier(Tier::Silver.ordinal())
        .build()
        .await?;
    let mut seats = Vec::new();
    for _ in 0..3 {
        let member = factory::create_member(db).await?;
        seats.push(CreateRankingParams {
            league_id: league.id,
            member_id: member.id,
            tier: Tier::Silver,
        });
    }

    let created = RankingRepository::new(db).create_many(&seats).await?;

    assert_eq!(created, 3);
    let rankings = RankingRepository::new(db)
        .get_by_league_ids(&[league.id])
        .await?;
    assert!(rankings
        .iter()
        .all(|ranking| ranking.score == 0 && ranking.tier == Tier::Silver));

    Ok(())
}
