use super::*;

/// Tests finding members without a league in the season.
///
/// Verifies that ranked members are excluded while a member ranked only in another
/// season still counts as unranked.
///
/// Expected: Ok with the two unranked members in ID order
#[tokio::test]
async fn excludes_members_ranked_this_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let today = Utc::now().date_naive();
    let old_season = factory::season::SeasonFactory::new(db)
        .start_date(today - Duration::days(200))
        .end_date(today - Duration::days(100))
        .build()
        .await?;
    let (_, ranked) = factory::helpers::create_league_with_members(db, season.id, &[5]).await?;
    let (_, returning) =
        factory::helpers::create_league_with_members(db, old_season.id, &[5]).await?;
    let fresh = factory::create_member(db).await?;

    let unranked = MemberRepository::new(db)
        .find_unranked(season.id, 100)
        .await?;

    let ids: Vec<i32> = unranked.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![returning[0].id, fresh.id]);
    assert!(!ids.contains(&ranked[0].id));

    Ok(())
}

/// Tests the batch limit.
///
/// Expected: Ok with only the first two members by ID
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;
    factory::create_member(db).await?;

    let unranked = MemberRepository::new(db).find_unranked(season.id, 2).await?;

    let ids: Vec<i32> = unranked.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
