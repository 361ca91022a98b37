use super::*;

/// Tests raising a personal best to a higher tier.
///
/// Expected: Ok(true) and the stored tier updated
#[tokio::test]
async fn raises_lower_personal_best() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;

    let raised = MemberRepository::new(db)
        .raise_personal_best(member.id, Tier::Silver)
        .await?;

    assert!(raised);
    let stored = entity::prelude::Member::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.personal_best_tier, Tier::Silver.ordinal());

    Ok(())
}

/// Tests that a personal best never decreases or repeats.
///
/// Expected: Ok(false) for the same and a lower tier, stored tier unchanged
#[tokio::test]
async fn keeps_equal_or_higher_personal_best() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::member::MemberFactory::new(db)
        .personal_best_tier(Tier::Platinum.ordinal())
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(!repo.raise_personal_best(member.id, Tier::Platinum).await?);
    assert!(!repo.raise_personal_best(member.id, Tier::Gold).await?);
    let stored = entity::prelude::Member::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.personal_best_tier, Tier::Platinum.ordinal());

    Ok(())
}

/// Tests raising the personal best of an unknown member.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn missing_member_is_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db)
        .raise_personal_best(999, Tier::Gold)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
