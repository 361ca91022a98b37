use super::*;

/// Tests loading members by ID.
///
/// Verifies that only the requested members are returned and that the stored category
/// and personal best are mapped onto the domain model.
///
/// Expected: Ok with the two requested members
#[tokio::test]
async fn loads_requested_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::member::MemberFactory::new(db)
        .category(Some("university".to_string()))
        .personal_best_tier(Tier::Gold.ordinal())
        .build()
        .await?;
    let second = factory::create_member(db).await?;
    factory::create_member(db).await?;

    let mut members = MemberRepository::new(db)
        .find_by_ids(&[first.id, second.id])
        .await?;
    members.sort_by_key(|member| member.id);

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].category, Some(Category::University));
    assert_eq!(members[0].personal_best_tier, Tier::Gold);
    assert_eq!(members[1].id, second.id);

    Ok(())
}

/// Tests a stored category the engine does not know.
///
/// Expected: Ok with the member's category mapped to None
#[tokio::test]
async fn unknown_category_maps_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::member::MemberFactory::new(db)
        .category(Some("astronaut".to_string()))
        .build()
        .await?;

    let members = MemberRepository::new(db).find_by_ids(&[member.id]).await?;

    assert_eq!(members[0].category, None);

    Ok(())
}

/// Tests an empty ID list.
///
/// Expected: Ok with no members
#[tokio::test]
async fn empty_ids_return_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_member(db).await?;

    let members = MemberRepository::new(db).find_by_ids(&[]).await?;

    assert!(members.is_empty());

    Ok(())
}
