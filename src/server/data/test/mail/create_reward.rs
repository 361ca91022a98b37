use super::*;

/// Tests storing a promotion reward message.
///
/// Expected: Ok with an unclaimed message carrying the tier and amount
#[tokio::test]
async fn stores_unclaimed_reward() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;

    let mail = MailRepository::new(db)
        .create_reward(PromotionReward {
            member_id: member.id,
            tier: Tier::Gold,
            amount: 300,
        })
        .await?;

    assert_eq!(mail.member_id, member.id);
    assert_eq!(mail.title, "Promoted to Gold!");
    assert_eq!(mail.reward_amount, 300);
    assert_eq!(mail.tier, Some(Tier::Gold.ordinal()));
    assert!(!mail.is_claimed);

    Ok(())
}

/// Tests issuing rewards through the collaborator interface.
///
/// Expected: Ok with the member's messages listed newest first
#[tokio::test]
async fn issues_rewards_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let repo = MailRepository::new(db);

    repo.create_reward_message(member.id, Tier::Silver, 200)
        .await?;
    repo.create_reward_message(member.id, Tier::Gold, 300)
        .await?;

    let mail = entity::prelude::Mail::find()
        .filter(entity::mail::Column::MemberId.eq(member.id))
        .order_by_desc(entity::mail::Column::Id)
        .all(db)
        .await?;
    assert_eq!(mail.len(), 2);
    assert_eq!(mail[0].tier, Some(Tier::Gold.ordinal()));
    assert_eq!(mail[1].tier, Some(Tier::Silver.ordinal()));

    Ok(())
}
