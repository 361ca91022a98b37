use super::*;

/// Tests that a marker is matched on season, category and cycle key.
///
/// Expected: true only for the exact triple that was recorded
#[tokio::test]
async fn matches_exact_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;
    let repo = LeagueCycleRepository::new(db);
    repo.create(season.id, Category::University, "2026-W43", 2)
        .await?;

    assert!(repo.exists(season.id, Category::University, "2026-W43").await?);
    assert!(!repo.exists(season.id, Category::Employee, "2026-W43").await?);
    assert!(!repo.exists(season.id, Category::University, "2026-W44").await?);
    assert!(!repo.exists(season.id + 1, Category::University, "2026-W43").await?);

    Ok(())
}
