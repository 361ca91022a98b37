use super::*;

/// Tests recording a completed cycle.
///
/// Expected: Ok with the marker carrying the category column value and processed week
#[tokio::test]
async fn records_marker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_active_season(db).await?;

    let marker = LeagueCycleRepository::new(db)
        .create(season.id, Category::HighSchool, "2026-W43", 3)
        .await?;

    assert_eq!(marker.season_id, season.id);
    assert_eq!(marker.category, "high_school");
    assert_eq!(marker.cycle_key, "2026-W43");
    assert_eq!(marker.processed_week, 3);

    Ok(())
}
