use super::*;
use entity::war::WarState;

/// Tests the first merge of a war.
///
/// Verifies that the synthesized natural key, state, and scores are stored.
///
/// Expected: Ok with one war row
#[tokio::test]
async fn inserts_new_war() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::tenant::TenantFactory::new(db)
        .clan_tag("#ABC")
        .build()
        .await?;

    let repo = WarRepository::new(db);
    let war = repo
        .upsert_snapshot(tenant.id, &snapshot(fixture::war_payload::in_war("#ABC")), Utc::now())
        .await?;

    assert_eq!(war.war_tag, "#ABC-#OPP-1690084800000");
    assert_eq!(war.state, WarState::InWar);
    assert_eq!(war.team_stars, 5);
    assert_eq!(war.start_time.timestamp_millis(), 1690084800000);
    assert_eq!(entity::prelude::War::find().count(db).await?, 1);

    Ok(())
}

/// Tests merging the same war twice with new scores.
///
/// Verifies that the natural key collapses both polls onto one row, that payload
/// fields are overwritten, and that `created_at` is kept.
///
/// Expected: Ok with same id and updated stars
#[tokio::test]
async fn updates_existing_war_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let repo = WarRepository::new(db);

    let first = repo
        .upsert_snapshot(tenant.id, &snapshot(fixture::war_payload::in_war("#ABC")), Utc::now())
        .await?;
    let second = repo
        .upsert_snapshot(
            tenant.id,
            &snapshot(fixture::war_payload::in_war_progressed("#ABC")),
            Utc::now() + Duration::minutes(1),
        )
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.team_stars, 7);
    assert_eq!(
        second.created_at.timestamp_millis(),
        first.created_at.timestamp_millis()
    );
    assert!(second.updated_at > first.updated_at);
    assert_eq!(entity::prelude::War::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a war without an upstream start time keeps its first-seen time.
///
/// Expected: Ok with start_time unchanged across merges
#[tokio::test]
async fn keeps_first_seen_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let repo = WarRepository::new(db);
    let first_seen = Utc::now() - Duration::hours(2);

    let first = repo
        .upsert_snapshot(tenant.id, &snapshot(fixture::war_payload::minimal()), first_seen)
        .await?;
    let second = repo
        .upsert_snapshot(tenant.id, &snapshot(fixture::war_payload::minimal()), Utc::now())
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(
        second.start_time.timestamp_millis(),
        first_seen.timestamp_millis()
    );

    Ok(())
}

/// Tests that identical war tags in different tenants stay separate.
///
/// Expected: Ok with two distinct rows
#[tokio::test]
async fn scopes_natural_key_to_tenant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_tenant = factory::create_tenant(db).await?;
    let second_tenant = factory::create_tenant(db).await?;
    let war = snapshot(fixture::war_payload::minimal());

    let repo = WarRepository::new(db);
    let first = repo.upsert_snapshot(first_tenant.id, &war, Utc::now()).await?;
    let second = repo.upsert_snapshot(second_tenant.id, &war, Utc::now()).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::War::find().count(db).await?, 2);

    Ok(())
}
