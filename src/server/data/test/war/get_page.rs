use super::*;

/// Tests keyset pagination over a tenant's wars.
///
/// Verifies that pages are ordered newest first, that `has_more` is reported only
/// while rows remain, and that walking the pages visits every war exactly once.
///
/// Expected: Ok with pages of 2, 2, 1
#[tokio::test]
async fn walks_pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let base = Utc::now() - Duration::days(10);
    let mut created = Vec::new();
    for day in 0..5 {
        let war = factory::war::WarFactory::new(db, tenant.id)
            .start_time(base + Duration::days(day))
            .build()
            .await?;
        created.push(war.id);
    }

    let repo = WarRepository::new(db);

    let (first, more) = repo.get_page(tenant.id, 2, None).await?;
    assert!(more);
    assert_eq!(
        first.iter().map(|w| w.id).collect::<Vec<_>>(),
        vec![created[4], created[3]]
    );

    let last = first.last().unwrap();
    let (second, more) = repo
        .get_page(tenant.id, 2, Some((last.start_time, last.id)))
        .await?;
    assert!(more);
    assert_eq!(
        second.iter().map(|w| w.id).collect::<Vec<_>>(),
        vec![created[2], created[1]]
    );

    let last = second.last().unwrap();
    let (third, more) = repo
        .get_page(tenant.id, 2, Some((last.start_time, last.id)))
        .await?;
    assert!(!more);
    assert_eq!(
        third.iter().map(|w| w.id).collect::<Vec<_>>(),
        vec![created[0]]
    );

    Ok(())
}

/// Tests that rows sharing a start time are split by id.
///
/// Expected: Ok with the lower id on the second page
#[tokio::test]
async fn breaks_start_time_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let start = Utc::now() - Duration::days(1);
    let older = factory::war::WarFactory::new(db, tenant.id)
        .start_time(start)
        .build()
        .await?;
    let newer = factory::war::WarFactory::new(db, tenant.id)
        .start_time(start)
        .build()
        .await?;

    let repo = WarRepository::new(db);
    let (first, more) = repo.get_page(tenant.id, 1, None).await?;
    assert!(more);
    assert_eq!(first[0].id, newer.id);

    let (second, more) = repo
        .get_page(tenant.id, 1, Some((first[0].start_time, first[0].id)))
        .await?;
    assert!(!more);
    assert_eq!(second[0].id, older.id);

    Ok(())
}
