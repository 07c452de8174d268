use super::*;

/// Tests recording a new attack.
///
/// Expected: Ok(true) and one stored attack
#[tokio::test]
async fn inserts_new_attack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, war) = factory::helpers::create_war_with_tenant(db).await?;
    let snapshot = snapshot(fixture::war_payload::minimal());

    let repo = AttackRepository::new(db);
    let inserted = repo
        .insert_if_absent(war.id, &snapshot.attacks[0], Utc::now())
        .await?;

    assert!(inserted);
    let stored = entity::prelude::Attack::find()
        .filter(entity::attack::Column::WarId.eq(war.id))
        .all(db)
        .await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].attacker_tag, "#P1");
    assert_eq!(stored[0].defender_tag, "#P2");
    assert_eq!(stored[0].stars, 2);

    Ok(())
}

/// Tests replaying an attack that is already recorded.
///
/// Verifies that the second insert reports nothing written and the original row
/// is left untouched even if the replayed values differ.
///
/// Expected: Ok(false) with a single unchanged row
#[tokio::test]
async fn ignores_recorded_attack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, war) = factory::helpers::create_war_with_tenant(db).await?;
    let mut attack = snapshot(fixture::war_payload::minimal()).attacks[0].clone();

    let repo = AttackRepository::new(db);
    assert!(repo.insert_if_absent(war.id, &attack, Utc::now()).await?);

    attack.stars = 3;
    assert!(!repo.insert_if_absent(war.id, &attack, Utc::now()).await?);

    let stored = entity::prelude::Attack::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].stars, 2);

    Ok(())
}

/// Tests merging a whole snapshot twice through the war, participant, and attack
/// repositories.
///
/// Expected: Ok with one war, two participants, and three attacks
#[tokio::test]
async fn full_merge_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let snapshot = snapshot(fixture::war_payload::in_war("#ABC"));

    for _ in 0..2 {
        let war = WarRepository::new(db)
            .upsert_snapshot(tenant.id, &snapshot, Utc::now())
            .await?;
        for participant in &snapshot.participants {
            WarParticipantRepository::new(db)
                .upsert(war.id, participant, Utc::now())
                .await?;
        }
        for attack in &snapshot.attacks {
            AttackRepository::new(db)
                .insert_if_absent(war.id, attack, Utc::now())
                .await?;
        }
    }

    assert_eq!(entity::prelude::War::find().count(db).await?, 1);
    assert_eq!(entity::prelude::WarParticipant::find().count(db).await?, 2);
    assert_eq!(entity::prelude::Attack::find().count(db).await?, 3);

    Ok(())
}
