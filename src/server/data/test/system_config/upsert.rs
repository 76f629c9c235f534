use super::*;

/// Tests inserting a key that does not exist yet.
///
/// Expected: Ok with the row created
#[tokio::test]
async fn inserts_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SystemConfigRepository::new(db);
    repo.upsert("accept_new_entries", "true").await?;

    assert_eq!(
        repo.get("accept_new_entries").await?.as_deref(),
        Some("true")
    );

    Ok(())
}

/// Tests overwriting an existing key.
///
/// Verifies the value is replaced in place rather than a second row being added.
///
/// Expected: Ok with the new value and a single row
#[tokio::test]
async fn overwrites_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_config(db, "accept_new_entries", "true").await?;

    let repo = SystemConfigRepository::new(db);
    repo.upsert("accept_new_entries", "false").await?;

    assert_eq!(
        repo.get("accept_new_entries").await?.as_deref(),
        Some("false")
    );
    assert_eq!(entity::prelude::SystemConfig::find().count(db).await?, 1);

    Ok(())
}
