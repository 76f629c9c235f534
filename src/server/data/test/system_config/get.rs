use super::*;

/// Tests reading an existing key.
///
/// Expected: Ok(Some(value))
#[tokio::test]
async fn returns_stored_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_config(db, "accept_new_entries", "false").await?;

    let value = SystemConfigRepository::new(db)
        .get("accept_new_entries")
        .await?;

    assert_eq!(value.as_deref(), Some("false"));

    Ok(())
}

/// Tests reading a key that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let value = SystemConfigRepository::new(db)
        .get("accept_new_entries")
        .await?;

    assert!(value.is_none());

    Ok(())
}
