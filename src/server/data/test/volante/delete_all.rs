use super::*;

/// Tests wiping every volante.
///
/// Expected: Ok(3) and an empty table afterwards
#[tokio::test]
async fn deletes_every_volante_and_reports_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_volante(db).await?;
    }

    let deleted = VolanteRepository::new(db).delete_all().await?;

    assert_eq!(deleted, 3);
    assert_eq!(entity::prelude::Volante::find().count(db).await?, 0);

    Ok(())
}

/// Tests wiping an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_table_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = VolanteRepository::new(db).delete_all().await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests that configuration rows survive a volante wipe.
///
/// Expected: accept_new_entries still stored after delete_all
#[tokio::test]
async fn keeps_system_config_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_volante(db).await?;
    factory::create_config(db, "accept_new_entries", "false").await?;

    VolanteRepository::new(db).delete_all().await?;

    assert_eq!(entity::prelude::SystemConfig::find().count(db).await?, 1);

    Ok(())
}
