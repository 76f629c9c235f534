use super::*;

/// Tests fetching from an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_volantes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let volantes = VolanteRepository::new(db).get_all().await?;

    assert!(volantes.is_empty());

    Ok(())
}

/// Tests that volantes come back oldest first regardless of insertion order.
///
/// Expected: Ok with volantes ordered by timestamp ascending
#[tokio::test]
async fn orders_by_timestamp_ascending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
    factory::volante::VolanteFactory::new(db)
        .name("Terceiro")
        .timestamp(base + Duration::minutes(2))
        .build()
        .await?;
    factory::volante::VolanteFactory::new(db)
        .name("Primeiro")
        .timestamp(base)
        .build()
        .await?;
    factory::volante::VolanteFactory::new(db)
        .name("Segundo")
        .timestamp(base + Duration::minutes(1))
        .build()
        .await?;

    let names: Vec<String> = VolanteRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|v| v.name)
        .collect();

    assert_eq!(names, vec!["Primeiro", "Segundo", "Terceiro"]);

    Ok(())
}

/// Tests that a row whose numbers column is not a JSON array surfaces an error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_malformed_numbers_column() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    entity::volante::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set("Ana Silva".to_string()),
        cpf: ActiveValue::Set("52998224725".to_string()),
        identity_key: ActiveValue::Set("52998224725:ana silva".to_string()),
        numbers: ActiveValue::Set("not json".to_string()),
        timestamp: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await?;

    let result = VolanteRepository::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
