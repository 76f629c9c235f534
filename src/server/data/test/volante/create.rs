use super::*;

/// Tests inserting a volante and reading it back.
///
/// Verifies that the repository assigns an id and that the stored row decodes to the
/// same name, CPF, numbers and timestamp.
///
/// Expected: Ok with a non-zero id and identical fields
#[tokio::test]
async fn creates_volante_with_generated_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VolanteRepository::new(db);
    let input = param("Ana Silva", "52998224725", vec![5, 10, 15, 20, 25, 30]);
    let created = repo.create(input.clone()).await?;

    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_eq!(created.cpf, input.cpf);
    assert_eq!(created.numbers, input.numbers);
    assert_eq!(created.timestamp, input.timestamp);

    let all = repo.get_all().await?;
    assert_eq!(all, vec![created]);

    Ok(())
}

/// Tests the stored representation of the numbers and identity columns.
///
/// Expected: numbers stored as a JSON array, identity key as `cpf:lowercase name`
#[tokio::test]
async fn stores_numbers_as_json_and_normalised_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = VolanteRepository::new(db)
        .create(param("Ana Silva", "52998224725", vec![1, 2, 3, 4, 5, 6]))
        .await?;

    let stored = entity::prelude::Volante::find_by_id(created.id as i32)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(stored.numbers, "[1,2,3,4,5,6]");
    assert_eq!(stored.identity_key, "52998224725:ana silva");

    Ok(())
}

/// Tests that a second volante for the same person is refused by the database.
///
/// Verifies the unique identity index catches names differing only in case and
/// surrounding whitespace.
///
/// Expected: Err(StoreError::Conflict) and only one row stored
#[tokio::test]
async fn rejects_same_identity_as_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VolanteRepository::new(db);
    repo.create(param("Ana Silva", "52998224725", vec![1, 2, 3, 4, 5, 6]))
        .await?;

    let result = repo
        .create(param(" ana silva ", "52998224725", vec![7, 8, 9, 10, 11, 12]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::StoreErr(StoreError::Conflict))
    ));
    assert_eq!(entity::prelude::Volante::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the same name with a different CPF is a different person.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_name_with_different_cpf() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_volante_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VolanteRepository::new(db);
    repo.create(param("Ana Silva", "52998224725", vec![1, 2, 3, 4, 5, 6]))
        .await?;
    repo.create(param("Ana Silva", "11144477735", vec![1, 2, 3, 4, 5, 6]))
        .await?;

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
