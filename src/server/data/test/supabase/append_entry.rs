use super::*;

/// Tests inserting a volante and reading it back.
///
/// Expected: store-assigned non-zero id, fields unchanged, fetch returns the same volante
#[tokio::test]
async fn appends_and_fetches_same_volante() -> Result<(), AppError> {
    let supabase = FakeSupabase::start().await;
    let store = supabase.store();

    let input = param("Ana Silva", "52998224725", vec![5, 10, 15, 20, 25, 30], 0);
    let created = store.append_entry(input.clone()).await?;

    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_eq!(created.cpf, input.cpf);
    assert_eq!(created.numbers, input.numbers);
    assert_eq!(created.timestamp, input.timestamp);

    assert_eq!(store.fetch_entries().await?, vec![created]);

    Ok(())
}

/// Tests that a 409 from the datastore becomes a store conflict.
///
/// Expected: Err(StoreError::Conflict) and only the first volante stored
#[tokio::test]
async fn maps_conflict_status_to_store_conflict() -> Result<(), AppError> {
    let supabase = FakeSupabase::start().await;
    let store = supabase.store();

    store
        .append_entry(param("Ana Silva", "52998224725", vec![1, 2, 3, 4, 5, 6], 0))
        .await?;

    let result = store
        .append_entry(param("ANA SILVA", "52998224725", vec![7, 8, 9, 10, 11, 12], 1))
        .await;

    assert!(matches!(
        result,
        Err(AppError::StoreErr(StoreError::Conflict))
    ));
    assert_eq!(supabase.stored_volantes(), 1);

    Ok(())
}
