use super::*;

/// Tests deleting every volante through the filtered delete.
///
/// Expected: Ok(3) and an empty table afterwards
#[tokio::test]
async fn deletes_all_and_counts_rows() -> Result<(), AppError> {
    let supabase = FakeSupabase::start().await;
    let store = supabase.store();

    store
        .append_entry(param("Ana Silva", "52998224725", vec![1, 2, 3, 4, 5, 6], 0))
        .await?;
    store
        .append_entry(param("Bruno Costa", "11144477735", vec![1, 2, 3, 4, 5, 6], 1))
        .await?;
    store
        .append_entry(param("Carla Dias", "52998224725", vec![1, 2, 3, 4, 5, 6], 2))
        .await?;

    let deleted = store.delete_all_entries().await?;

    assert_eq!(deleted, 3);
    assert_eq!(supabase.stored_volantes(), 0);
    assert!(store.fetch_entries().await?.is_empty());

    Ok(())
}

/// Tests deleting from an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_empty_table_counts_zero() -> Result<(), AppError> {
    let supabase = FakeSupabase::start().await;

    assert_eq!(supabase.store().delete_all_entries().await?, 0);

    Ok(())
}
