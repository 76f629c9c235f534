use super::*;

/// Tests reading a key that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_key_reads_none() -> Result<(), AppError> {
    let supabase = FakeSupabase::start().await;

    assert_eq!(supabase.store().get_config("accept_new_entries").await?, None);

    Ok(())
}

/// Tests that writing an existing key replaces its value.
///
/// Expected: the second write merges over the first instead of conflicting
#[tokio::test]
async fn set_config_upserts_existing_key() -> Result<(), AppError> {
    let supabase = FakeSupabase::start().await;
    let store = supabase.store();

    store.set_config("accept_new_entries", "false").await?;
    assert_eq!(
        store.get_config("accept_new_entries").await?,
        Some("false".to_string())
    );

    store.set_config("accept_new_entries", "true").await?;
    assert_eq!(
        store.get_config("accept_new_entries").await?,
        Some("true".to_string())
    );
    assert_eq!(
        supabase.stored_config("accept_new_entries"),
        Some("true".to_string())
    );

    Ok(())
}
