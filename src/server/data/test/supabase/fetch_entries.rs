use super::*;
use crate::server::service::stats::compute_stats;

/// Tests scanning a table larger than the server's per-response row cap.
///
/// The server returns at most two rows per read while three are stored, so the store
/// must keep paging until an empty page comes back.
///
/// Expected: all three volantes in timestamp order, counted by the stats
#[tokio::test]
async fn reads_every_page_when_server_caps_rows() -> Result<(), AppError> {
    let supabase = FakeSupabase::start_with_max_rows(2).await;
    let store = supabase.store();

    store
        .append_entry(param("Ana Silva", "52998224725", vec![1, 2, 3, 4, 5, 6], 0))
        .await?;
    store
        .append_entry(param("Bruno Costa", "11144477735", vec![1, 2, 3, 4, 5, 7], 1))
        .await?;
    store
        .append_entry(param("Carla Dias", "52998224725", vec![1, 8, 9, 10, 11, 12], 2))
        .await?;
    assert_eq!(supabase.stored_volantes(), 3);

    let volantes = store.fetch_entries().await?;

    let names: Vec<&str> = volantes.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Ana Silva", "Bruno Costa", "Carla Dias"]);

    let stats = compute_stats(&volantes);
    assert_eq!(stats.total_volantes, 3);
    assert_eq!(stats.top_numbers[0].number, 1);
    assert_eq!(stats.top_numbers[0].count, 3);

    Ok(())
}

/// Tests paging with a page size smaller than the table.
///
/// Expected: every volante exactly once, in insertion order
#[tokio::test]
async fn pages_with_configured_page_size() -> Result<(), AppError> {
    let supabase = FakeSupabase::start().await;
    let store = supabase.store().with_page_size(2);

    let cpfs = ["52998224725", "11144477735"];
    for i in 0..5 {
        store
            .append_entry(param(
                &format!("Pessoa {}", i),
                cpfs[i % 2],
                vec![1, 2, 3, 4, 5, 6],
                i as i64,
            ))
            .await?;
    }

    let volantes = store.fetch_entries().await?;

    let ids: Vec<i64> = volantes.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    Ok(())
}

/// Tests fetching from an empty table.
///
/// Expected: Ok with no volantes
#[tokio::test]
async fn returns_empty_when_no_volantes() -> Result<(), AppError> {
    let supabase = FakeSupabase::start().await;

    let volantes = supabase.store().fetch_entries().await?;

    assert!(volantes.is_empty());

    Ok(())
}

/// Tests that a rejected API key surfaces as an unexpected status.
///
/// Expected: Err(StoreError::UnexpectedStatus) with status 401
#[tokio::test]
async fn reports_rejected_key_as_unexpected_status() {
    let supabase = FakeSupabase::start().await;
    let store = SupabaseStore::new(
        reqwest::Client::new(),
        supabase.base_url.clone(),
        "wrong-key".to_string(),
    );

    let result = store.fetch_entries().await;

    assert!(matches!(
        result,
        Err(AppError::StoreErr(StoreError::UnexpectedStatus { status: 401, .. }))
    ));
}
