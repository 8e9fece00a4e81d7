//! Fallback behavior of the full client stack.
//!
//! The degraded path must be indistinguishable from calling the mock
//! facade directly, and a healthy remote must win over the local mock.

use crate::common::{new_item, MockRemote, RejectingTransport, TestPanel, RNG_SEED};
use datapanel::{
    DataClient, ItemId, ItemPatch, ListQuery, MockApi, CODE_NOT_FOUND,
};
use std::sync::Arc;

#[tokio::test]
async fn degraded_list_equals_direct_mock_call() {
    let panel = TestPanel::seeded();
    let client = panel.degraded_client();
    let direct = panel.twin_api();

    let query = ListQuery::page(2, 3).with_category("Users");
    let via_client = client.get_list(&query).await;
    let via_mock = direct.get_list(&query).await;

    assert_eq!(via_client, via_mock);
}

#[tokio::test]
async fn degraded_detail_equals_direct_mock_call() {
    let panel = TestPanel::seeded();
    let client = panel.degraded_client();
    let direct = panel.twin_api();
    let id = panel.id_at(3);

    assert_eq!(
        client.get_detail(&id).await,
        direct.get_detail(&id).await
    );
}

#[tokio::test]
async fn degraded_chart_equals_direct_mock_call() {
    let panel = TestPanel::seeded();
    let client = panel.degraded_client();
    let direct = panel.twin_api();

    // Same store, same rng seed: identical aggregation AND identical trend
    assert_eq!(client.get_chart().await, direct.get_chart().await);
}

#[tokio::test]
async fn degraded_create_matches_mock_semantics() {
    let panel = TestPanel::seeded();
    let client = panel.degraded_client();

    let created = client
        .create(&new_item("X", 10.0, "Y"))
        .await
        .data
        .unwrap();

    // Identifier aside, the stored record is exactly what a direct mock
    // create would have produced under the same clock
    assert_eq!(created.name, "X");
    assert_eq!(created.value, 10.0);
    assert_eq!(created.category, "Y");
    assert_eq!(created.create_time, created.update_time);
    assert_eq!(panel.store.len(), 9);
    assert_eq!(panel.store.get(&created.id), Some(created));
}

#[tokio::test]
async fn degraded_update_and_delete_mutate_the_shared_store() {
    let panel = TestPanel::seeded();
    let client = panel.degraded_client();
    let id = panel.id_at(0);

    let patch = ItemPatch {
        value: Some(42.0),
        ..Default::default()
    };
    let updated = client.update(&id, &patch).await;
    assert!(updated.is_success());
    assert_eq!(panel.store.get(&id).unwrap().value, 42.0);

    let deleted = client.delete(&id).await;
    assert!(deleted.is_success());
    assert_eq!(panel.store.get(&id), None);
}

#[tokio::test]
async fn degraded_missing_id_is_a_404_envelope_for_all_three_ops() {
    let panel = TestPanel::seeded();
    let client = panel.degraded_client();
    let direct = panel.twin_api();
    let missing = ItemId::new();

    assert_eq!(
        client.get_detail(&missing).await,
        direct.get_detail(&missing).await
    );
    assert_eq!(
        client.update(&missing, &ItemPatch::default()).await,
        direct.update(&missing, &ItemPatch::default()).await
    );
    assert_eq!(
        client.delete(&missing).await,
        direct.delete(&missing).await
    );
    assert_eq!(client.get_detail(&missing).await.code, CODE_NOT_FOUND);
}

#[tokio::test]
async fn logical_rejection_falls_back_like_a_physical_failure() {
    let panel = TestPanel::seeded();
    let client = DataClient::new(
        Arc::new(RejectingTransport { code: 500 }),
        MockApi::instant(panel.store.clone(), RNG_SEED),
    );

    let page = client.get_list(&ListQuery::default()).await;
    assert!(page.is_success());
    assert_eq!(page.data.unwrap().total, 8);
}

#[tokio::test]
async fn healthy_remote_wins_over_the_local_mock() {
    let panel = TestPanel::seeded();
    let client = DataClient::new(
        Arc::new(MockRemote::with_one_record()),
        MockApi::instant(panel.store.clone(), RNG_SEED),
    );

    let page = client.get_list(&ListQuery::default()).await.data.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].name, "Remote Row");

    // The local mock store was never touched
    assert_eq!(panel.store.len(), 8);
}

#[tokio::test]
async fn remote_404_falls_back_to_mock_which_also_404s() {
    // A remote rejection (including a remote 404) is a logical failure;
    // the mock then answers for the same id, and an id unknown to both
    // sides still resolves to a 404 envelope, never an error.
    let panel = TestPanel::seeded();
    let client = DataClient::new(
        Arc::new(MockRemote::with_one_record()),
        MockApi::instant(panel.store.clone(), RNG_SEED),
    );

    let missing = ItemId::new();
    let detail = client.get_detail(&missing).await;
    assert_eq!(detail.code, CODE_NOT_FOUND);
    assert!(detail.data.is_none());
}

#[tokio::test]
async fn every_operation_yields_an_envelope_under_total_outage() {
    let panel = TestPanel::seeded();
    let client = panel.degraded_client();
    let id = panel.id_at(1);

    assert!(client.get_list(&ListQuery::default()).await.is_success());
    assert!(client.get_detail(&id).await.is_success());
    assert!(client
        .create(&new_item("A", 1.0, "B"))
        .await
        .is_success());
    assert!(client
        .update(&id, &ItemPatch::default())
        .await
        .is_success());
    assert!(client.get_chart().await.is_success());
    assert!(client.delete(&id).await.is_success());
}
