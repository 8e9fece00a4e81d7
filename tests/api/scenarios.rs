//! End-to-end scenarios against the mock facade.
//!
//! These walk the six operations through the seeded development dataset
//! with a pinned clock and zero latency.

use crate::common::{new_item, TestPanel};
use chrono::Duration;
use datapanel::{Clock, ItemId, ItemPatch, ListQuery, CODE_NOT_FOUND};

#[tokio::test]
async fn first_page_of_seeded_store_in_insertion_order() {
    let panel = TestPanel::seeded();

    let page = panel
        .api
        .get_list(&ListQuery::page(1, 3))
        .await
        .data
        .unwrap();

    assert_eq!(page.total, 8);
    assert_eq!(page.list.len(), 3);
    let names: Vec<&str> = page.list.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Sales Revenue", "User Count", "Order Volume"]);
}

#[tokio::test]
async fn create_then_detail_round_trip() {
    let panel = TestPanel::seeded();

    let created = panel
        .api
        .create(&new_item("X", 10.0, "Y"))
        .await
        .data
        .unwrap();
    let detail = panel.api.get_detail(&created.id).await.data.unwrap();

    assert_eq!(detail.name, "X");
    assert_eq!(detail.value, 10.0);
    assert_eq!(detail.category, "Y");
    assert_eq!(detail.create_time, detail.update_time);
}

#[tokio::test]
async fn update_merges_value_and_refreshes_timestamp() {
    let panel = TestPanel::seeded();
    let before = panel.store.list()[0].clone();

    panel.clock.advance(Duration::seconds(30));
    let patch = ItemPatch {
        value: Some(999.0),
        ..Default::default()
    };
    let updated = panel.api.update(&before.id, &patch).await.data.unwrap();

    assert_eq!(updated.value, 999.0);
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.category, before.category);
    assert!(updated.update_time > before.update_time);
    assert_eq!(updated.create_time, before.create_time);
}

#[tokio::test]
async fn delete_then_detail_is_404() {
    let panel = TestPanel::seeded();
    let id = panel.id_at(2);

    let deleted = panel.api.delete(&id).await;
    assert!(deleted.is_success());

    let detail = panel.api.get_detail(&id).await;
    assert_eq!(detail.code, CODE_NOT_FOUND);
    assert!(detail.data.is_none());
}

#[tokio::test]
async fn detail_is_idempotent_without_mutation() {
    let panel = TestPanel::seeded();
    let id = panel.id_at(4);

    let first = panel.api.get_detail(&id).await;
    let second = panel.api.get_detail(&id).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_id_yields_404_at_every_call_site() {
    let panel = TestPanel::seeded();
    let missing = ItemId::new();

    let detail = panel.api.get_detail(&missing).await;
    let update = panel.api.update(&missing, &ItemPatch::default()).await;
    let delete = panel.api.delete(&missing).await;

    assert_eq!(detail.code, CODE_NOT_FOUND);
    assert_eq!(update.code, CODE_NOT_FOUND);
    assert_eq!(delete.code, CODE_NOT_FOUND);
    assert!(detail.data.is_none());
    assert!(update.data.is_none());
    assert!(delete.data.is_none());
}

#[tokio::test]
async fn list_filters_compose() {
    let panel = TestPanel::seeded();

    let by_category = panel
        .api
        .get_list(&ListQuery::page(1, 10).with_category("Finance"))
        .await
        .data
        .unwrap();
    assert_eq!(by_category.total, 2);

    let both = panel
        .api
        .get_list(
            &ListQuery::page(1, 10)
                .with_name("refund")
                .with_category("Finance"),
        )
        .await
        .data
        .unwrap();
    assert_eq!(both.total, 1);
    assert_eq!(both.list[0].name, "Refund Amount");
}

#[tokio::test]
async fn filters_matching_nothing_yield_empty_page() {
    let panel = TestPanel::seeded();
    let page = panel
        .api
        .get_list(&ListQuery::page(1, 10).with_name("no such record"))
        .await
        .data
        .unwrap();
    assert_eq!(page.total, 0);
    assert!(page.list.is_empty());
}

#[tokio::test]
async fn empty_store_lists_cleanly() {
    let panel = TestPanel::empty();
    let page = panel
        .api
        .get_list(&ListQuery::default())
        .await
        .data
        .unwrap();
    assert_eq!(page.total, 0);
    assert!(page.list.is_empty());
}

#[tokio::test]
async fn chart_covers_all_seed_values() {
    let panel = TestPanel::seeded();
    let chart = panel.api.get_chart().await.data.unwrap();

    let total_of_sums: f64 = chart.values.iter().sum();
    let total_of_values: f64 = panel.store.list().iter().map(|item| item.value).sum();
    assert!((total_of_sums - total_of_values).abs() < 1e-9);

    assert_eq!(chart.categories.len(), chart.values.len());
    assert_eq!(chart.trend.len(), 7);
    let today = panel.clock.now().date_naive();
    assert_eq!(chart.trend.last().unwrap().date, today);
}
