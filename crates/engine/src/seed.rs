//! Development seed dataset
//!
//! The eight records the dashboard ships with when no remote backend is
//! reachable. Creation times are staggered over the last week, oldest
//! first, so list and chart views have something plausible to show.

use chrono::Duration;
use datapanel_core::{Clock, DataItem, ItemId};

/// Build the eight seed records, insertion order oldest-first
pub fn seed_items(clock: &dyn Clock) -> Vec<DataItem> {
    let now = clock.now();
    let entries: [(&str, f64, &str); 8] = [
        ("Sales Revenue", 125_000.0, "Finance"),
        ("User Count", 8_500.0, "Users"),
        ("Order Volume", 3_200.0, "Orders"),
        ("Page Views", 156_000.0, "Traffic"),
        ("Conversion Rate", 3.5, "Conversion"),
        ("Stock Level", 850.0, "Inventory"),
        ("Refund Amount", 8_500.0, "Finance"),
        ("Active Users", 5_200.0, "Users"),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(index, (name, value, category))| {
            let created = now - Duration::days(7 - index as i64);
            DataItem {
                id: ItemId::new(),
                name: name.to_string(),
                value: *value,
                category: category.to_string(),
                create_time: created,
                update_time: created,
            }
        })
        .collect()
}
