//! Query engine: filtering, pagination, and chart aggregation
//!
//! ## Design
//!
//! Pure functions over record slices: the store hands out a snapshot and
//! the query engine never touches the live collection. Filter order is
//! name-substring first, then exact category; the two commute, so the
//! order is an implementation detail.
//!
//! ## Pagination contract
//!
//! `page` is 1-based. `total` counts matches before pagination. The page
//! slice is clamped to the available length: a page past the end yields an
//! empty list, not an error. A non-positive `page` or `page_size` is a
//! caller contract violation and is rejected with `InvalidQuery`.

use chrono::Days;
use datapanel_core::{Clock, DataItem, ListQuery, Page, PanelError, PanelResult, TrendPoint};
use rand::Rng;

/// Number of points in the synthetic trend series
pub const TREND_DAYS: u64 = 7;

/// Filter and paginate a record snapshot
///
/// # Errors
///
/// `InvalidQuery` when `page` or `page_size` is zero.
pub fn run_list_query(items: &[DataItem], query: &ListQuery) -> PanelResult<Page<DataItem>> {
    if query.page == 0 {
        return Err(PanelError::invalid_query("page must be >= 1"));
    }
    if query.page_size == 0 {
        return Err(PanelError::invalid_query("page_size must be >= 1"));
    }

    let name_filter = query.name.as_deref().map(str::to_lowercase);
    let matched: Vec<&DataItem> = items
        .iter()
        .filter(|item| match &name_filter {
            Some(needle) => item.name.to_lowercase().contains(needle),
            None => true,
        })
        .filter(|item| match &query.category {
            Some(category) => item.category == *category,
            None => true,
        })
        .collect();

    let total = matched.len() as u64;
    let start = (query.page as usize - 1).saturating_mul(query.page_size as usize);
    let end = start.saturating_add(query.page_size as usize);
    let list = if start >= matched.len() {
        Vec::new()
    } else {
        matched[start..end.min(matched.len())]
            .iter()
            .map(|item| (*item).clone())
            .collect()
    };

    Ok(Page {
        list,
        total,
        page: query.page,
        page_size: query.page_size,
    })
}

/// Sum `value` per category, in first-seen category order
///
/// Returns two parallel sequences: labels and sums.
pub fn aggregate_by_category(items: &[DataItem]) -> (Vec<String>, Vec<f64>) {
    let mut categories: Vec<String> = Vec::new();
    let mut sums: Vec<f64> = Vec::new();

    for item in items {
        match categories.iter().position(|c| *c == item.category) {
            Some(index) => sums[index] += item.value,
            None => {
                categories.push(item.category.clone());
                sums.push(item.value);
            }
        }
    }

    (categories, sums)
}

/// Produce the synthetic 7-point trend series
///
/// One point per calendar day for the last [`TREND_DAYS`] days ending
/// today, most recent last, values drawn uniformly from [50 000, 100 000).
/// This is a filler signal for the dashboard chart, NOT a value derived
/// from the record store. The rng is injected so tests can seed it.
pub fn synthetic_trend<R: Rng + ?Sized>(clock: &dyn Clock, rng: &mut R) -> Vec<TrendPoint> {
    let today = clock.now().date_naive();
    (0..TREND_DAYS)
        .rev()
        .map(|days_back| TrendPoint {
            date: today - Days::new(days_back),
            value: rng.gen_range(50_000.0_f64..100_000.0).floor(),
        })
        .collect()
}
