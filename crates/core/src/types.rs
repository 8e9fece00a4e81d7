//! Core types for the data-panel client
//!
//! This module defines the foundational types:
//! - ItemId: Opaque unique identifier for a data record
//! - DataItem: A single record (name, numeric value, category, timestamps)
//! - NewItem / ItemPatch: Create and partial-update payloads
//! - ListQuery / Page: List-query parameters and the paged response
//! - ChartData / TrendPoint: Dashboard aggregation payload
//!
//! All wire-visible types serialize with camelCase field names so the JSON
//! matches the remote endpoint (`createTime`, `pageSize`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a data record
///
/// An ItemId is a wrapper around a UUID v4, serialized as its hyphenated
/// string form. Identifiers are server-assigned: callers never supply one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new random ItemId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ItemId from a string representation
    ///
    /// Accepts standard UUID format (with or without hyphens).
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single data record
///
/// Invariants: `id` is unique within a store; `update_time >= create_time`;
/// both timestamps are assigned by the store, never by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    /// Unique record identifier
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Numeric value (sums feed the category chart)
    pub value: f64,
    /// Category label
    pub category: String,
    /// Creation timestamp, store-assigned
    pub create_time: DateTime<Utc>,
    /// Last-update timestamp, refreshed on every update
    pub update_time: DateTime<Utc>,
}

/// Payload for creating a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub value: f64,
    pub category: String,
}

/// Partial-update payload
///
/// Only the supplied fields are merged over the existing record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemPatch {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.value.is_none() && self.category.is_none()
    }
}

/// List-query parameters
///
/// `page` is 1-based and `page_size` must be positive; the query engine
/// rejects anything else. Both filters are optional: `name` keeps records
/// whose name contains the substring (case-insensitive), `category` keeps
/// records whose category matches exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// 1-based page number
    pub page: u32,
    /// Records per page, must be > 0
    pub page_size: u32,
    /// Case-insensitive name substring filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exact category filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ListQuery {
    /// Query for a specific page with no filters
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            name: None,
            category: None,
        }
    }

    /// Set the name substring filter
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the exact category filter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::page(1, 10)
    }
}

/// One page of list results
///
/// `total` counts all records matching the filters, before pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The page slice, at most `page_size` records
    pub list: Vec<T>,
    /// Match count before pagination
    pub total: u64,
    /// Echoed 1-based page number
    pub page: u32,
    /// Echoed page size
    pub page_size: u32,
}

/// One point of the synthetic trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Calendar day the point belongs to
    pub date: NaiveDate,
    /// Synthetic sample value
    pub value: f64,
}

/// Dashboard chart payload
///
/// `categories` and `values` are parallel sequences in first-seen category
/// order. `trend` is a synthetic 7-point filler series covering the last
/// seven calendar days, most recent last. It is NOT derived from the
/// record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Category labels, first-seen order
    pub categories: Vec<String>,
    /// Summed `value` per category, parallel to `categories`
    pub values: Vec<f64>,
    /// Synthetic trend series, 7 dated points ending today
    pub trend: Vec<TrendPoint>,
}
