//! Pure views over the inventory list: category grouping and sort orders.
//!
//! All functions borrow the item list and return new collections; the
//! caller's list is never reordered in place.

use crate::expiry::parse_expiry_date;
use crate::text::compare_german;
use crate::types::InventoryItem;
use std::collections::HashMap;

/// Bucket for items without a category.
pub const FALLBACK_CATEGORY: &str = "Sonstiges";

/// Group items by category label.
///
/// Items with an empty category land in the [`FALLBACK_CATEGORY`] bucket.
/// Within a bucket, items keep their input order.
pub fn group_by_category(items: &[InventoryItem]) -> HashMap<String, Vec<InventoryItem>> {
    let mut groups: HashMap<String, Vec<InventoryItem>> = HashMap::new();
    for item in items {
        let category = if item.category.is_empty() {
            FALLBACK_CATEGORY.to_string()
        } else {
            item.category.clone()
        };
        groups.entry(category).or_default().push(item.clone());
    }
    groups
}

/// Sort items by expiry date, soonest first.
///
/// Items whose expiry date does not parse sort after all valid dates and
/// keep their relative order.
pub fn sort_by_expiry_date(items: &[InventoryItem]) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by_cached_key(|item| match parse_expiry_date(&item.expires_on) {
        Ok(date) => (false, Some(date)),
        Err(e) => {
            tracing::warn!("Sorting {} to the end: {}", item.name, e);
            (true, None)
        }
    });
    sorted
}

/// Sort items by name in German dictionary order.
pub fn sort_by_name(items: &[InventoryItem]) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_german(&a.name, &b.name));
    sorted
}

/// Sort items by category label in German dictionary order.
pub fn sort_by_category(items: &[InventoryItem]) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_german(&a.category, &b.category));
    sorted
}
