//! Expiry math: day counts, traffic-light status and calendar grouping.

use crate::error::DateError;
use crate::types::InventoryItem;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Parse an ISO `YYYY-MM-DD` expiry date.
pub fn parse_expiry_date(expires_on: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(expires_on, "%Y-%m-%d")
        .map_err(|_| DateError::InvalidDate(expires_on.to_string()))
}

/// Signed number of days from `today` until an expiry date.
///
/// Negative means already expired, 0 means it expires today.
pub fn days_until_expiry(expires_on: &str, today: NaiveDate) -> Result<i64, DateError> {
    let expiry = parse_expiry_date(expires_on)?;
    Ok((expiry - today).num_days())
}

/// Traffic-light freshness classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryStatus {
    /// Expired, or expiring within 2 days.
    Red,
    /// Expiring in 3 to 5 days.
    Yellow,
    /// More than 5 days left.
    Green,
}

impl ExpiryStatus {
    /// Classify a signed day count.
    pub fn for_days(days: i64) -> ExpiryStatus {
        if days <= 2 {
            ExpiryStatus::Red
        } else if days <= 5 {
            ExpiryStatus::Yellow
        } else {
            ExpiryStatus::Green
        }
    }
}

/// Display colors for the three expiry states. The app passes its theme
/// colors in; `Default` is the light theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryPalette {
    pub red: String,
    pub yellow: String,
    pub green: String,
}

impl Default for ExpiryPalette {
    fn default() -> Self {
        ExpiryPalette {
            red: "#E53935".to_string(),
            yellow: "#FFA726".to_string(),
            green: "#43A047".to_string(),
        }
    }
}

/// Pick the palette color for a signed day count.
pub fn status_color(days: i64, palette: &ExpiryPalette) -> &str {
    match ExpiryStatus::for_days(days) {
        ExpiryStatus::Red => &palette.red,
        ExpiryStatus::Yellow => &palette.yellow,
        ExpiryStatus::Green => &palette.green,
    }
}

/// Group items by expiry date for the calendar view, earliest date first.
///
/// Items with unparsable dates are skipped with a warning.
pub fn group_by_expiry_date(items: &[InventoryItem]) -> BTreeMap<NaiveDate, Vec<InventoryItem>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<InventoryItem>> = BTreeMap::new();
    for item in items {
        match parse_expiry_date(&item.expires_on) {
            Ok(date) => grouped.entry(date).or_default().push(item.clone()),
            Err(e) => {
                tracing::warn!("Skipping {} in expiry calendar: {}", item.name, e);
            }
        }
    }
    grouped
}

/// Items expiring within the next `days` days, soonest first.
///
/// Today counts as expiring; already-expired items are not included.
pub fn expiring_within(items: &[InventoryItem], days: i64, today: NaiveDate) -> Vec<InventoryItem> {
    let mut upcoming: Vec<(NaiveDate, InventoryItem)> = items
        .iter()
        .filter_map(|item| {
            let date = parse_expiry_date(&item.expires_on).ok()?;
            let left = (date - today).num_days();
            (0..=days).contains(&left).then(|| (date, item.clone()))
        })
        .collect();
    upcoming.sort_by_key(|(date, _)| *date);
    upcoming.into_iter().map(|(_, item)| item).collect()
}
