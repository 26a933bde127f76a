//! Expiry notification planning.
//!
//! The planner is pure: it turns inventory items and user settings into a
//! list of [`PlannedNotification`]s with trigger dates and German message
//! strings. Actually registering them with the platform notification API is
//! the app shell's job.

use crate::expiry::parse_expiry_date;
use crate::types::InventoryItem;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// User-configurable notification settings, persisted by the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub enabled: bool,
    /// Lead times in days before expiry, one notification each.
    pub days_before_expiry: Vec<u32>,
    pub daily_digest: bool,
    /// Digest time of day in "HH:MM".
    pub daily_digest_time: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            enabled: true,
            days_before_expiry: vec![1, 3, 7],
            daily_digest: true,
            daily_digest_time: "08:00".to_string(),
        }
    }
}

/// One notification to be delivered on `trigger_on`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedNotification {
    pub item_id: String,
    pub item_name: String,
    /// Days before expiry this notification fires.
    pub lead_days: u32,
    pub trigger_on: NaiveDate,
    pub title: String,
    pub body: String,
}

fn lead_phrase(lead_days: u32) -> String {
    if lead_days == 1 {
        "morgen".to_string()
    } else {
        format!("in {} Tagen", lead_days)
    }
}

/// Plan the expiry notifications for one item.
///
/// One notification per configured lead time, skipping triggers that are
/// not strictly in the future. Disabled settings or an unparsable expiry
/// date plan nothing.
pub fn plan_for_item(
    item: &InventoryItem,
    settings: &NotificationSettings,
    today: NaiveDate,
) -> Vec<PlannedNotification> {
    if !settings.enabled {
        return Vec::new();
    }

    let expiry = match parse_expiry_date(&item.expires_on) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!("Not planning notifications for {}: {}", item.name, e);
            return Vec::new();
        }
    };

    let mut planned = Vec::new();
    for &lead_days in &settings.days_before_expiry {
        let trigger_on = expiry - chrono::Days::new(u64::from(lead_days));
        if trigger_on <= today {
            continue;
        }

        let phrase = lead_phrase(lead_days);
        planned.push(PlannedNotification {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            lead_days,
            trigger_on,
            title: format!("Lebensmittel läuft {} ab!", phrase),
            body: format!(
                "{} läuft {} ab. Vergiss nicht, es zu verbrauchen!",
                item.name, phrase
            ),
        });
    }
    planned
}

/// Plan the expiry notifications for a whole inventory.
pub fn plan_for_inventory(
    items: &[InventoryItem],
    settings: &NotificationSettings,
    today: NaiveDate,
) -> Vec<PlannedNotification> {
    if !settings.enabled {
        return Vec::new();
    }
    items
        .iter()
        .flat_map(|item| plan_for_item(item, settings, today))
        .collect()
}

/// The next notifications to surface, soonest trigger first, capped at
/// `limit` (the home screen card shows three).
pub fn upcoming(planned: &[PlannedNotification], limit: usize) -> Vec<PlannedNotification> {
    let mut sorted = planned.to_vec();
    sorted.sort_by_key(|plan| plan.trigger_on);
    sorted.truncate(limit);
    sorted
}

/// The daily digest time of day, when the digest is active.
///
/// Returns `None` when notifications or the digest are off, or when the
/// configured time does not parse.
pub fn daily_digest_trigger(settings: &NotificationSettings) -> Option<NaiveTime> {
    if !settings.enabled || !settings.daily_digest {
        return None;
    }
    match NaiveTime::parse_from_str(&settings.daily_digest_time, "%H:%M") {
        Ok(time) => Some(time),
        Err(e) => {
            tracing::warn!(
                "Invalid daily digest time {:?}: {}",
                settings.daily_digest_time,
                e
            );
            None
        }
    }
}
