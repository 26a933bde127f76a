//! Shopping list semantics: merge-on-add, purchase state and display order.

use crate::error::HouseholdError;
use crate::text::compare_german;
use crate::types::{ShoppingListItem, DEFAULT_AMOUNT};
use uuid::Uuid;

/// Add an entry to the list, merging with an existing entry of the same name.
///
/// A name match (exact) updates the amount and clears the bought flag
/// instead of creating a duplicate. Returns the id of the affected entry.
pub fn add_entry(
    list: &mut Vec<ShoppingListItem>,
    name: &str,
    amount: &str,
    user_id: &str,
) -> String {
    if let Some(existing) = list.iter_mut().find(|entry| entry.name == name) {
        existing.amount = amount.to_string();
        existing.purchased = false;
        tracing::debug!("Merged {} into existing shopping list entry", name);
        return existing.id.clone();
    }

    let entry = ShoppingListItem {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        amount: amount.to_string(),
        purchased: false,
        user_id: user_id.to_string(),
    };
    let id = entry.id.clone();
    list.push(entry);
    id
}

/// Add a batch of name/amount pairs, applying the merge rule per name.
///
/// Returns the ids of the affected entries, in input order.
pub fn add_entries(
    list: &mut Vec<ShoppingListItem>,
    entries: &[(String, String)],
    user_id: &str,
) -> Vec<String> {
    entries
        .iter()
        .map(|(name, amount)| add_entry(list, name, amount, user_id))
        .collect()
}

/// Add missing recipe ingredients as entries with the default amount.
///
/// Returns the ids of the affected entries, in input order.
pub fn add_missing_ingredients(
    list: &mut Vec<ShoppingListItem>,
    missing: &[String],
    user_id: &str,
) -> Vec<String> {
    missing
        .iter()
        .map(|name| add_entry(list, name, DEFAULT_AMOUNT, user_id))
        .collect()
}

/// Set the bought flag on an entry.
pub fn set_purchased(
    list: &mut [ShoppingListItem],
    id: &str,
    purchased: bool,
) -> Result<(), HouseholdError> {
    let entry = list
        .iter_mut()
        .find(|entry| entry.id == id)
        .ok_or_else(|| HouseholdError::EntryNotFound(id.to_string()))?;
    entry.purchased = purchased;
    Ok(())
}

/// Remove an entry from the list.
pub fn remove_entry(list: &mut Vec<ShoppingListItem>, id: &str) -> Result<(), HouseholdError> {
    let index = list
        .iter()
        .position(|entry| entry.id == id)
        .ok_or_else(|| HouseholdError::EntryNotFound(id.to_string()))?;
    list.remove(index);
    Ok(())
}

/// Remove all bought entries. Returns how many were removed.
pub fn clear_purchased(list: &mut Vec<ShoppingListItem>) -> usize {
    let before = list.len();
    list.retain(|entry| !entry.purchased);
    let cleared = before - list.len();
    if cleared > 0 {
        tracing::debug!("Cleared {} purchased shopping list entries", cleared);
    }
    cleared
}

/// The list in display order: open entries first, each block in German
/// dictionary order by name.
pub fn sorted_for_display(list: &[ShoppingListItem]) -> Vec<ShoppingListItem> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| {
        a.purchased
            .cmp(&b.purchased)
            .then_with(|| compare_german(&a.name, &b.name))
    });
    sorted
}
