//! The household aggregate: inventory, recipes, shopping list and the
//! statistics they feed.
//!
//! [`Household`] is the in-memory store behind the app screens. Mutators
//! generate document ids and keep the statistics and activity streak in
//! step; persistence and notification delivery live outside this crate.
//! Time always comes in as parameters.

use crate::error::HouseholdError;
use crate::ingredients::find_missing_ingredients;
use crate::notifications::{plan_for_inventory, NotificationSettings, PlannedNotification};
use crate::shopping_list;
use crate::statistics::{BasicStats, ExtendedStats};
use crate::types::{
    DetectedItem, InventoryItem, ProductInfo, Recipe, ShoppingListItem, DEFAULT_AMOUNT,
};
use chrono::{DateTime, Days, NaiveDate, Utc};
use uuid::Uuid;

/// Input for [`Household::add_item`].
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub amount: String,
    /// ISO date (YYYY-MM-DD).
    pub expires_on: String,
    pub image_url: Option<String>,
    pub product_info: Option<ProductInfo>,
}

/// Input for [`Household::add_recipe`].
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub prep_time: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Partial update for an inventory item. `None` fields keep their current
/// value.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub expires_on: Option<String>,
    pub image_url: Option<String>,
    pub product_info: Option<ProductInfo>,
}

/// In-memory store for one household's food data.
#[derive(Debug, Clone)]
pub struct Household {
    owner_id: String,
    items: Vec<InventoryItem>,
    recipes: Vec<Recipe>,
    shopping_list: Vec<ShoppingListItem>,
    basic_stats: BasicStats,
    extended_stats: ExtendedStats,
}

impl Household {
    pub fn new(owner_id: &str) -> Household {
        Household {
            owner_id: owner_id.to_string(),
            items: Vec::new(),
            recipes: Vec::new(),
            shopping_list: Vec::new(),
            basic_stats: BasicStats::default(),
            extended_stats: ExtendedStats::default(),
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn shopping_list(&self) -> &[ShoppingListItem] {
        &self.shopping_list
    }

    pub fn basic_stats(&self) -> &BasicStats {
        &self.basic_stats
    }

    pub fn extended_stats(&self) -> &ExtendedStats {
        &self.extended_stats
    }

    /// Add one item and record it in the statistics.
    pub fn add_item(
        &mut self,
        new: NewItem,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> InventoryItem {
        let item = InventoryItem {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            category: new.category,
            amount: new.amount,
            expires_on: new.expires_on,
            image_url: new.image_url,
            user_id: self.owner_id.clone(),
            created_at: now,
            product_info: new.product_info,
        };
        self.record_added(&item, today);
        self.basic_stats.advance_streak(today);
        tracing::info!("Added {} to inventory", item.name);
        self.items.push(item.clone());
        item
    }

    /// Add a batch of detected items (photo recognition, barcode scan).
    ///
    /// Missing or empty fields get defaults: the default amount and an
    /// expiry one week out. Statistics count every item; the activity
    /// streak advances once for the whole batch.
    pub fn add_detected_items(
        &mut self,
        detected: Vec<DetectedItem>,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Vec<InventoryItem> {
        let default_expiry = (today + Days::new(7)).to_string();

        let mut added = Vec::with_capacity(detected.len());
        for entry in detected {
            let item = InventoryItem {
                id: Uuid::new_v4().to_string(),
                name: entry.name,
                category: entry.category,
                amount: entry
                    .amount
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| DEFAULT_AMOUNT.to_string()),
                expires_on: entry
                    .expires_on
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| default_expiry.clone()),
                image_url: entry.image_url,
                user_id: self.owner_id.clone(),
                created_at: now,
                product_info: entry.product_info,
            };
            self.record_added(&item, today);
            self.items.push(item.clone());
            added.push(item);
        }

        if !added.is_empty() {
            self.basic_stats.advance_streak(today);
            tracing::info!("Added {} detected items to inventory", added.len());
        }
        added
    }

    /// Apply a partial update to an item. Returns the updated item.
    pub fn update_item(&mut self, id: &str, patch: ItemPatch) -> Result<InventoryItem, HouseholdError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| HouseholdError::ItemNotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(amount) = patch.amount {
            item.amount = amount;
        }
        if let Some(expires_on) = patch.expires_on {
            item.expires_on = expires_on;
        }
        if let Some(image_url) = patch.image_url {
            item.image_url = Some(image_url);
        }
        if let Some(product_info) = patch.product_info {
            item.product_info = Some(product_info);
        }

        tracing::debug!("Updated inventory item {}", id);
        Ok(item.clone())
    }

    /// Remove an item that was used up. Returns the removed item.
    pub fn mark_consumed(&mut self, id: &str) -> Result<InventoryItem, HouseholdError> {
        let item = self.take_item(id)?;
        tracing::info!("Marked {} as consumed", item.name);
        Ok(item)
    }

    /// Remove an item. Returns the removed item.
    pub fn remove_item(&mut self, id: &str) -> Result<InventoryItem, HouseholdError> {
        let item = self.take_item(id)?;
        tracing::info!("Removed {} from inventory", item.name);
        Ok(item)
    }

    /// Add a recipe.
    pub fn add_recipe(&mut self, new: NewRecipe, now: DateTime<Utc>) -> Recipe {
        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            prep_time: new.prep_time,
            ingredients: new.ingredients,
            instructions: new.instructions,
            user_id: self.owner_id.clone(),
            created_at: now,
        };
        tracing::info!("Added recipe {}", recipe.title);
        self.recipes.push(recipe.clone());
        recipe
    }

    /// Add a batch of recipes (e.g. imported), sharing one timestamp.
    pub fn add_recipes(&mut self, new: Vec<NewRecipe>, now: DateTime<Utc>) -> Vec<Recipe> {
        new.into_iter()
            .map(|recipe| self.add_recipe(recipe, now))
            .collect()
    }

    /// Remove a recipe. Returns the removed recipe.
    pub fn remove_recipe(&mut self, id: &str) -> Result<Recipe, HouseholdError> {
        let index = self
            .recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or_else(|| HouseholdError::RecipeNotFound(id.to_string()))?;
        let recipe = self.recipes.remove(index);
        tracing::info!("Removed recipe {}", recipe.title);
        Ok(recipe)
    }

    /// Recipes newest first, the way the recipe screen lists them.
    pub fn recipes_newest_first(&self) -> Vec<Recipe> {
        let mut sorted = self.recipes.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }

    /// Add a shopping list entry, merging with an existing entry of the
    /// same name.
    pub fn add_shopping_entry(&mut self, name: &str, amount: &str) -> String {
        shopping_list::add_entry(&mut self.shopping_list, name, amount, &self.owner_id)
    }

    /// Add a batch of name/amount pairs to the shopping list.
    pub fn add_shopping_entries(&mut self, entries: &[(String, String)]) -> Vec<String> {
        shopping_list::add_entries(&mut self.shopping_list, entries, &self.owner_id)
    }

    /// Put every ingredient the stored recipes need but the inventory lacks
    /// on the shopping list. Returns the missing ingredient names.
    pub fn add_missing_to_shopping_list(&mut self) -> Vec<String> {
        let missing = find_missing_ingredients(&self.recipes, &self.items);
        shopping_list::add_missing_ingredients(&mut self.shopping_list, &missing, &self.owner_id);
        missing
    }

    /// Set the bought flag on a shopping list entry.
    pub fn set_entry_purchased(&mut self, id: &str, purchased: bool) -> Result<(), HouseholdError> {
        shopping_list::set_purchased(&mut self.shopping_list, id, purchased)
    }

    /// Remove a shopping list entry.
    pub fn remove_shopping_entry(&mut self, id: &str) -> Result<(), HouseholdError> {
        shopping_list::remove_entry(&mut self.shopping_list, id)
    }

    /// Remove all bought entries. Returns how many were removed.
    pub fn clear_purchased_entries(&mut self) -> usize {
        shopping_list::clear_purchased(&mut self.shopping_list)
    }

    /// The shopping list in display order (open entries first).
    pub fn shopping_list_sorted(&self) -> Vec<ShoppingListItem> {
        shopping_list::sorted_for_display(&self.shopping_list)
    }

    /// Plan expiry notifications for the whole inventory.
    pub fn plan_notifications(
        &self,
        settings: &NotificationSettings,
        today: NaiveDate,
    ) -> Vec<PlannedNotification> {
        plan_for_inventory(&self.items, settings, today)
    }

    fn record_added(&mut self, item: &InventoryItem, today: NaiveDate) {
        self.basic_stats.record_item();
        self.extended_stats
            .record_item(&item.category, item.product_info.as_ref(), today);
    }

    fn take_item(&mut self, id: &str) -> Result<InventoryItem, HouseholdError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| HouseholdError::ItemNotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }
}
