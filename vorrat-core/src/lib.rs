//! Domain engine for the Vorrat household food-inventory tracker.
//!
//! Pure in-process logic: grocery categorization, expiry tracking,
//! recipe-against-inventory matching, shopping list bookkeeping,
//! statistics and notification planning. Persistence and UI live in the
//! apps that embed this crate; time always comes in as parameters.
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Utc};
//! use vorrat_core::{Household, NewItem, NewRecipe};
//!
//! let today = NaiveDate::from_ymd_opt(2023, 5, 20).unwrap();
//! let mut household = Household::new("user-1");
//! household.add_item(
//!     NewItem {
//!         name: "Äpfel".to_string(),
//!         category: "Obst".to_string(),
//!         amount: "6 Stk.".to_string(),
//!         expires_on: "2023-05-27".to_string(),
//!         image_url: None,
//!         product_info: None,
//!     },
//!     Utc::now(),
//!     today,
//! );
//! household.add_recipe(
//!     NewRecipe {
//!         title: "Apfelkuchen".to_string(),
//!         prep_time: None,
//!         ingredients: vec!["3 Äpfel".to_string(), "200g Mehl".to_string()],
//!         instructions: "Backen.".to_string(),
//!     },
//!     Utc::now(),
//! );
//!
//! // The apples are stocked, so only the flour lands on the shopping list.
//! let missing = household.add_missing_to_shopping_list();
//! assert_eq!(missing, vec!["Mehl"]);
//! ```

pub mod barcode;
pub mod categories;
pub mod error;
pub mod expiry;
pub mod household;
pub mod ingredients;
pub mod inventory;
pub mod notifications;
pub mod shopping_list;
pub mod statistics;
pub mod text;
pub mod types;

pub use barcode::is_valid_ean13;
pub use categories::{default_expiry_on, infer_category, Category};
pub use error::{DateError, HouseholdError};
pub use expiry::{
    days_until_expiry, expiring_within, group_by_expiry_date, parse_expiry_date, status_color,
    ExpiryPalette, ExpiryStatus,
};
pub use household::{Household, ItemPatch, NewItem, NewRecipe};
pub use ingredients::{extract_ingredient_name, extract_ingredients, find_missing_ingredients};
pub use inventory::{
    group_by_category, sort_by_category, sort_by_expiry_date, sort_by_name, FALLBACK_CATEGORY,
};
pub use notifications::{
    daily_digest_trigger, plan_for_inventory, plan_for_item, upcoming, NotificationSettings,
    PlannedNotification,
};
pub use statistics::{
    BasicStats, EcoScoreCounts, ExtendedStats, MonthEntry, NovaGroupCounts, NutritionTotals,
    StreakChange,
};
pub use types::{
    DetectedItem, InventoryItem, NutritionFacts, ProductInfo, Recipe, ShoppingListItem,
    DEFAULT_AMOUNT,
};
