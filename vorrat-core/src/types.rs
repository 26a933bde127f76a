//! Record types for the household inventory domain.
//!
//! Serde renames map onto the German document keys the app persists
//! (`kategorie`, `haltbarBis`, `gekauft`, ...), so these types serialize
//! directly onto existing documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default free-form amount for entries added without one ("1 piece").
pub const DEFAULT_AMOUNT: &str = "1 Stk.";

/// A stocked item in the household inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "kategorie")]
    pub category: String,
    /// Free-form amount, e.g. "500g" or "1 Stk.".
    #[serde(rename = "menge")]
    pub amount: String,
    /// Expiry date in ISO format (YYYY-MM-DD).
    #[serde(rename = "haltbarBis")]
    pub expires_on: String,
    #[serde(rename = "bildUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "erstelltAm")]
    pub created_at: DateTime<Utc>,
    /// Product details from a barcode lookup, when the item was scanned.
    #[serde(
        rename = "productInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_info: Option<ProductInfo>,
}

/// An item recognized on a photo or via barcode, not yet added to the
/// inventory. Missing fields are filled with defaults on add.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedItem {
    pub name: String,
    #[serde(rename = "kategorie")]
    pub category: String,
    #[serde(rename = "menge", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(
        rename = "haltbarBis",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_on: Option<String>,
    #[serde(rename = "bildUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(
        rename = "productInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_info: Option<ProductInfo>,
}

/// A stored recipe. Ingredient lines are free-form ("200g Mehl").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    #[serde(rename = "titel")]
    pub title: String,
    #[serde(
        rename = "zubereitungszeit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prep_time: Option<String>,
    #[serde(rename = "zutaten")]
    pub ingredients: Vec<String>,
    #[serde(rename = "anleitung")]
    pub instructions: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "erstelltAm")]
    pub created_at: DateTime<Utc>,
}

/// An entry on the shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "menge")]
    pub amount: String,
    #[serde(rename = "gekauft")]
    pub purchased: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Product details from a barcode database lookup.
///
/// Field names follow the upstream food-facts API, so no renames here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductInfo {
    pub id: String,
    pub barcode: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_nutrition_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub nutrition_facts: NutritionFacts,
    /// Eco grade "a" through "e", when the database knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_score: Option<String>,
    /// NOVA processing group 1 through 4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nova_group: Option<u8>,
}

/// Per-100g nutrition values. Everything is optional; product databases
/// are sparse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_grade: Option<String>,
}
