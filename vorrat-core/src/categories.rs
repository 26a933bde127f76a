//! Category taxonomy for inventory items.
//!
//! The thirteen fixed categories stock is grouped into, a keyword table for
//! deriving a category from product tags, and per-category default shelf
//! lives. Keyword data is loaded from `data/categories.json` at compile time.

use chrono::{Days, Months, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The fixed set of inventory categories.
///
/// Records store the German display label (`kategorie` field), so the enum
/// round-trips through [`Category::label`] / [`Category::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fruit,
    Vegetables,
    Dairy,
    Meat,
    Fish,
    BakedGoods,
    Beverages,
    Frozen,
    Canned,
    Spices,
    Snacks,
    Sweets,
    Other,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Fruit,
        Category::Vegetables,
        Category::Dairy,
        Category::Meat,
        Category::Fish,
        Category::BakedGoods,
        Category::Beverages,
        Category::Frozen,
        Category::Canned,
        Category::Spices,
        Category::Snacks,
        Category::Sweets,
        Category::Other,
    ];

    /// The German display label, as stored on inventory records.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruit => "Obst",
            Category::Vegetables => "Gemüse",
            Category::Dairy => "Milchprodukte",
            Category::Meat => "Fleisch",
            Category::Fish => "Fisch",
            Category::BakedGoods => "Backwaren",
            Category::Beverages => "Getränke",
            Category::Frozen => "Tiefkühlkost",
            Category::Canned => "Konserven",
            Category::Spices => "Gewürze",
            Category::Snacks => "Snacks",
            Category::Sweets => "Süßigkeiten",
            Category::Other => "Sonstiges",
        }
    }

    /// Look up a category from its German label.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// The raw JSON structure for the category keyword file.
#[derive(Deserialize)]
struct CategoriesData {
    categories: HashMap<String, String>,
}

/// Keyword table loaded from JSON and sorted by keyword length (longest first).
/// This ensures more specific matches are tried before general ones
/// ("meeresfrüchte" must match before "früchte").
static KEYWORD_MAP: LazyLock<Vec<(String, Category)>> = LazyLock::new(|| {
    let json = include_str!("../data/categories.json");
    let data: CategoriesData =
        serde_json::from_str(json).expect("Failed to parse categories.json");

    let mut map: Vec<(String, Category)> = data
        .categories
        .into_iter()
        .map(|(keyword, label)| {
            let category = Category::from_label(&label).unwrap_or(Category::Other);
            (keyword, category)
        })
        .collect();
    // Secondary sort by keyword alphabetically for deterministic ordering.
    map.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    map
});

/// Derive a category from product category tags (e.g. from a barcode lookup).
///
/// Tags are checked in order; the first tag containing a known keyword
/// decides. Matching is case-insensitive. Returns [`Category::Other`] when
/// nothing matches.
pub fn infer_category(tags: &[String]) -> Category {
    for tag in tags {
        let lower = tag.to_lowercase();
        for (keyword, category) in KEYWORD_MAP.iter() {
            if lower.contains(keyword) {
                return *category;
            }
        }
    }
    Category::Other
}

/// Default expiry date for a freshly added item of the given category.
pub fn default_expiry_on(category: Category, today: NaiveDate) -> NaiveDate {
    match category {
        Category::Fruit | Category::Vegetables => today + Days::new(7),
        Category::Dairy => today + Days::new(10),
        Category::Meat | Category::Fish => today + Days::new(3),
        Category::BakedGoods => today + Days::new(5),
        Category::Frozen => today + Months::new(3),
        Category::Canned | Category::Spices | Category::Beverages => today + Months::new(12),
        Category::Snacks | Category::Sweets | Category::Other => today + Days::new(14),
    }
}
