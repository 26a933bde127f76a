//! Recipe ingredient extraction and stock matching.
//!
//! Recipe ingredient lines are free-form German ("200g Mehl", "3 Äpfel").
//! Extraction strips the leading quantity and unit; matching checks the
//! extracted names against inventory names to find what still needs buying.

use crate::text::{capitalize_first, fold_german};
use crate::types::{InventoryItem, Recipe};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Matches a leading quantity with an optional unit word, e.g. "200g ",
/// "3 ", "1 Prise ". Capture group 1 is the remaining ingredient name.
static QUANTITY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+\s*[a-zA-ZäöüÄÖÜß]*\s+(.*)").expect("Invalid quantity prefix regex")
});

/// Extract the bare ingredient name from one recipe line.
///
/// The line is trimmed first; "200g Mehl" becomes "mehl", and lines
/// without a quantity prefix pass through lowercased.
pub fn extract_ingredient_name(line: &str) -> String {
    let line = line.trim();
    if let Some(captures) = QUANTITY_PREFIX.captures(line) {
        if let Some(name) = captures.get(1) {
            return name.as_str().trim().to_lowercase();
        }
    }
    line.to_lowercase()
}

/// Extract the bare ingredient names from all lines of a recipe.
pub fn extract_ingredients(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .map(|line| extract_ingredient_name(line))
        .collect()
}

/// Find the ingredients needed by `recipes` that no inventory item covers.
///
/// An ingredient counts as covered when its name and a stock name contain
/// each other in either direction. Containment runs on folded forms
/// ([`fold_german`]) so umlaut variants match: stock "Apfel" covers "Äpfel".
/// The result keeps first-seen order, deduplicated, with names capitalized
/// for display.
pub fn find_missing_ingredients(recipes: &[Recipe], inventory: &[InventoryItem]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for recipe in recipes {
        for ingredient in extract_ingredients(recipe) {
            if seen.insert(ingredient.clone()) {
                unique.push(ingredient);
            }
        }
    }

    let stock: Vec<String> = inventory
        .iter()
        .map(|item| fold_german(&item.name))
        .collect();

    unique
        .into_iter()
        .filter(|ingredient| {
            let folded = fold_german(ingredient);
            !stock
                .iter()
                .any(|name| name.contains(folded.as_str()) || folded.contains(name.as_str()))
        })
        .map(|ingredient| capitalize_first(&ingredient))
        .collect()
}
