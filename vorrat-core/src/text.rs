//! German text helpers shared by ingredient matching and name sorting.
//!
//! Inventory names are German ("Äpfel", "Grieß"), so matching and ordering
//! both need to see through umlauts and ß instead of comparing raw bytes.

use std::cmp::Ordering;

/// Fold a name into its matching form: lowercase, with umlauts and ß
/// replaced by their base letters (ä→a, ö→o, ü→u, ß→ss).
///
/// Substring checks between recipe ingredients and stock names run on
/// folded forms so that "Äpfel" and "Apfel" land on the same stem.
pub fn fold_german(input: &str) -> String {
    let mut folded = String::with_capacity(input.len());
    for c in input.to_lowercase().chars() {
        match c {
            'ä' => folded.push('a'),
            'ö' => folded.push('o'),
            'ü' => folded.push('u'),
            'ß' => folded.push_str("ss"),
            _ => folded.push(c),
        }
    }
    folded
}

/// Compare two names in German dictionary order (DIN 5007-1): the folded
/// forms ([`fold_german`]) order first, so umlauts sort with their base
/// letters. Equal folded keys tie-break on the lowercased string, then
/// case-sensitively on the raw string.
pub fn compare_german(a: &str, b: &str) -> Ordering {
    fold_german(a)
        .cmp(&fold_german(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Uppercase the first character of a name ("äpfel" → "Äpfel").
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
