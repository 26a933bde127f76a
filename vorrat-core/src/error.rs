use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid expiry date: {0}")]
    InvalidDate(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HouseholdError {
    #[error("No inventory item with id {0}")]
    ItemNotFound(String),

    #[error("No recipe with id {0}")]
    RecipeNotFound(String),

    #[error("No shopping list entry with id {0}")]
    EntryNotFound(String),
}
