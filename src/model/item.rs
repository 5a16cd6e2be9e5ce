//! Catalog entries: food items and the categories they are listed under.
//!
//! Items are immutable. The stores copy them into cart lines and orders but never change them.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog items (e.g. `food-1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type-safe identifier for menu categories (e.g. `drink`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub String);

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: ItemId,
    pub category_id: CategoryId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl FoodItem {
    /// Creates a new FoodItem.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier, unique across the menu
    /// * `category_id` - Category the item is listed under
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `description` - Short menu description
    pub fn new(
        id: impl Into<ItemId>,
        category_id: impl Into<CategoryId>,
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}
