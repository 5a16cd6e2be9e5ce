//! Actions accepted by the cart store.
//!
//! These are handled by [`StoreState::reduce`](store_framework::StoreState::reduce) on
//! [`CartState`](super::CartState).

use crate::model::{FoodItem, ItemId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of the item, appending a new line if the item is not in the cart yet.
    AddItem(FoodItem),
    /// Removes the item's line. Unknown ids are ignored.
    RemoveItem(ItemId),
    /// Sets the quantity of an existing line.
    ///
    /// A quantity of zero or below removes the line. Unknown ids are ignored.
    SetQuantity { id: ItemId, quantity: i64 },
    /// Empties the cart.
    Clear,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartActionResult {
    /// The item's quantity after the add.
    ItemAdded { quantity: u32 },
    /// Whether a line was actually removed.
    ItemRemoved { existed: bool },
    /// The line's quantity afterwards; `None` when the line was removed or never existed.
    QuantitySet(Option<u32>),
    /// How many lines were dropped.
    Cleared { removed: usize },
}
