//! Cart state, its reducer and the derived selectors.
//!
//! Selectors are plain methods over a snapshot. Nothing derived (count, total) is stored,
//! so it cannot drift from the lines it is computed from.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::model::{lines_total, CartLine, FoodItem, ItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use store_framework::StoreState;

/// The selected items, in the order they were first added.
///
/// Holds at most one line per item id, and every line has a quantity of at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of quantities over all lines.
    ///
    /// Widened to `u64` since every line may hold up to `u32::MAX`.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Decimal {
        lines_total(&self.lines)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of the given item, if it is in the cart.
    pub fn quantity_of(&self, id: &ItemId) -> Option<u32> {
        self.line(id).map(|line| line.quantity)
    }

    fn line(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.item.id == id)
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|line| &line.item.id == id)
    }

    fn add_item(&mut self, item: FoodItem) -> Result<u32, CartError> {
        match self.position(&item.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.checked_add(1).ok_or_else(|| {
                    CartError::InvalidQuantity(format!(
                        "{} already at the maximum of {}",
                        item.id,
                        u32::MAX
                    ))
                })?;
                Ok(line.quantity)
            }
            None => {
                self.lines.push(CartLine::new(item));
                Ok(1)
            }
        }
    }

    fn remove_item(&mut self, id: &ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.item.id != id);
        self.lines.len() != before
    }

    fn set_quantity(&mut self, id: &ItemId, quantity: i64) -> Result<Option<u32>, CartError> {
        let Some(idx) = self.position(id) else {
            return Ok(None);
        };
        if quantity <= 0 {
            self.lines.remove(idx);
            return Ok(None);
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            CartError::InvalidQuantity(format!("{} exceeds the maximum of {}", quantity, u32::MAX))
        })?;
        self.lines[idx].quantity = quantity;
        Ok(Some(quantity))
    }
}

impl StoreState for CartState {
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Error = CartError;

    fn reduce(&mut self, action: CartAction) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::AddItem(item) => self
                .add_item(item)
                .map(|quantity| CartActionResult::ItemAdded { quantity }),
            CartAction::RemoveItem(id) => Ok(CartActionResult::ItemRemoved {
                existed: self.remove_item(&id),
            }),
            CartAction::SetQuantity { id, quantity } => {
                self.set_quantity(&id, quantity).map(CartActionResult::QuantitySet)
            }
            CartAction::Clear => {
                let removed = self.lines.len();
                self.lines.clear();
                Ok(CartActionResult::Cleared { removed })
            }
        }
    }
}

/// Parses a quantity typed by the user.
///
/// Accepts a positive integer, surrounding whitespace allowed. Anything else (empty text,
/// letters, fractions, trailing garbage such as `3abc`, zero, negatives) is rejected whole
/// so the caller can revert the field.
pub fn parse_quantity_input(raw: &str) -> Result<u32, CartError> {
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(CartError::InvalidQuantity(raw.to_string())),
    }
}
