use crate::model::FoodItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One catalog item plus the quantity the user selected.
///
/// Inside a cart the quantity is always at least 1; a line whose quantity would drop to
/// zero is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: FoodItem,
    pub quantity: u32,
}

impl CartLine {
    /// A fresh line for `item` with quantity 1.
    pub fn new(item: FoodItem) -> Self {
        Self::with_quantity(item, 1)
    }

    pub fn with_quantity(item: FoodItem, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// `price * quantity` for this line.
    pub fn subtotal(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// Sum of the subtotals of `lines`.
pub fn lines_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::subtotal).sum()
}
