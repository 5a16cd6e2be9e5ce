//! A submitted order: an immutable snapshot of cart lines with its total and timestamp.
//!
//! Orders are built by the order history store (see
//! [`OrderHistory`](crate::order_store::OrderHistory)) and never change afterwards.

use crate::model::{lines_total, CartLine};
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    /// A new time-ordered identifier, `order-<uuid v7>`.
    ///
    /// Later orders sort after earlier ones, and two orders placed in the same
    /// millisecond still get distinct ids.
    pub fn generate() -> Self {
        Self(format!("order-{}", uuid7::uuid7()))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<CartLine>,
    pub date: DateTime<Utc>,
    pub total: Decimal,
}

impl Order {
    /// Builds an order from `lines`, stamping a new id and the current time.
    ///
    /// `total` is computed here once and never recomputed.
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self::placed_at(lines, Utc::now())
    }

    /// Same as [`Order::new`] with an explicit timestamp.
    pub fn placed_at(lines: Vec<CartLine>, date: DateTime<Utc>) -> Self {
        let total = lines_total(&lines);
        Self {
            id: OrderId::generate(),
            lines,
            date,
            total,
        }
    }

    /// The timestamp as ISO-8601 with millisecond precision, e.g. `2025-01-01T00:00:00.000Z`.
    pub fn iso_date(&self) -> String {
        self.date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Submission lifecycle of the order history store.
///
/// ```text
/// Idle ──submit──▶ Submitting ──ok──▶ Idle
///                      │
///                      └──err──▶ Failed ──retry──▶ Submitting
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Idle,
    Submitting,
    Failed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Idle => "idle",
            OrderStatus::Submitting => "submitting",
            OrderStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}
