//! Submit-and-clear: turns the cart into an order and empties the cart only if that worked.

use crate::clients::{CartClient, OrderClient};
use crate::model::{CartLine, Order};
use tracing::{error, info, instrument, warn};

/// What a checkout attempt did.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing was submitted.
    Skipped,
    /// The order was recorded and the cart cleared.
    Submitted(Order),
    /// The submission failed; the cart was left as it was.
    Failed,
}

/// Submits `lines` as an order and clears the cart on success.
///
/// Failures are logged here and reported as [`CheckoutOutcome::Failed`]; the order store's
/// status already shows `Failed` to anyone watching it.
#[instrument(skip_all, fields(lines = lines.len()))]
pub async fn submit_order_and_clear_cart(
    cart: &CartClient,
    orders: &OrderClient,
    lines: Vec<CartLine>,
) -> CheckoutOutcome {
    if lines.is_empty() {
        info!("Cart is empty, nothing to submit");
        return CheckoutOutcome::Skipped;
    }

    let order = match orders.submit_order(lines).await {
        Ok(order) => order,
        Err(e) => {
            error!(error = %e, "Failed to submit order");
            return CheckoutOutcome::Failed;
        }
    };

    if let Err(e) = cart.clear().await {
        warn!(
            order_id = %order.id,
            error = %e,
            "Order submitted but the cart could not be cleared"
        );
    }
    CheckoutOutcome::Submitted(order)
}
