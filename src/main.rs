use food_ordering::catalog::Catalog;
use food_ordering::lifecycle::{CheckoutOutcome, OrderingSystem};
use store_framework::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting food ordering demo");

    let system = OrderingSystem::new();
    let catalog = Catalog::standard();

    let span = tracing::info_span!("fill_cart");
    async {
        for id in ["food-1", "food-1", "food-2"] {
            let item = catalog
                .find_item(&id.into())
                .cloned()
                .ok_or_else(|| format!("Unknown menu item: {}", id))?;
            let quantity = system
                .cart_client
                .add_item(item)
                .await
                .map_err(|e| e.to_string())?;
            info!(item_id = id, quantity, "Added to cart");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let total = system.cart_client.total().await.map_err(|e| e.to_string())?;
    info!(%total, "Cart ready");

    let span = tracing::info_span!("checkout");
    let outcome = async {
        info!("Submitting cart");
        system.checkout().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    match outcome {
        CheckoutOutcome::Submitted(order) => {
            info!(
                order_id = %order.id,
                total = %order.total,
                date = %order.iso_date(),
                "Order placed"
            )
        }
        CheckoutOutcome::Skipped => info!("Nothing to order"),
        CheckoutOutcome::Failed => error!("Order submission failed"),
    }

    for order in system.order_client.orders().await.map_err(|e| e.to_string())? {
        info!(
            order_id = %order.id,
            items = order.item_count(),
            total = %order.total,
            "History entry"
        );
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
