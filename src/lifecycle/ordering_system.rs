use crate::cart_store::CartError;
use crate::clients::{CartClient, OrderClient};
use crate::gateway::{OrderGateway, SimulatedGateway};
use crate::lifecycle::checkout::{submit_order_and_clear_cart, CheckoutOutcome};
use crate::lifecycle::config::SystemConfig;
use crate::{cart_store, order_store};
use std::sync::Arc;
use store_framework::StoreHandle;
use tracing::{error, info};

/// The runtime that owns both stores.
///
/// `OrderingSystem` is responsible for:
/// - **Lifecycle Management**: Spawning the cart and order stores and stopping them
/// - **Dependency Wiring**: Handing the order client its gateway
/// - **Checkout**: Running submit-and-clear against the current cart
///
/// # Example
///
/// ```rust
/// use food_ordering::catalog::Catalog;
/// use food_ordering::lifecycle::{CheckoutOutcome, OrderingSystem, SystemConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderingSystem::with_config(SystemConfig {
///         submit_delay_ms: 1,
///         ..SystemConfig::default()
///     });
///
///     let salad = Catalog::standard().find_item(&"food-3".into()).cloned().ok_or("no salad")?;
///     system.cart_client.add_item(salad).await?;
///
///     assert!(matches!(system.checkout().await?, CheckoutOutcome::Submitted(_)));
///     assert!(system.cart_client.is_empty().await?);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderingSystem {
    /// Client for the cart store
    pub cart_client: CartClient,

    /// Client for the order history store
    pub order_client: OrderClient,

    /// Task handles for both store actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderingSystem {
    /// Starts both stores with the default configuration and a simulated gateway.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Starts both stores, using a [`SimulatedGateway`] with the configured delay.
    pub fn with_config(config: SystemConfig) -> Self {
        let gateway = Arc::new(SimulatedGateway::new(config.submit_delay()));
        Self::with_gateway(config, gateway)
    }

    /// Starts both stores, submitting orders through `gateway`.
    pub fn with_gateway(config: SystemConfig, gateway: Arc<dyn OrderGateway>) -> Self {
        info!(?config, "Starting ordering system");

        let (cart_actor, cart_client) = cart_store::new(config.buffer_size);
        let (order_actor, order_client) = order_store::new(config.buffer_size);

        let cart_handle = tokio::spawn(cart_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            cart_client: CartClient::new(cart_client),
            order_client: OrderClient::new(order_client, gateway),
            handles: vec![cart_handle, order_handle],
        }
    }

    /// Submits whatever is in the cart right now and clears it on success.
    ///
    /// Only reading the cart can fail; submission failures come back as
    /// [`CheckoutOutcome::Failed`].
    pub async fn checkout(&self) -> Result<CheckoutOutcome, CartError> {
        let lines = self.cart_client.snapshot().await?.lines().to_vec();
        Ok(submit_order_and_clear_cart(&self.cart_client, &self.order_client, lines).await)
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping the clients closes the request channels; each store finishes the requests
    /// already queued and exits. Clones of the clients held elsewhere keep their store alive,
    /// so drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both stores shut down cleanly
    /// - `Err(String)` if a store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.cart_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
