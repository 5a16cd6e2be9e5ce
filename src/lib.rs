//! # Food Ordering
//!
//! The state core of a food-ordering application: a cart the user fills from a menu, an
//! order history, and the asynchronous submission that turns one into the other.
//!
//! ## Core Components
//!
//! - **[catalog]**: The read-only menu ([`Catalog::standard`](catalog::Catalog::standard)).
//! - **[model]**: Plain data ([`FoodItem`](model::FoodItem), [`CartLine`](model::CartLine),
//!   [`Order`](model::Order), [`OrderStatus`](model::OrderStatus)).
//! - **[cart_store]** / **[order_store]**: The two stores, each a reducer over its own state,
//!   run by a [`StoreActor`](store_framework::StoreActor).
//! - **[clients]**: Typed wrappers ([`CartClient`](clients::CartClient),
//!   [`OrderClient`](clients::OrderClient)) that hide the message passing.
//! - **[gateway]**: Where submitted orders go ([`OrderGateway`](gateway::OrderGateway)).
//! - **[lifecycle]**: Wiring, checkout and shutdown ([`OrderingSystem`](lifecycle::OrderingSystem)).
//!
//! ## Quick Start
//!
//! ```rust
//! use food_ordering::catalog::Catalog;
//! use food_ordering::lifecycle::{CheckoutOutcome, OrderingSystem, SystemConfig};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = OrderingSystem::with_config(SystemConfig {
//!         submit_delay_ms: 1,
//!         ..SystemConfig::default()
//!     });
//!     let catalog = Catalog::standard();
//!
//!     for id in ["food-1", "food-1", "food-2"] {
//!         let item = catalog.find_item(&id.into()).cloned().ok_or("unknown item")?;
//!         system.cart_client.add_item(item).await?;
//!     }
//!     assert_eq!(system.cart_client.total().await?, Decimal::new(3097, 2));
//!
//!     match system.checkout().await? {
//!         CheckoutOutcome::Submitted(order) => assert_eq!(order.total, Decimal::new(3097, 2)),
//!         other => panic!("checkout did not submit: {:?}", other),
//!     }
//!     assert!(system.cart_client.is_empty().await?);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! See [`store_framework::mock`] for utilities to test clients without spawning store actors.

pub mod cart_store;
pub mod catalog;
pub mod clients;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod order_store;
