//! # Cart Store
//!
//! The user's current selection of menu items and their quantities.
//!
//! ## Structure
//!
//! - [`state`] - [`CartState`], its reducer and the selectors
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the store actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use food_ordering::cart_store;
//! use food_ordering::catalog::Catalog;
//! use food_ordering::clients::CartClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_store::new(8);
//!     let cart = CartClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let catalog = Catalog::standard();
//!     let burger = catalog.find_item(&"food-1".into()).cloned().ok_or("no burger")?;
//!     cart.add_item(burger.clone()).await?;
//!     cart.add_item(burger).await?;
//!
//!     assert_eq!(cart.item_count().await?, 2);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use store_framework::{StoreActor, StoreClient};

/// Creates a new cart store actor holding an empty cart, plus its client.
pub fn new(buffer_size: usize) -> (StoreActor<CartState>, StoreClient<CartState>) {
    StoreActor::new(buffer_size)
}
