//! Typed wrappers around [`StoreClient`](store_framework::StoreClient), one per store.

pub mod cart_client;
pub mod order_client;

pub use cart_client::*;
pub use order_client::*;
