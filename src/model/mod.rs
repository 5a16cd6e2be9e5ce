//! Plain data types shared by the stores: catalog items, cart lines and orders.

pub mod cart;
pub mod item;
pub mod order;

pub use cart::*;
pub use item::*;
pub use order::*;
