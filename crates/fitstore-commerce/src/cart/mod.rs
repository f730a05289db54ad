//! Shopping cart module.
//!
//! Contains the cart value, its persisted container and the order summary.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartLine};
pub use pricing::{CartSummary, PricingRules};
pub use store::CartStore;
