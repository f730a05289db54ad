//! FitStore core.
//!
//! Wires the state containers of the storefront into one typed context:
//!
//! - **Catalog**: read-only products, edited by sellers
//! - **Cart** and **Wishlist**: per-device containers
//! - **Session**: the logged-in user and their addresses
//! - **Orders** and **Chat**: shared boards
//!
//! Every container starts from its persisted snapshot in a
//! [`fitstore_cache::Cache`] and writes it back on each mutation.
//!
//! # Quick Start
//!
//! ```rust
//! use fitstore_cache::Cache;
//! use fitstore_core::{Storefront, StoreConfig};
//!
//! let mut store = Storefront::open(Cache::in_memory(), StoreConfig::default()).unwrap();
//! store.login("rahul@example.com", "demo123").unwrap();
//!
//! let id = store.catalog().products()[0].id.clone();
//! store.add_to_cart(&id, 2).unwrap();
//! println!("{}", store.cart_summary().unwrap().grand_total);
//! ```

mod app;
mod config;
mod error;

pub use app::*;
pub use config::*;
pub use error::*;
