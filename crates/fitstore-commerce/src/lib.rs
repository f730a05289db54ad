//! Storefront domain types and state containers for FitStore.
//!
//! This crate provides the types behind the supplement storefront:
//!
//! - **Catalog**: Products, categories, seller product editing
//! - **Cart**: Cart lines, the persisted cart, order summary
//! - **Wishlist**: Saved products
//! - **Search**: Category/text filtering and stable sorting
//! - **Orders**: Order records, the seller order board and dashboard
//! - **Chat**: The community feedback board
//!
//! # Example
//!
//! ```rust
//! use fitstore_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let query = ProductQuery::new()
//!     .with_category(Category::PreWorkout)
//!     .with_sort(SortKey::PriceAsc);
//! let listing = query.apply(&catalog);
//!
//! let mut cart = Cart::new();
//! cart.add(listing[0], 2).unwrap();
//! let summary = CartSummary::compute(&cart, &PricingRules::default()).unwrap();
//! println!("Total: {}", summary.grand_total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod address;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod demo;
pub mod orders;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, ProductDraft, ProductEditor};

    // Cart and wishlist
    pub use crate::cart::{Cart, CartLine, CartStore, CartSummary, PricingRules};
    pub use crate::wishlist::{Wishlist, WishlistStore};

    // Addresses and orders
    pub use crate::address::{Address, AddressBook, AddressDraft};
    pub use crate::orders::{
        DashboardRules, Order, OrderBoard, OrderItem, OrderStatus, SellerDashboard, StatusCounts,
    };

    // Search
    pub use crate::search::{ProductQuery, SortKey};

    // Chat
    pub use crate::chat::{ChatBoard, ChatPost, ChatReply};
}
