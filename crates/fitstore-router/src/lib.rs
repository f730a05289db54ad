//! Routing for the FitStore storefront.
//!
//! The path table is fixed:
//!
//! ```text
//! /                    -> Home
//! /products            -> Products (search, category, sort query)
//! /product/:id         -> Product
//! /cart, /wishlist, /chat, /login, /register
//! /profile, /addresses -> need a session
//! /seller/dashboard    -> need a seller session
//! /seller/products
//! /seller/orders
//! *                    -> NotFound
//! ```
//!
//! # Usage
//!
//! ```rust
//! use fitstore_auth::Role;
//! use fitstore_router::{guard, Navigation, Route};
//!
//! let route = Route::parse("/seller/orders").unwrap();
//! assert_eq!(guard(route, Some(Role::Buyer)), Navigation::Redirect(Route::Home));
//! ```

mod error;
mod guard;
mod route;

pub use error::RouteError;
pub use guard::{guard, landing_for, Navigation};
pub use route::{Access, ProductsParams, Route};
