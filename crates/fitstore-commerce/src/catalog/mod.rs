//! Catalog module.
//!
//! Contains the product record, the read-only catalog and the seller's
//! product editor.

mod editor;
mod product;
mod store;

pub use editor::{ProductDraft, ProductEditor};
pub use product::{Category, Product};
pub use store::Catalog;
