//! Local key-value persistence for FitStore.
//!
//! Every state container in the storefront (session, cart, wishlist, ...)
//! owns exactly one key in a small key-value store and rewrites it in full
//! after each mutation. This crate provides that store with automatic JSON
//! serialization.
//!
//! # Example
//!
//! ```rust
//! use fitstore_cache::{keys, Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set(keys::TOKEN, &"abc123".to_string()).unwrap();
//! let token: Option<String> = cache.get(keys::TOKEN).unwrap();
//! assert_eq!(token.as_deref(), Some("abc123"));
//!
//! cache.delete(keys::TOKEN).unwrap();
//! assert!(!cache.exists(keys::TOKEN).unwrap());
//! ```

mod error;
pub mod keys;
mod kv;

pub use error::CacheError;
pub use kv::{Cache, FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::keys;
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
