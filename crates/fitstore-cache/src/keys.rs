//! Well-known storage keys.
//!
//! Each key is owned by exactly one container; nothing else writes it.

/// Current session user record.
pub const USER: &str = "user";

/// Opaque session token.
pub const TOKEN: &str = "token";

/// Ordered list of wishlisted product records.
pub const WISHLIST: &str = "wishlist";

/// Cart lines.
pub const CART: &str = "cart";

/// Seller-edited product catalog.
pub const CATALOG: &str = "catalog";

/// Orders with seller status changes applied.
pub const ORDERS: &str = "orders";

/// Chat board posts.
pub const CHATS: &str = "chats";
