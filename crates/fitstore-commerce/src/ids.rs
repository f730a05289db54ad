//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an OrderId where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id($prefix))
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId, "prod");
define_id!(OrderId, "order");
define_id!(UserId, "user");
define_id!(AddressId, "addr");
define_id!(ChatId, "chat");
define_id!(ReplyId, "reply");

/// Generate a unique ID from the wall clock and a process-wide counter.
///
/// Format: `<prefix><millis><counter>`, e.g. `addr1712345678901003`.
fn generate_id(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let millis = chrono::Utc::now().timestamp_millis();
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed) % 1000;
    format!("{}{}{:03}", prefix, millis, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("p1");
        assert_eq!(id.as_str(), "p1");
    }

    #[test]
    fn test_id_generation_is_unique() {
        let id1 = AddressId::generate();
        let id2 = AddressId::generate();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("addr"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = UserId::new("user1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"user1\"");
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new("ORD001");
        assert_eq!(format!("{}", id), "ORD001");
    }
}
