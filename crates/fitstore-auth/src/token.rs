//! Session tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session token, persisted verbatim under the `token` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Issue a fresh random token.
    pub fn issue() -> Self {
        Self(generate_token_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AuthToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Generate a URL-safe random token string.
fn generate_token_string() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 24] = rand::thread_rng().gen();
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = AuthToken::issue();
        // 24 bytes base64 encoded
        assert_eq!(token.as_str().len(), 32);
        assert!(token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_unique_tokens() {
        assert_ne!(AuthToken::issue(), AuthToken::issue());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let token = AuthToken::from("abc".to_string());
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"abc\"");
    }
}
