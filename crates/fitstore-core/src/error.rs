//! Error types for the storefront context.

use fitstore_auth::AuthError;
use fitstore_cache::CacheError;
use fitstore_commerce::CommerceError;
use fitstore_router::RouteError;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The action needs a logged-in user.
    #[error("Please login to continue")]
    LoginRequired,

    /// The action is part of the seller back-office.
    #[error("This page is only available to sellers")]
    SellerOnly,

    /// Sellers cannot shop from the storefront.
    #[error("Seller accounts cannot shop")]
    BuyersOnly,

    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// The domain error behind this one, including address errors raised
    /// through the session.
    pub fn commerce(&self) -> Option<&CommerceError> {
        match self {
            StoreError::Commerce(err) | StoreError::Auth(AuthError::Commerce(err)) => Some(err),
            _ => None,
        }
    }

    /// Check if the error is a missing entity, rendered as a not-found view.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.commerce(),
            Some(
                CommerceError::ProductNotFound(_)
                    | CommerceError::OrderNotFound(_)
                    | CommerceError::AddressNotFound(_)
                    | CommerceError::ChatNotFound(_)
            )
        )
    }

    /// Check if this is a form validation error shown inline.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Auth(AuthError::Validation(_)))
            || matches!(
                self.commerce(),
                Some(
                    CommerceError::ValidationError(_)
                        | CommerceError::InvalidPincode(_)
                        | CommerceError::InvalidQuantity(_)
                )
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_errors_through_session_classify() {
        let err = StoreError::from(AuthError::from(CommerceError::InvalidPincode("12".into())));
        assert!(err.is_validation());
        assert!(!err.is_not_found());

        let err = StoreError::from(AuthError::from(CommerceError::AddressNotFound("a1".into())));
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_auth_failures_are_neither() {
        let err = StoreError::from(AuthError::InvalidCredentials);
        assert!(!err.is_validation());
        assert!(!err.is_not_found());
        assert!(StoreError::LoginRequired.commerce().is_none());
    }
}
