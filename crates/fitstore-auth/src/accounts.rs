//! Demo accounts and the registration form.

use crate::user::{Role, User};
use crate::AuthError;
use fitstore_commerce::address::AddressBook;
use fitstore_commerce::demo;
use fitstore_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Shared password of the demo accounts.
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug, Clone)]
struct DemoAccount {
    user: User,
    password: String,
}

/// The fixed set of accounts that can log in.
#[derive(Debug, Clone)]
pub struct DemoAccounts {
    accounts: Vec<DemoAccount>,
}

impl Default for DemoAccounts {
    fn default() -> Self {
        let buyer = User {
            addresses: AddressBook::from(vec![demo::buyer_address()]),
            ..User::new(
                UserId::new(demo::DEMO_BUYER_ID),
                "Rahul Sharma",
                "rahul@example.com",
                Role::Buyer,
            )
            .with_phone("+91 98765 43210")
        };
        let seller = User::new(
            UserId::new(demo::DEMO_SELLER_ID),
            "FitStore Team",
            "seller@example.com",
            Role::Seller,
        )
        .with_phone("+91 91234 56780");

        Self {
            accounts: vec![
                DemoAccount {
                    user: buyer,
                    password: DEMO_PASSWORD.to_string(),
                },
                DemoAccount {
                    user: seller,
                    password: DEMO_PASSWORD.to_string(),
                },
            ],
        }
    }
}

impl DemoAccounts {
    /// Exact email and password match.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.clone())
            .ok_or_else(|| {
                warn!(email, "rejected login");
                AuthError::InvalidCredentials
            })
    }

    /// Email and password of the first demo account with `role`.
    pub fn demo_credentials(&self, role: Role) -> Option<(&str, &str)> {
        self.accounts
            .iter()
            .find(|a| a.user.role == role)
            .map(|a| (a.user.email.as_str(), a.password.as_str()))
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.accounts.iter().map(|a| &a.user)
    }
}

/// Sign-up form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Registration {
    /// Check the form. Messages match what the sign-up page shows.
    pub fn validate(&self, min_password_len: usize) -> Result<(), AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(AuthError::Validation("Enter a valid email address".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(AuthError::Validation("Passwords do not match".to_string()));
        }
        if self.password.chars().count() < min_password_len {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                min_password_len
            )));
        }
        Ok(())
    }

    /// Build the new user record with a generated id and no addresses.
    /// The password is not kept.
    pub fn into_user(self) -> User {
        User::new(UserId::generate(), self.name.trim(), self.email.trim(), self.role)
            .with_phone(self.phone.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> Registration {
        Registration {
            name: "Neha".to_string(),
            email: "neha@example.com".to_string(),
            phone: "9000000000".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role: Role::Seller,
        }
    }

    #[test]
    fn test_authenticate_demo_buyer() {
        let accounts = DemoAccounts::default();
        let user = accounts.authenticate("rahul@example.com", DEMO_PASSWORD).unwrap();
        assert_eq!(user.role, Role::Buyer);
        assert!(user.addresses.primary().is_some());
    }

    #[test]
    fn test_authenticate_rejects_wrong_password() {
        let accounts = DemoAccounts::default();
        let err = accounts.authenticate("rahul@example.com", "nope").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_demo_credentials_log_in() {
        let accounts = DemoAccounts::default();
        let (email, password) = accounts.demo_credentials(Role::Seller).unwrap();
        assert!(accounts.authenticate(email, password).unwrap().is_seller());
    }

    #[test]
    fn test_registration_messages() {
        let err = form("secret1", "secret2").validate(6).unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");

        let err = form("abc", "abc").validate(6).unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");

        assert!(form("secret1", "secret1").validate(6).is_ok());
    }

    #[test]
    fn test_registration_into_user() {
        let user = form("secret1", "secret1").into_user();
        assert!(user.id.as_str().starts_with("user"));
        assert_eq!(user.role, Role::Seller);
        assert!(user.addresses.is_empty());
    }
}
