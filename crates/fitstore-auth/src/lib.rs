//! Authentication module for FitStore.
//!
//! Provides the simulated login against demo accounts, registration, and
//! the persisted session container.

mod accounts;
mod error;
mod session;
mod token;
mod user;

pub use accounts::{DemoAccounts, Registration, DEMO_PASSWORD};
pub use error::AuthError;
pub use session::SessionStore;
pub use token::AuthToken;
pub use user::{ProfileUpdate, Role, User};
