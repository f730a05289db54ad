//! Access guard applied on every navigation.

use crate::route::{Access, Route};
use fitstore_auth::Role;
use serde::{Deserialize, Serialize};

/// Outcome of a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "route", rename_all = "lowercase")]
pub enum Navigation {
    /// Show the requested view.
    Render(Route),
    /// Go somewhere else instead.
    Redirect(Route),
}

impl Navigation {
    /// The view that ends up on screen.
    pub fn route(&self) -> &Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirect(_))
    }
}

/// Decide whether `viewer` (`None` when anonymous) may see `route`.
///
/// Anonymous visitors to protected views go to `/login`; logged-in
/// buyers on seller views go to `/`.
pub fn guard(route: Route, viewer: Option<Role>) -> Navigation {
    match (route.access(), viewer) {
        (Access::Public, _) => Navigation::Render(route),
        (_, None) => Navigation::Redirect(Route::Login),
        (Access::Authenticated, Some(_)) => Navigation::Render(route),
        (Access::Seller, Some(Role::Seller)) => Navigation::Render(route),
        (Access::Seller, Some(_)) => Navigation::Redirect(Route::Home),
    }
}

/// Where to go right after logging in or registering.
pub fn landing_for(role: Role) -> Route {
    match role {
        Role::Seller => Route::SellerDashboard,
        Role::Buyer => Route::Home,
    }
}
