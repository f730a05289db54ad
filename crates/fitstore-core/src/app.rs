//! The storefront application context.

use crate::{StoreConfig, StoreError};
use chrono::Utc;
use fitstore_auth::{AuthToken, DemoAccounts, ProfileUpdate, Registration, Role, SessionStore, User};
use fitstore_cache::Cache;
use fitstore_commerce::address::AddressDraft;
use fitstore_commerce::cart::{CartStore, CartSummary};
use fitstore_commerce::catalog::{Catalog, Category, Product, ProductDraft, ProductEditor};
use fitstore_commerce::chat::{ChatBoard, ChatPost};
use fitstore_commerce::ids::{AddressId, ChatId, OrderId, ProductId, ReplyId};
use fitstore_commerce::orders::{Order, OrderBoard, OrderStatus, SellerDashboard, StatusCounts};
use fitstore_commerce::search::ProductQuery;
use fitstore_commerce::wishlist::{Wishlist, WishlistStore};
use fitstore_commerce::CommerceError;
use fitstore_router::{guard, landing_for, Navigation, Route};
use serde::Serialize;
use tracing::{debug, info};

/// Home page content.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView<'a> {
    pub featured: &'a [Product],
    pub categories: [Category; 3],
}

/// Product page content.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView<'a> {
    pub product: &'a Product,
    pub related: Vec<&'a Product>,
    /// Flavor preselected on the page.
    pub default_flavor: Option<&'a str>,
    /// Whether the viewer may add to cart or wishlist.
    pub can_buy: bool,
    pub in_wishlist: bool,
    /// Units already in the viewer's cart.
    pub in_cart: i64,
}

/// Typed context owning every state container.
///
/// Each container is initialised from its persisted snapshot when the
/// storefront opens and writes its snapshot back on every mutation.
#[derive(Debug)]
pub struct Storefront {
    config: StoreConfig,
    cache: Cache,
    catalog: Catalog,
    cart: CartStore,
    wishlist: WishlistStore,
    session: SessionStore,
    orders: OrderBoard,
    chat: ChatBoard,
    accounts: DemoAccounts,
}

impl Storefront {
    /// Open the storefront over a cache.
    pub fn open(cache: Cache, config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        let store = Self {
            catalog: Catalog::load(&cache)?,
            cart: CartStore::load(cache.clone())?,
            wishlist: WishlistStore::load(cache.clone())?,
            session: SessionStore::restore(cache.clone())?,
            orders: OrderBoard::load(cache.clone())?,
            chat: ChatBoard::load(cache.clone())?,
            accounts: DemoAccounts::default(),
            config,
            cache,
        };
        debug!(
            products = store.catalog.len(),
            authenticated = store.session.is_authenticated(),
            "storefront opened"
        );
        Ok(store)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn accounts(&self) -> &DemoAccounts {
        &self.accounts
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_seller(&self) -> bool {
        self.session.is_seller()
    }

    fn viewer_role(&self) -> Option<Role> {
        self.session.current().map(|u| u.role)
    }

    fn require_user(&self) -> Result<&User, StoreError> {
        self.session.current().ok_or(StoreError::LoginRequired)
    }

    fn require_buyer(&self) -> Result<&User, StoreError> {
        let user = self.require_user()?;
        if user.is_seller() {
            return Err(StoreError::BuyersOnly);
        }
        Ok(user)
    }

    fn require_seller(&self) -> Result<&User, StoreError> {
        let user = self.require_user()?;
        if !user.is_seller() {
            return Err(StoreError::SellerOnly);
        }
        Ok(user)
    }

    // --- navigation ---

    /// Resolve a path and apply the access guard for the current viewer.
    pub fn navigate(&self, path: &str) -> Result<Navigation, StoreError> {
        let route = Route::parse(path)?;
        let nav = guard(route, self.viewer_role());
        debug!(path, to = %nav.route(), redirect = nav.is_redirect(), "navigate");
        Ok(nav)
    }

    // --- session ---

    /// Log in with demo credentials. Returns where to go next.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Route, StoreError> {
        let user = self.accounts.authenticate(email.trim(), password)?;
        let role = user.role;
        self.session.login(user, AuthToken::issue())?;
        Ok(landing_for(role))
    }

    /// Log in as the demo account for `role`.
    pub fn demo_login(&mut self, role: Role) -> Result<Route, StoreError> {
        let (email, password) = self
            .accounts
            .demo_credentials(role)
            .map(|(e, p)| (e.to_string(), p.to_string()))
            .ok_or(StoreError::Auth(fitstore_auth::AuthError::InvalidCredentials))?;
        self.login(&email, &password)
    }

    /// Register and log in as the new user.
    pub fn register(&mut self, form: Registration) -> Result<Route, StoreError> {
        form.validate(self.config.min_password_len)?;
        let user = form.into_user();
        let role = user.role;
        info!(user_id = %user.id, role = %role, "registered");
        self.session.login(user, AuthToken::issue())?;
        Ok(landing_for(role))
    }

    /// End the session. Cart and wishlist are left as they are.
    pub fn logout(&mut self) -> Result<Route, StoreError> {
        self.session.logout()?;
        Ok(Route::Login)
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&User, StoreError> {
        self.require_user()?;
        Ok(self.session.update_profile(update)?)
    }

    /// Orders placed by the current user.
    pub fn my_orders(&self) -> Result<Vec<&Order>, StoreError> {
        let user = self.require_user()?;
        Ok(self.orders.for_user(&user.id))
    }

    // --- addresses ---

    pub fn add_address(&mut self, draft: AddressDraft) -> Result<AddressId, StoreError> {
        self.require_user()?;
        Ok(self.session.add_address(draft)?)
    }

    pub fn update_address(&mut self, id: &AddressId, draft: AddressDraft) -> Result<(), StoreError> {
        self.require_user()?;
        Ok(self.session.update_address(id, draft)?)
    }

    pub fn remove_address(&mut self, id: &AddressId) -> Result<(), StoreError> {
        self.require_user()?;
        Ok(self.session.remove_address(id)?)
    }

    pub fn set_primary_address(&mut self, id: &AddressId) -> Result<(), StoreError> {
        self.require_user()?;
        Ok(self.session.set_primary_address(id)?)
    }

    // --- browsing ---

    pub fn home(&self) -> HomeView<'_> {
        HomeView {
            featured: self.catalog.featured(self.config.featured_products),
            categories: Category::ALL,
        }
    }

    pub fn products(&self, query: &ProductQuery) -> Vec<&Product> {
        query.apply(&self.catalog)
    }

    pub fn product(&self, id: &ProductId) -> Result<ProductView<'_>, StoreError> {
        let product = self.catalog.require(id)?;
        let can_buy = self.session.is_authenticated() && !self.session.is_seller();
        Ok(ProductView {
            product,
            related: self.catalog.related(product, self.config.related_products),
            default_flavor: product.default_flavor(),
            can_buy,
            in_wishlist: can_buy && self.wishlist.contains(id),
            in_cart: if can_buy {
                self.cart.cart().get(id).map_or(0, |l| l.quantity)
            } else {
                0
            },
        })
    }

    // --- cart ---

    pub fn cart(&self) -> Result<&CartStore, StoreError> {
        self.require_user()?;
        Ok(&self.cart)
    }

    pub fn cart_summary(&self) -> Result<CartSummary, StoreError> {
        self.require_user()?;
        Ok(self.cart.summary(&self.config.pricing_rules())?)
    }

    /// Add to cart; returns the line's new quantity.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: i64) -> Result<i64, StoreError> {
        self.require_buyer()?;
        let product = self.catalog.require(id)?;
        Ok(self.cart.add(product, quantity)?)
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        self.require_user()?;
        Ok(self.cart.remove(id)?)
    }

    /// Set a line's quantity against the product's current stock.
    ///
    /// A line whose product has since been deleted is dropped and reported
    /// as `ProductNotFound`.
    pub fn set_cart_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, StoreError> {
        self.require_user()?;
        if quantity <= 0 {
            return Ok(self.cart.remove(id)?);
        }
        match self.catalog.get(id) {
            Some(product) => Ok(self.cart.set_quantity(product, quantity)?),
            None if self.cart.cart().contains(id) => {
                self.cart.remove(id)?;
                Err(CommerceError::ProductNotFound(id.to_string()).into())
            }
            None => Ok(false),
        }
    }

    pub fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.require_user()?;
        Ok(self.cart.clear()?)
    }

    // --- wishlist ---

    pub fn wishlist(&self) -> Result<&Wishlist, StoreError> {
        self.require_user()?;
        Ok(self.wishlist.wishlist())
    }

    pub fn add_to_wishlist(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        self.require_buyer()?;
        let product = self.catalog.require(id)?;
        Ok(self.wishlist.add(product)?)
    }

    pub fn remove_from_wishlist(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        self.require_user()?;
        Ok(self.wishlist.remove(id)?)
    }

    /// Toggle a product; returns whether it is now saved.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        self.require_buyer()?;
        let product = self.catalog.require(id)?;
        Ok(self.wishlist.toggle(product)?)
    }

    pub fn clear_wishlist(&mut self) -> Result<(), StoreError> {
        self.require_user()?;
        Ok(self.wishlist.clear()?)
    }

    // --- chat ---

    pub fn chat_posts(&self, search: &str) -> Result<Vec<&ChatPost>, StoreError> {
        self.require_user()?;
        Ok(self.chat.search(search))
    }

    pub fn post_chat(&mut self, message: &str) -> Result<ChatId, StoreError> {
        let user = self.session.current().ok_or(StoreError::LoginRequired)?;
        Ok(self.chat.post(&user.id, &user.name, message)?)
    }

    pub fn reply_chat(&mut self, post_id: &ChatId, message: &str) -> Result<ReplyId, StoreError> {
        let user = self.session.current().ok_or(StoreError::LoginRequired)?;
        Ok(self.chat.reply(post_id, &user.id, &user.name, message)?)
    }

    // --- seller back-office ---

    pub fn dashboard(&self) -> Result<SellerDashboard, StoreError> {
        self.require_seller()?;
        Ok(SellerDashboard::compute(
            &self.catalog,
            self.orders.orders(),
            &self.config.dashboard_rules(),
        )?)
    }

    /// Products matching `search` over name, category and brand.
    pub fn seller_products(&mut self, search: &str) -> Result<Vec<Product>, StoreError> {
        self.require_seller()?;
        let editor = ProductEditor::new(&mut self.catalog, &self.cache);
        Ok(editor.search(search).into_iter().cloned().collect())
    }

    pub fn add_product(&mut self, draft: ProductDraft) -> Result<ProductId, StoreError> {
        self.require_seller()?;
        Ok(ProductEditor::new(&mut self.catalog, &self.cache).add(draft)?)
    }

    pub fn update_product(&mut self, id: &ProductId, draft: ProductDraft) -> Result<(), StoreError> {
        self.require_seller()?;
        Ok(ProductEditor::new(&mut self.catalog, &self.cache).update(id, draft)?)
    }

    pub fn delete_product(&mut self, id: &ProductId) -> Result<Product, StoreError> {
        self.require_seller()?;
        let removed = ProductEditor::new(&mut self.catalog, &self.cache).delete(id)?;
        self.cart.remove(id)?;
        Ok(removed)
    }

    pub fn seller_orders(
        &self,
        search: &str,
        status: Option<OrderStatus>,
    ) -> Result<Vec<&Order>, StoreError> {
        self.require_seller()?;
        Ok(self.orders.filter(search, status))
    }

    pub fn order_counts(&self) -> Result<StatusCounts, StoreError> {
        self.require_seller()?;
        Ok(self.orders.count_by_status())
    }

    pub fn set_order_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<(), StoreError> {
        self.require_seller()?;
        Ok(self.orders.set_status(id, status, Utc::now())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Storefront {
        Storefront::open(Cache::in_memory(), StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_anonymous_cart_requires_login() {
        let mut store = store();
        let id = store.catalog().products()[0].id.clone();
        assert!(matches!(store.add_to_cart(&id, 1), Err(StoreError::LoginRequired)));
        assert!(matches!(store.cart_summary(), Err(StoreError::LoginRequired)));
    }

    #[test]
    fn test_seller_cannot_shop() {
        let mut store = store();
        store.demo_login(Role::Seller).unwrap();
        let id = store.catalog().products()[0].id.clone();
        assert!(matches!(store.add_to_cart(&id, 1), Err(StoreError::BuyersOnly)));
        assert!(matches!(store.toggle_wishlist(&id), Err(StoreError::BuyersOnly)));
        assert!(!store.product(&id).unwrap().can_buy);
    }

    #[test]
    fn test_buyer_is_not_seller() {
        let mut store = store();
        store.demo_login(Role::Buyer).unwrap();
        assert!(matches!(store.dashboard(), Err(StoreError::SellerOnly)));
    }

    #[test]
    fn test_home_featured() {
        let store = store();
        let home = store.home();
        assert_eq!(home.featured.len(), 6);
        assert_eq!(home.categories.len(), 3);
    }

    #[test]
    fn test_missing_product_is_not_found() {
        let store = store();
        let err = store.product(&ProductId::new("nope")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StoreConfig::default().with_tax_rate_bps(50_000);
        assert!(matches!(
            Storefront::open(Cache::in_memory(), config),
            Err(StoreError::Config(_))
        ));
    }
}
