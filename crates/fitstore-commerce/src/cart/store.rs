//! Persisted cart container.

use crate::cart::{Cart, CartSummary, PricingRules};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use fitstore_cache::{keys, Cache};
use tracing::debug;

/// The cart plus the snapshot it owns under the `cart` key.
///
/// A mutation is kept only once its snapshot has been written.
#[derive(Debug, Clone)]
pub struct CartStore {
    cart: Cart,
    cache: Cache,
}

impl CartStore {
    /// Initialise from the persisted snapshot; absent means empty.
    pub fn load(cache: Cache) -> Result<Self, CommerceError> {
        let cart = cache.get::<Cart>(keys::CART)?.unwrap_or_default();
        debug!(lines = cart.len(), "cart restored");
        Ok(Self { cart, cache })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<i64, CommerceError> {
        self.modify(|cart| cart.add(product, quantity))
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        self.modify(|cart| Ok(cart.remove(product_id)))
    }

    pub fn set_quantity(&mut self, product: &Product, quantity: i64) -> Result<bool, CommerceError> {
        self.modify(|cart| Ok(cart.set_quantity(product, quantity)))
    }

    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.modify(|cart| {
            cart.clear();
            Ok(())
        })
    }

    pub fn total(&self) -> Result<Money, CommerceError> {
        self.cart.total()
    }

    pub fn count(&self) -> i64 {
        self.cart.count()
    }

    pub fn summary(&self, rules: &PricingRules) -> Result<CartSummary, CommerceError> {
        CartSummary::compute(&self.cart, rules)
    }

    /// Apply `f` to a copy of the cart; if it changed, persist the copy
    /// and then keep it.
    fn modify<T>(&mut self, f: impl FnOnce(&mut Cart) -> Result<T, CommerceError>) -> Result<T, CommerceError> {
        let mut next = self.cart.clone();
        let out = f(&mut next)?;
        if next != self.cart {
            self.cache.set(keys::CART, &next)?;
            debug!(lines = next.len(), "cart saved");
            self.cart = next;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_mutations_survive_reload() {
        let cache = Cache::in_memory();
        let catalog = Catalog::demo();
        let product = &catalog.products()[0];

        let mut store = CartStore::load(cache.clone()).unwrap();
        store.add(product, 2).unwrap();

        let reloaded = CartStore::load(cache.clone()).unwrap();
        assert_eq!(reloaded.count(), 2);
        assert_eq!(reloaded.cart(), store.cart());
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let cache = Cache::in_memory();
        let catalog = Catalog::demo();

        let mut store = CartStore::load(cache.clone()).unwrap();
        store.add(&catalog.products()[0], 1).unwrap();
        store.clear().unwrap();

        assert!(CartStore::load(cache).unwrap().cart().is_empty());
    }

    #[test]
    fn test_noop_remove_does_not_write() {
        let cache = Cache::in_memory();
        let mut store = CartStore::load(cache.clone()).unwrap();
        assert!(!store.remove(&ProductId::new("missing")).unwrap());
        assert!(!cache.exists(keys::CART).unwrap());
    }

    #[test]
    fn test_failed_write_keeps_cart() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("state");
        let catalog = Catalog::demo();
        let product = &catalog.products()[0];
        let mut store = CartStore::load(Cache::open_dir(&data).unwrap()).unwrap();
        store.add(product, 1).unwrap();

        std::fs::remove_dir_all(&data).unwrap();
        assert!(store.add(product, 1).is_err());
        assert!(store.clear().is_err());

        assert_eq!(store.count(), 1);
    }
}
