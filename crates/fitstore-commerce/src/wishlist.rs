//! Wishlist: an ordered set of saved products.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use fitstore_cache::{keys, Cache};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Saved products in insertion order, without duplicates.
///
/// Entries are full product records so the wishlist page renders without
/// consulting the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product. Returns `false` if it was already saved.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product.clone());
        true
    }

    /// Remove a product. Returns whether it was present.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|p| &p.id != product_id);
        self.items.len() < len_before
    }

    /// Add if absent, remove if present. Returns whether it is now saved.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(&product.id) {
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// The wishlist plus the snapshot it owns under the `wishlist` key.
#[derive(Debug, Clone)]
pub struct WishlistStore {
    wishlist: Wishlist,
    cache: Cache,
}

impl WishlistStore {
    /// Initialise from the persisted snapshot; absent means empty.
    pub fn load(cache: Cache) -> Result<Self, CommerceError> {
        let wishlist = cache.get::<Wishlist>(keys::WISHLIST)?.unwrap_or_default();
        debug!(count = wishlist.count(), "wishlist restored");
        Ok(Self { wishlist, cache })
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn add(&mut self, product: &Product) -> Result<bool, CommerceError> {
        self.modify(|wishlist| wishlist.add(product))
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        self.modify(|wishlist| wishlist.remove(product_id))
    }

    pub fn toggle(&mut self, product: &Product) -> Result<bool, CommerceError> {
        self.modify(|wishlist| wishlist.toggle(product))
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    pub fn count(&self) -> usize {
        self.wishlist.count()
    }

    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.modify(Wishlist::clear)
    }

    /// Apply `f` to a copy; if it changed, persist the copy and then keep it.
    fn modify<T>(&mut self, f: impl FnOnce(&mut Wishlist) -> T) -> Result<T, CommerceError> {
        let mut next = self.wishlist.clone();
        let out = f(&mut next);
        if next != self.wishlist {
            self.cache.set(keys::WISHLIST, &next)?;
            self.wishlist = next;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_add_is_idempotent() {
        let catalog = Catalog::demo();
        let p = &catalog.products()[0];
        let mut wishlist = Wishlist::new();

        assert!(wishlist.add(p));
        assert!(!wishlist.add(p));
        assert_eq!(wishlist.count(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let catalog = Catalog::demo();
        let (a, b) = (&catalog.products()[0], &catalog.products()[1]);
        let mut wishlist = Wishlist::new();
        wishlist.add(a);
        let original = wishlist.clone();

        assert!(wishlist.toggle(b));
        assert!(!wishlist.toggle(b));
        assert_eq!(wishlist, original);

        assert!(!wishlist.toggle(a));
        assert!(wishlist.toggle(a));
        assert_eq!(wishlist, original);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let catalog = Catalog::demo();
        let mut wishlist = Wishlist::new();
        wishlist.add(&catalog.products()[2]);
        wishlist.add(&catalog.products()[0]);

        let ids: Vec<_> = wishlist.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![catalog.products()[2].id.as_str(), catalog.products()[0].id.as_str()]);
    }

    #[test]
    fn test_snapshot_is_list_of_products() {
        let cache = Cache::in_memory();
        let catalog = Catalog::demo();
        let mut store = WishlistStore::load(cache.clone()).unwrap();
        store.add(&catalog.products()[0]).unwrap();

        let raw: Vec<Product> = cache.get(keys::WISHLIST).unwrap().unwrap();
        assert_eq!(raw, vec![catalog.products()[0].clone()]);
        assert!(WishlistStore::load(cache).unwrap().contains(&catalog.products()[0].id));
    }

    #[test]
    fn test_failed_write_keeps_wishlist() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("state");
        let catalog = Catalog::demo();
        let mut store = WishlistStore::load(Cache::open_dir(&data).unwrap()).unwrap();
        store.add(&catalog.products()[0]).unwrap();

        std::fs::remove_dir_all(&data).unwrap();
        assert!(store.toggle(&catalog.products()[0]).is_err());
        assert!(store.add(&catalog.products()[1]).is_err());

        assert!(store.contains(&catalog.products()[0].id));
        assert_eq!(store.count(), 1);
    }
}
