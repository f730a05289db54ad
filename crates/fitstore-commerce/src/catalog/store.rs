//! The read-only product catalog consulted by every view.

use crate::catalog::{Category, Product};
use crate::demo;
use crate::error::CommerceError;
use crate::ids::ProductId;
use fitstore_cache::{keys, Cache};
use tracing::debug;

/// Ordered collection of product records.
///
/// Catalog order is meaningful: it is the "default" sort order and the
/// order featured products are picked from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from records in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The static demo catalog.
    pub fn demo() -> Self {
        Self::new(demo::products())
    }

    /// Load the seller-edited snapshot, falling back to the demo catalog.
    pub fn load(cache: &Cache) -> Result<Self, CommerceError> {
        match cache.get::<Vec<Product>>(keys::CATALOG)? {
            Some(products) => {
                debug!(count = products.len(), "loaded catalog snapshot");
                Ok(Self::new(products))
            }
            None => Ok(Self::demo()),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// First `n` products, for the home page.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    /// Up to `n` other products from the same category, in catalog order.
    pub fn related(&self, product: &Product, n: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(n)
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products with stock strictly below `threshold`.
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .collect()
    }

    pub(crate) fn products_mut(&mut self) -> &mut Vec<Product> {
        &mut self.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_populated() {
        let catalog = Catalog::demo();
        assert!(!catalog.is_empty());
        for cat in Category::ALL {
            assert!(!catalog.by_category(cat).is_empty(), "no products in {}", cat);
        }
    }

    #[test]
    fn test_require_missing() {
        let catalog = Catalog::demo();
        let err = catalog.require(&ProductId::new("nope")).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
    }

    #[test]
    fn test_featured_is_prefix() {
        let catalog = Catalog::demo();
        let featured = catalog.featured(3);
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id, catalog.products()[0].id);
        assert_eq!(catalog.featured(1000).len(), catalog.len());
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::demo();
        let product = &catalog.products()[0];
        let related = catalog.related(product, 4);
        assert!(related.len() <= 4);
        assert!(related.iter().all(|p| p.category == product.category));
        assert!(related.iter().all(|p| p.id != product.id));
    }

    #[test]
    fn test_load_prefers_snapshot() {
        let cache = Cache::in_memory();
        assert_eq!(Catalog::load(&cache).unwrap(), Catalog::demo());

        let one = vec![Catalog::demo().products()[0].clone()];
        cache.set(keys::CATALOG, &one).unwrap();
        assert_eq!(Catalog::load(&cache).unwrap().len(), 1);
    }
}
