//! Seller-side product management.
//!
//! Any seller may edit any product: there is no per-seller ownership.

use crate::catalog::{Catalog, Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use fitstore_cache::{keys, Cache};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Form data for creating or replacing a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Category,
    pub stock: u32,
    pub image: String,
    pub brand: String,
    pub rating: f32,
    pub review_count: u32,
    pub flavors: Vec<String>,
    pub weight: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: Money::default(),
            category: Category::Supplements,
            stock: 0,
            image: String::new(),
            brand: String::new(),
            rating: 0.0,
            review_count: 0,
            flavors: Vec::new(),
            weight: String::new(),
        }
    }
}

impl ProductDraft {
    /// Pre-fill a draft from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category,
            stock: product.stock,
            image: product.image.clone(),
            brand: product.brand.clone(),
            rating: product.rating,
            review_count: product.review_count,
            flavors: product.flavors.clone(),
            weight: product.weight.clone(),
        }
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        for (field, value) in [
            ("name", &self.name),
            ("brand", &self.brand),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(CommerceError::ValidationError(format!("{} is required", field)));
            }
        }
        if !self.price.is_positive() {
            return Err(CommerceError::ValidationError(
                "price must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CommerceError::ValidationError(
                "rating must be between 0 and 5".to_string(),
            ));
        }
        Ok(())
    }

    fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            price: self.price,
            stock: self.stock,
            rating: self.rating,
            review_count: self.review_count,
            image: self.image,
            brand: self.brand.trim().to_string(),
            weight: self.weight,
            flavors: self.flavors,
        }
    }
}

/// Mutating view over the catalog, persisted under the `catalog` key.
pub struct ProductEditor<'a> {
    catalog: &'a mut Catalog,
    cache: &'a Cache,
}

impl<'a> ProductEditor<'a> {
    pub fn new(catalog: &'a mut Catalog, cache: &'a Cache) -> Self {
        Self { catalog, cache }
    }

    /// Case-insensitive search over name, category and brand.
    pub fn search(&self, text: &str) -> Vec<&Product> {
        let needle = text.trim().to_lowercase();
        self.catalog
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.category.as_str().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Add a product at the front of the catalog.
    pub fn add(&mut self, draft: ProductDraft) -> Result<ProductId, CommerceError> {
        draft.validate()?;
        let id = ProductId::generate();
        let product = draft.into_product(id.clone());
        let name = product.name.clone();
        self.modify(|products| {
            products.insert(0, product);
            Ok(())
        })?;
        info!(product_id = %id, name = %name, "product added");
        Ok(id)
    }

    /// Replace every field of an existing product, keeping its id.
    pub fn update(&mut self, id: &ProductId, draft: ProductDraft) -> Result<(), CommerceError> {
        draft.validate()?;
        self.modify(|products| {
            let slot = products
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
            *slot = draft.into_product(id.clone());
            Ok(())
        })?;
        info!(product_id = %id, "product updated");
        Ok(())
    }

    /// Remove a product, returning it.
    pub fn delete(&mut self, id: &ProductId) -> Result<Product, CommerceError> {
        let removed = self.modify(|products| {
            let index = products
                .iter()
                .position(|p| &p.id == id)
                .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
            Ok(products.remove(index))
        })?;
        info!(product_id = %id, "product deleted");
        Ok(removed)
    }

    /// Apply `f` to a copy of the product list, persist it, then keep it.
    fn modify<T>(
        &mut self,
        f: impl FnOnce(&mut Vec<Product>) -> Result<T, CommerceError>,
    ) -> Result<T, CommerceError> {
        let mut products = self.catalog.products().to_vec();
        let out = f(&mut products)?;
        self.cache.set(keys::CATALOG, &products)?;
        *self.catalog.products_mut() = products;
        Ok(out)
    }
}
