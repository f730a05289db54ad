//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart: at most one line per product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in the order they were first added.
    pub lines: Vec<CartLine>,
    /// Cart currency.
    #[serde(default)]
    pub currency: Currency,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product.
    ///
    /// Increments the existing line if there is one. The resulting quantity
    /// is capped at the product's stock. Returns the line's new quantity.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<i64, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if !product.in_stock() {
            return Err(CommerceError::OutOfStock(product.name.clone()));
        }

        let stock = i64::from(product.stock);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let wanted = line
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            line.refresh(product);
            line.quantity = wanted.min(stock);
            return Ok(line.quantity);
        }

        let line = CartLine::new(product, quantity.min(stock));
        let quantity = line.quantity;
        self.lines.push(line);
        Ok(quantity)
    }

    /// Remove a product's line. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() < len_before
    }

    /// Replace a line's quantity, capped at the product's current stock.
    ///
    /// The line picks up the product's latest name, price and stock first.
    /// A quantity of zero or less, or a product now out of stock, removes
    /// the line. Products not in the cart are a no-op. Returns whether the
    /// cart changed.
    pub fn set_quantity(&mut self, product: &Product, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(&product.id);
        }
        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) else {
            return false;
        };
        let before = line.clone();
        line.refresh(product);
        let capped = quantity.min(i64::from(line.stock));
        if capped <= 0 {
            return self.remove(&product.id);
        }
        line.quantity = capped;
        *line != before
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.lines.iter().try_fold(Money::zero(self.currency), |acc, line| {
            let line_total = line.line_total()?;
            acc.try_add(&line_total).ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: line_total.currency.code().to_string(),
            })
        })
    }

    /// Sum of quantities.
    pub fn count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    pub unit_price: Money,
    /// Stock as of the last add or quantity change.
    pub stock: u32,
    pub quantity: i64,
}

impl CartLine {
    fn new(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            stock: product.stock,
            quantity,
        }
    }

    fn refresh(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.unit_price = product.price;
        self.stock = product.stock;
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: &str, price: i64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            description: String::new(),
            category: Category::Supplements,
            price: Money::rupees(price),
            stock,
            rating: 4.0,
            review_count: 0,
            image: String::new(),
            brand: "Brand".to_string(),
            weight: "1 kg".to_string(),
            flavors: Vec::new(),
        }
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let p = product("1", 500, 50);
        cart.add(&p, 1).unwrap();
        cart.add(&p, 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_add_caps_at_stock() {
        let mut cart = Cart::new();
        let p = product("1", 500, 3);
        assert_eq!(cart.add(&p, 2).unwrap(), 2);
        assert_eq!(cart.add(&p, 5).unwrap(), 3);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_add_out_of_stock() {
        let mut cart = Cart::new();
        let err = cart.add(&product("1", 500, 0), 1).unwrap_err();
        assert!(matches!(err, CommerceError::OutOfStock(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_invalid_quantity() {
        let mut cart = Cart::new();
        let err = cart.add(&product("1", 500, 5), 0).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidQuantity(0)));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        let a = product("1", 500, 10);
        let b = product("2", 300, 10);
        cart.add(&a, 2).unwrap();
        cart.add(&b, 1).unwrap();

        assert!(cart.set_quantity(&a, 0));
        assert!(!cart.contains(&a.id));
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_set_quantity_caps_and_ignores_missing() {
        let mut cart = Cart::new();
        let p = product("1", 500, 4);
        cart.add(&p, 1).unwrap();

        assert!(cart.set_quantity(&p, 10));
        assert_eq!(cart.get(&p.id).unwrap().quantity, 4);
        assert!(!cart.set_quantity(&product("missing", 100, 5), 2));
    }

    #[test]
    fn test_set_quantity_uses_current_stock() {
        let mut cart = Cart::new();
        let mut p = product("1", 500, 20);
        cart.add(&p, 10).unwrap();

        p.stock = 2;
        assert!(cart.set_quantity(&p, 10));
        assert_eq!(cart.get(&p.id).unwrap().quantity, 2);
        assert_eq!(cart.get(&p.id).unwrap().stock, 2);

        p.stock = 0;
        assert!(cart.set_quantity(&p, 1));
        assert!(!cart.contains(&p.id));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("1", 500, 4), 1).unwrap();
        assert!(!cart.remove(&ProductId::new("2")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_independent_of_order() {
        let a = product("1", 500, 10);
        let b = product("2", 300, 10);

        let mut first = Cart::new();
        first.add(&a, 2).unwrap();
        first.add(&b, 3).unwrap();
        first.set_quantity(&a, 1);

        let mut second = Cart::new();
        second.add(&b, 3).unwrap();
        second.add(&a, 1).unwrap();

        assert_eq!(first.total().unwrap(), Money::rupees(1400));
        assert_eq!(first.total().unwrap(), second.total().unwrap());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product("1", 500, 4), 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total().unwrap(), Money::zero(Currency::INR));
    }
}
