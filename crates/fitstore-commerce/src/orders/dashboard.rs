//! Seller dashboard figures.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::orders::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Thresholds for the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardRules {
    /// Products with stock strictly below this are low.
    pub low_stock_threshold: u32,
    /// How many low-stock products to list.
    pub low_stock_shown: usize,
    /// How many recent orders to list.
    pub recent_orders: usize,
}

impl Default for DashboardRules {
    fn default() -> Self {
        Self {
            low_stock_threshold: 20,
            low_stock_shown: 5,
            recent_orders: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerDashboard {
    pub total_products: usize,
    pub total_orders: usize,
    /// Sum of every order total.
    pub total_revenue: Money,
    /// Orders still processing.
    pub pending_orders: usize,
    /// All products below the threshold.
    pub low_stock_count: usize,
    pub low_stock: Vec<Product>,
    pub recent_orders: Vec<Order>,
}

impl SellerDashboard {
    pub fn compute(
        catalog: &Catalog,
        orders: &[Order],
        rules: &DashboardRules,
    ) -> Result<Self, CommerceError> {
        let currency = orders
            .first()
            .map(|o| o.total_amount.currency)
            .unwrap_or(Currency::INR);
        let total_revenue = Money::try_sum(orders.iter().map(|o| &o.total_amount), currency)
            .ok_or(CommerceError::Overflow)?;

        let low_stock = catalog.low_stock(rules.low_stock_threshold);

        Ok(Self {
            total_products: catalog.len(),
            total_orders: orders.len(),
            total_revenue,
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Processing)
                .count(),
            low_stock_count: low_stock.len(),
            low_stock: low_stock
                .into_iter()
                .take(rules.low_stock_shown)
                .cloned()
                .collect(),
            recent_orders: orders.iter().take(rules.recent_orders).cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn test_demo_dashboard() {
        let catalog = Catalog::demo();
        let orders = demo::orders();
        let dashboard = SellerDashboard::compute(&catalog, &orders, &DashboardRules::default()).unwrap();

        assert_eq!(dashboard.total_products, catalog.len());
        assert_eq!(dashboard.total_orders, orders.len());
        let expected: i64 = orders.iter().map(|o| o.total_amount.amount_minor).sum();
        assert_eq!(dashboard.total_revenue.amount_minor, expected);
        assert!(dashboard.low_stock.iter().all(|p| p.stock < 20));
        assert!(dashboard.low_stock.len() <= 5);
        assert!(dashboard.recent_orders.len() <= 5);
        assert_eq!(
            dashboard.pending_orders,
            orders.iter().filter(|o| o.status == OrderStatus::Processing).count()
        );
    }

    #[test]
    fn test_empty_store() {
        let dashboard =
            SellerDashboard::compute(&Catalog::new(Vec::new()), &[], &DashboardRules::default()).unwrap();
        assert!(dashboard.total_revenue.is_zero());
        assert!(dashboard.recent_orders.is_empty());
    }
}
