//! Storefront configuration.

use crate::StoreError;
use fitstore_commerce::cart::PricingRules;
use fitstore_commerce::money::{Currency, Money};
use fitstore_commerce::orders::DashboardRules;
use serde::{Deserialize, Serialize};

/// Store-wide settings. Money amounts are whole units of `currency`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name shown in headers.
    pub name: String,
    pub currency: Currency,
    /// Shipping is free when the subtotal is strictly above this.
    pub free_shipping_threshold: i64,
    /// Flat shipping fee below the threshold.
    pub shipping_fee: i64,
    /// Tax rate in basis points (1800 = 18%).
    pub tax_rate_bps: u32,
    /// Products with stock below this are flagged on the dashboard.
    pub low_stock_threshold: u32,
    /// Low-stock products listed on the dashboard.
    pub low_stock_shown: usize,
    /// Recent orders listed on the dashboard.
    pub recent_orders: usize,
    /// Products shown on the home page.
    pub featured_products: usize,
    /// Related products shown on a product page.
    pub related_products: usize,
    /// Minimum password length at registration.
    pub min_password_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "FitStore".to_string(),
            currency: Currency::INR,
            free_shipping_threshold: 999,
            shipping_fee: 50,
            tax_rate_bps: 1800,
            low_stock_threshold: 20,
            low_stock_shown: 5,
            recent_orders: 5,
            featured_products: 6,
            related_products: 4,
            min_password_len: 6,
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the free shipping threshold and fee.
    pub fn with_shipping(mut self, threshold: i64, fee: i64) -> Self {
        self.free_shipping_threshold = threshold;
        self.shipping_fee = fee;
        self
    }

    /// Set the tax rate in basis points.
    pub fn with_tax_rate_bps(mut self, bps: u32) -> Self {
        self.tax_rate_bps = bps;
        self
    }

    /// Set the low stock threshold.
    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Reject settings no storefront could run with.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.free_shipping_threshold < 0 || self.shipping_fee < 0 {
            return Err(StoreError::Config(
                "shipping amounts must not be negative".to_string(),
            ));
        }
        if self.tax_rate_bps > 10_000 {
            return Err(StoreError::Config(format!(
                "tax rate {} bps is above 100%",
                self.tax_rate_bps
            )));
        }
        if self.min_password_len == 0 {
            return Err(StoreError::Config(
                "minimum password length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn major(&self, amount: i64) -> Money {
        Money::new(
            amount.saturating_mul(self.currency.minor_per_major()),
            self.currency,
        )
    }

    pub fn pricing_rules(&self) -> PricingRules {
        PricingRules {
            free_shipping_over: self.major(self.free_shipping_threshold),
            shipping_fee: self.major(self.shipping_fee),
            tax_rate_bps: self.tax_rate_bps,
        }
    }

    pub fn dashboard_rules(&self) -> DashboardRules {
        DashboardRules {
            low_stock_threshold: self.low_stock_threshold,
            low_stock_shown: self.low_stock_shown,
            recent_orders: self.recent_orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.name, "FitStore");
        assert_eq!(config.pricing_rules(), PricingRules::default());
        assert_eq!(config.dashboard_rules(), DashboardRules::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_store_config_builder_chain() {
        let config = StoreConfig::new("Shop")
            .with_shipping(500, 40)
            .with_tax_rate_bps(500)
            .with_low_stock_threshold(10);

        let rules = config.pricing_rules();
        assert_eq!(rules.free_shipping_over, Money::rupees(500));
        assert_eq!(rules.shipping_fee, Money::rupees(40));
        assert_eq!(rules.tax_rate_bps, 500);
        assert_eq!(config.dashboard_rules().low_stock_threshold, 10);
    }

    #[test]
    fn test_validate_rejects_bad_rates() {
        assert!(StoreConfig::default().with_tax_rate_bps(20_000).validate().is_err());
        assert!(StoreConfig::default().with_shipping(-1, 50).validate().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"shipping_fee": 75}"#).unwrap();
        assert_eq!(config.shipping_fee, 75);
        assert_eq!(config.free_shipping_threshold, 999);
    }
}
