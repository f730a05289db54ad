//! Cart summary calculations.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping and tax rules applied to a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingRules {
    /// Shipping is free when the subtotal is strictly above this.
    pub free_shipping_over: Money,
    /// Flat fee charged otherwise.
    pub shipping_fee: Money,
    /// Tax rate in basis points (1800 = 18%).
    pub tax_rate_bps: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            free_shipping_over: Money::rupees(999),
            shipping_fee: Money::rupees(50),
            tax_rate_bps: 1800,
        }
    }
}

/// Order summary shown next to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities.
    pub item_count: i64,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    /// subtotal + shipping + tax
    pub grand_total: Money,
    /// How much more to spend before shipping is free, when below the threshold.
    pub free_shipping_remaining: Option<Money>,
}

impl CartSummary {
    pub fn compute(cart: &Cart, rules: &PricingRules) -> Result<Self, CommerceError> {
        let subtotal = cart.total()?;
        let zero = Money::zero(subtotal.currency);

        let shipping = if cart.is_empty() || subtotal > rules.free_shipping_over {
            zero
        } else {
            rules.shipping_fee
        };
        let tax = subtotal.basis_points(rules.tax_rate_bps);

        let grand_total = subtotal
            .try_add(&shipping)
            .and_then(|m| m.try_add(&tax))
            .ok_or(CommerceError::Overflow)?;

        let free_shipping_remaining = if !cart.is_empty() && subtotal < rules.free_shipping_over {
            rules.free_shipping_over.try_subtract(&subtotal)
        } else {
            None
        };

        Ok(Self {
            item_count: cart.count(),
            subtotal,
            shipping,
            tax,
            grand_total,
            free_shipping_remaining,
        })
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
