//! Money type for representing prices and totals.
//!
//! Amounts are integers in the currency's minor unit (paise for INR), so
//! cart totals are exact no matter how many lines are summed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Minor units per major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a whole-rupee amount.
    ///
    /// ```
    /// use fitstore_commerce::money::Money;
    /// let price = Money::rupees(2499);
    /// assert_eq!(price.amount_minor, 249_900);
    /// ```
    pub fn rupees(amount: i64) -> Self {
        Self::new(amount * Currency::INR.minor_per_major(), Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Format as a display string (e.g., "₹2499.00").
    pub fn display(&self) -> String {
        let per = self.currency.minor_per_major();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency.symbol(),
            abs / per,
            abs % per
        )
    }

    /// Add, returning `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Subtract, returning `None` on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_sub(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Take a rate expressed in basis points (1800 = 18%), rounded half up.
    pub fn basis_points(&self, bps: u32) -> Money {
        let scaled = self.amount_minor as i128 * bps as i128;
        let rounded = (scaled + 5_000) / 10_000;
        Money::new(rounded as i64, self.currency)
    }

    /// Sum an iterator of Money values, returning `None` on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        assert_eq!(self.currency, other.currency, "Currency mismatch in addition");
        Money::new(self.amount_minor + other.amount_minor, self.currency)
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch.
    fn sub(self, other: Money) -> Money {
        assert_eq!(self.currency, other.currency, "Currency mismatch in subtraction");
        Money::new(self.amount_minor - other.amount_minor, self.currency)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_minor * factor, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupees() {
        let m = Money::rupees(999);
        assert_eq!(m.amount_minor, 99_900);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::rupees(2499).display(), "\u{20b9}2499.00");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-150, Currency::INR).display(), "-\u{20b9}1.50");
    }

    #[test]
    fn test_basis_points() {
        // 18% of 1000.00
        assert_eq!(Money::rupees(1000).basis_points(1800), Money::rupees(180));
        // 18% of 0.05 rounds half up to 0.01
        assert_eq!(Money::new(5, Currency::INR).basis_points(1800).amount_minor, 1);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let inr = Money::rupees(10);
        let usd = Money::new(1000, Currency::USD);
        assert!(inr.try_add(&usd).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::INR);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_try_sum() {
        let values = [Money::rupees(1), Money::rupees(2), Money::rupees(3)];
        let total = Money::try_sum(values.iter(), Currency::INR).unwrap();
        assert_eq!(total, Money::rupees(6));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_add_mismatch_panics() {
        let _ = Money::rupees(1) + Money::new(1, Currency::EUR);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
