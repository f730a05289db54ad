//! Product and category types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Energy and focus before training.
    PreWorkout,
    /// Recovery and muscle building.
    PostWorkout,
    /// General health.
    Supplements,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [
        Category::PreWorkout,
        Category::PostWorkout,
        Category::Supplements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PreWorkout => "pre-workout",
            Category::PostWorkout => "post-workout",
            Category::Supplements => "supplements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::PreWorkout => "Pre-Workout",
            Category::PostWorkout => "Post-Workout",
            Category::Supplements => "Supplements",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Category::PreWorkout => "Boost your energy and performance",
            Category::PostWorkout => "Recover faster and build muscle",
            Category::Supplements => "Support your overall health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pre-workout" => Ok(Category::PreWorkout),
            "post-workout" => Ok(Category::PostWorkout),
            "supplements" => Ok(Category::Supplements),
            other => Err(CommerceError::UnknownCategory(other.to_string())),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Units available.
    pub stock: u32,
    /// Average rating out of 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Image URL.
    pub image: String,
    pub brand: String,
    /// Pack size label, e.g. "2 kg".
    pub weight: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flavors: Vec<String>,
}

impl Product {
    /// Check if the product can be added to a cart.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if stock is strictly below `threshold`.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }

    /// Default flavor shown on the detail page.
    pub fn default_flavor(&self) -> Option<&str> {
        self.flavors.first().map(String::as_str)
    }

    /// Case-insensitive substring match on name or description.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Nitro Whey".to_string(),
            description: "Fast absorbing WHEY isolate".to_string(),
            category: Category::PostWorkout,
            price: Money::rupees(2999),
            stock,
            rating: 4.5,
            review_count: 10,
            image: String::new(),
            brand: "Nitro".to_string(),
            weight: "1 kg".to_string(),
            flavors: vec!["Chocolate".to_string(), "Vanilla".to_string()],
        }
    }

    #[test]
    fn test_category_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
        assert!("snacks".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::PreWorkout).unwrap();
        assert_eq!(json, "\"pre-workout\"");
    }

    #[test]
    fn test_stock_helpers() {
        assert!(product(5).in_stock());
        assert!(!product(0).in_stock());
        assert!(product(19).is_low_stock(20));
        assert!(!product(20).is_low_stock(20));
    }

    #[test]
    fn test_matches_text_case_insensitive() {
        let p = product(1);
        assert!(p.matches_text("whey"));
        assert!(p.matches_text("isolate"));
        assert!(!p.matches_text("creatine"));
    }

    #[test]
    fn test_default_flavor() {
        assert_eq!(product(1).default_flavor(), Some("Chocolate"));
    }
}
