//! Product query builder and evaluation.

use crate::catalog::{Catalog, Category, Product};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Default,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
    /// Name A-Z, case-insensitive.
    NameAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::NameAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::NameAsc => "name-asc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::NameAsc => "Name: A to Z",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Default => Ordering::Equal,
            SortKey::PriceAsc => a.price.amount_minor.cmp(&b.price.amount_minor),
            SortKey::PriceDesc => b.price.amount_minor.cmp(&a.price.amount_minor),
            SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
            SortKey::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    /// Accepts the canonical names and the storefront's short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "default" => Ok(SortKey::Default),
            "price-asc" | "price-low" => Ok(SortKey::PriceAsc),
            "price-desc" | "price-high" => Ok(SortKey::PriceDesc),
            "rating-desc" | "rating" => Ok(SortKey::RatingDesc),
            "name-asc" | "name" => Ok(SortKey::NameAsc),
            other => Err(CommerceError::UnknownSort(other.to_string())),
        }
    }
}

/// What the product listing shows.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductQuery {
    /// Case-insensitive substring of name or description.
    pub text: Option<String>,
    /// Restrict to one category; `None` means all.
    pub category: Option<Category>,
    pub sort: SortKey,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text filter. Blank text clears it.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the category from a listing parameter; `all` clears it.
    pub fn with_category_param(mut self, param: &str) -> Result<Self, CommerceError> {
        let param = param.trim();
        self.category = if param.is_empty() || param.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(param.parse()?)
        };
        Ok(self)
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a product passes the filters.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        match &self.text {
            Some(text) => product.matches_text(&text.to_lowercase()),
            None => true,
        }
    }

    /// Evaluate against a catalog.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        apply(catalog, self)
    }
}

/// Filter then sort the catalog. `sort_by` is stable, so ties keep
/// catalog order.
pub fn apply<'a>(catalog: &'a Catalog, query: &ProductQuery) -> Vec<&'a Product> {
    let mut products: Vec<&Product> = catalog.iter().filter(|p| query.matches(p)).collect();
    if query.sort != SortKey::Default {
        products.sort_by(|a, b| query.sort.compare(a, b));
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Money;

    fn product(id: &str, name: &str, category: Category, price: i64, rating: f32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{} description", name),
            category,
            price: Money::rupees(price),
            stock: 10,
            rating,
            review_count: 0,
            image: String::new(),
            brand: "Brand".to_string(),
            weight: "1 kg".to_string(),
            flavors: Vec::new(),
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_price_asc_is_stable() {
        let catalog = Catalog::new(vec![
            product("1", "A", Category::Supplements, 500, 4.0),
            product("2", "B", Category::Supplements, 300, 4.0),
            product("3", "C", Category::Supplements, 300, 4.0),
        ]);
        let query = ProductQuery::new().with_sort(SortKey::PriceAsc);
        assert_eq!(ids(&apply(&catalog, &query)), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_category_filter_keeps_catalog_order() {
        let catalog = Catalog::demo();
        let query = ProductQuery::new().with_category(Category::PreWorkout);
        let results = apply(&catalog, &query);

        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.category == Category::PreWorkout));
        let expected: Vec<_> = catalog.by_category(Category::PreWorkout);
        assert_eq!(ids(&results), ids(&expected));
    }

    #[test]
    fn test_text_matches_name_or_description() {
        let catalog = Catalog::new(vec![
            product("1", "Whey Isolate", Category::PostWorkout, 100, 4.0),
            product("2", "Creatine", Category::PostWorkout, 100, 4.0),
        ]);
        let by_name = ProductQuery::new().with_text("WHEY");
        assert_eq!(ids(&apply(&catalog, &by_name)), vec!["1"]);

        let by_description = ProductQuery::new().with_text("creatine desc");
        assert_eq!(ids(&apply(&catalog, &by_description)), vec!["2"]);
    }

    #[test]
    fn test_price_desc_rating_and_name() {
        let catalog = Catalog::new(vec![
            product("1", "beta", Category::Supplements, 200, 4.1),
            product("2", "Alpha", Category::Supplements, 900, 3.9),
            product("3", "gamma", Category::Supplements, 500, 4.8),
        ]);

        let by_price = ProductQuery::new().with_sort(SortKey::PriceDesc);
        assert_eq!(ids(&apply(&catalog, &by_price)), vec!["2", "3", "1"]);

        let by_rating = ProductQuery::new().with_sort(SortKey::RatingDesc);
        assert_eq!(ids(&apply(&catalog, &by_rating)), vec!["3", "1", "2"]);

        let by_name = ProductQuery::new().with_sort(SortKey::NameAsc);
        assert_eq!(ids(&apply(&catalog, &by_name)), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_key_aliases() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        assert_eq!("price-high".parse::<SortKey>().unwrap(), SortKey::PriceDesc);
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::RatingDesc);
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::NameAsc);
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("popularity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_category_param_all() {
        let query = ProductQuery::new().with_category_param("all").unwrap();
        assert_eq!(query.category, None);
        let query = ProductQuery::new().with_category_param("supplements").unwrap();
        assert_eq!(query.category, Some(Category::Supplements));
        assert!(ProductQuery::new().with_category_param("snacks").is_err());
    }

    #[test]
    fn test_blank_text_is_no_filter() {
        let catalog = Catalog::demo();
        let query = ProductQuery::new().with_text("   ");
        assert_eq!(apply(&catalog, &query).len(), catalog.len());
    }
}
