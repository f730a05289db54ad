//! The fixed routing table.

use crate::RouteError;
use fitstore_commerce::catalog::Category;
use fitstore_commerce::ids::ProductId;
use fitstore_commerce::search::{ProductQuery, SortKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who may render a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Anyone.
    Public,
    /// Any logged-in user.
    Authenticated,
    /// Logged-in sellers only.
    Seller,
}

/// Query parameters of the product listing, kept as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl ProductsParams {
    /// Parse `search`, `category` and `sort` out of a query string.
    /// Unknown keys are ignored; the last occurrence of a key wins.
    pub fn from_query(query: &str) -> Result<Self, RouteError> {
        let mut params = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value)?;
            let slot = match key {
                "search" => &mut params.search,
                "category" => &mut params.category,
                "sort" => &mut params.sort,
                _ => continue,
            };
            *slot = if value.is_empty() { None } else { Some(value) };
        }
        Ok(params)
    }

    /// Turn the raw parameters into a product query.
    pub fn to_query(&self) -> Result<ProductQuery, RouteError> {
        let mut query = ProductQuery::new();
        if let Some(search) = &self.search {
            query = query.with_text(search.clone());
        }
        if let Some(category) = &self.category {
            query = query
                .with_category_param(category)
                .map_err(|_| invalid("category", category))?;
        }
        if let Some(sort) = &self.sort {
            let key: SortKey = sort.parse().map_err(|_| invalid("sort", sort))?;
            query = query.with_sort(key);
        }
        Ok(query)
    }

    /// Build parameters from a query, for generating links.
    pub fn from_product_query(query: &ProductQuery) -> Self {
        Self {
            search: query.text.clone(),
            category: query.category.map(|c| c.as_str().to_string()),
            sort: (query.sort != SortKey::Default).then(|| query.sort.as_str().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.sort.is_none()
    }

    fn to_query_string(&self) -> String {
        [("search", &self.search), ("category", &self.category), ("sort", &self.sort)]
            .into_iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| format!("{}={}", k, urlencoding::encode(v))))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A view in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum Route {
    Home,
    Products(ProductsParams),
    Product { id: ProductId },
    Cart,
    Wishlist,
    Profile,
    Addresses,
    Chat,
    Login,
    Register,
    SellerDashboard,
    SellerProducts,
    SellerOrders,
    /// Catch-all; carries the requested path.
    NotFound { path: String },
}

impl Route {
    /// Resolve a path. Query string and fragment are stripped before
    /// matching, as is a trailing slash. Unknown paths resolve to
    /// `NotFound`; only a malformed `/products` query is an error.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let path = path.trim();
        let path = path.split('#').next().unwrap_or_default();
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Home);
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Ok(Route::NotFound {
                path: path.to_string(),
            });
        };
        let segments: Vec<&str> = rest.split('/').collect();

        let route = match segments.as_slice() {
            ["products"] => Route::Products(ProductsParams::from_query(query)?),
            ["product", id] if !id.is_empty() => Route::Product {
                id: ProductId::new(decode(id)?),
            },
            ["cart"] => Route::Cart,
            ["wishlist"] => Route::Wishlist,
            ["profile"] => Route::Profile,
            ["addresses"] => Route::Addresses,
            ["chat"] => Route::Chat,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["seller", "dashboard"] => Route::SellerDashboard,
            ["seller", "products"] => Route::SellerProducts,
            ["seller", "orders"] => Route::SellerOrders,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        };
        Ok(route)
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products(params) if params.is_empty() => "/products".to_string(),
            Route::Products(params) => format!("/products?{}", params.to_query_string()),
            Route::Product { id } => format!("/product/{}", urlencoding::encode(id.as_str())),
            Route::Cart => "/cart".to_string(),
            Route::Wishlist => "/wishlist".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Addresses => "/addresses".to_string(),
            Route::Chat => "/chat".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::SellerDashboard => "/seller/dashboard".to_string(),
            Route::SellerProducts => "/seller/products".to_string(),
            Route::SellerOrders => "/seller/orders".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Profile | Route::Addresses => Access::Authenticated,
            Route::SellerDashboard | Route::SellerProducts | Route::SellerOrders => Access::Seller,
            _ => Access::Public,
        }
    }

    /// Listing filtered to one category, as linked from the home page.
    pub fn category(category: Category) -> Self {
        Route::Products(ProductsParams {
            category: Some(category.as_str().to_string()),
            ..ProductsParams::default()
        })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn decode(raw: &str) -> Result<String, RouteError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|_| RouteError::MalformedQuery(raw.to_string()))
}

fn invalid(name: &str, value: &str) -> RouteError {
    RouteError::InvalidParameter {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_table() {
        let table = [
            ("/", Route::Home),
            ("/cart", Route::Cart),
            ("/wishlist", Route::Wishlist),
            ("/profile", Route::Profile),
            ("/addresses", Route::Addresses),
            ("/chat", Route::Chat),
            ("/login", Route::Login),
            ("/register", Route::Register),
            ("/seller/dashboard", Route::SellerDashboard),
            ("/seller/products", Route::SellerProducts),
            ("/seller/orders", Route::SellerOrders),
        ];
        for (path, route) in table {
            assert_eq!(Route::parse(path).unwrap(), route, "{}", path);
            assert_eq!(route.path(), path);
        }
    }

    #[test]
    fn test_product_id_and_trailing_slash() {
        assert_eq!(
            Route::parse("/product/7/").unwrap(),
            Route::Product { id: ProductId::new("7") }
        );
        assert!(Route::parse("/product/").unwrap().is_not_found());
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        for path in ["/checkout", "/seller", "/product/1/reviews", "/seller/x"] {
            let route = Route::parse(path).unwrap();
            assert_eq!(route, Route::NotFound { path: path.to_string() });
        }
    }

    #[test]
    fn test_relative_paths_are_not_found() {
        for path in ["cart", "nonsense", "seller/dashboard", "product/1"] {
            let route = Route::parse(path).unwrap();
            assert_eq!(route, Route::NotFound { path: path.to_string() });
        }
        assert_eq!(Route::parse("").unwrap(), Route::Home);
    }

    #[test]
    fn test_products_query() {
        let route = Route::parse("/products?search=whey+protein&category=post-workout&sort=price-low#top").unwrap();
        let Route::Products(params) = route else {
            panic!("expected products route");
        };
        assert_eq!(params.search.as_deref(), Some("whey protein"));

        let query = params.to_query().unwrap();
        assert_eq!(query.category, Some(Category::PostWorkout));
        assert_eq!(query.sort, SortKey::PriceAsc);
    }

    #[test]
    fn test_products_query_errors() {
        let Route::Products(params) = Route::parse("/products?sort=popular").unwrap() else {
            panic!("expected products route");
        };
        assert!(matches!(
            params.to_query(),
            Err(RouteError::InvalidParameter { name, .. }) if name == "sort"
        ));
    }

    #[test]
    fn test_category_all_and_link_roundtrip() {
        let route = Route::parse("/products?category=all").unwrap();
        let Route::Products(params) = &route else {
            panic!("expected products route");
        };
        assert_eq!(params.to_query().unwrap().category, None);

        let link = Route::category(Category::PreWorkout).path();
        assert_eq!(link, "/products?category=pre-workout");
        assert_eq!(Route::parse(&link).unwrap(), Route::category(Category::PreWorkout));
    }

    #[test]
    fn test_access_levels() {
        assert_eq!(Route::Profile.access(), Access::Authenticated);
        assert_eq!(Route::SellerOrders.access(), Access::Seller);
        assert_eq!(Route::Cart.access(), Access::Public);
        assert_eq!(Route::NotFound { path: "/x".into() }.access(), Access::Public);
    }
}
