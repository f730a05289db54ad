//! Catalog browsing: home, listing and product pages.

use anyhow::{Context as _, Result};
use fitstore_commerce::catalog::Product;
use fitstore_commerce::ids::ProductId;
use fitstore_router::{ProductsParams, Route};
use serde_json::json;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{rating, stock_label, truncate};

const WIDTHS: [usize; 5] = [4, 30, 12, 11, 16];

/// Print products as a table.
pub(crate) fn product_table(ctx: &Context, products: &[&Product]) {
    let low = ctx.store.config().low_stock_threshold;
    ctx.output
        .table_header(&["ID", "Name", "Price", "Rating", "Stock"], &WIDTHS);
    for p in products {
        ctx.output.table_row(
            &[
                p.id.as_str(),
                &truncate(&p.name, WIDTHS[1]),
                &p.price.display(),
                &rating(p.rating, p.review_count),
                &stock_label(p.stock, low),
            ],
            &WIDTHS,
        );
    }
}

/// Run the home command.
pub fn home(ctx: &Context) -> Result<()> {
    let view = ctx.store.home();

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(&format!("Welcome to {}", ctx.store.config().name));
    ctx.output.info("Premium supplements for pre-workout, recovery and everyday health.");

    ctx.output.header("Shop by Category");
    for category in view.categories {
        ctx.output.list_item(&format!(
            "{:14} {}  {}",
            category.label(),
            category.tagline(),
            console::style(Route::category(category).path()).dim()
        ));
    }

    ctx.output.header("Featured Products");
    let featured: Vec<&Product> = view.featured.iter().collect();
    product_table(ctx, &featured);

    Ok(())
}

/// Run the products command.
pub fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let params = ProductsParams {
        search: args.search,
        category: args.category,
        sort: args.sort,
    };
    let query = params.to_query().context("Invalid product filters")?;
    let listing = ctx.store.products(&query);
    let route = Route::Products(ProductsParams::from_product_query(&query));

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "path": route.path(),
            "count": listing.len(),
            "products": listing,
        }));
        return Ok(());
    }

    let title = match query.category {
        Some(category) => category.label().to_string(),
        None => "All Products".to_string(),
    };
    ctx.output.header(&title);
    ctx.output.debug(&format!("route: {}", route));
    ctx.output.kv("sort", query.sort.display_name());
    ctx.output.kv("showing", &format!("{} products", listing.len()));
    ctx.output.blank();

    if listing.is_empty() {
        ctx.output.warn("No products found. Try a different search or category.");
        return Ok(());
    }
    product_table(ctx, &listing);

    Ok(())
}

/// Run the product command.
pub fn product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let view = match ctx.store.product(&id) {
        Ok(view) => view,
        Err(e) if e.is_not_found() => {
            ctx.output.header("Product Not Found");
            ctx.output.info(&format!(
                "The product you are looking for does not exist. Browse {}",
                Route::Products(ProductsParams::default())
            ));
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    let p = view.product;
    ctx.output.header(&p.name);
    ctx.output.kv("brand", &p.brand);
    ctx.output.kv("category", p.category.label());
    ctx.output.kv("price", &p.price.display());
    ctx.output.kv("rating", &rating(p.rating, p.review_count));
    ctx.output.kv(
        "stock",
        &stock_label(p.stock, ctx.store.config().low_stock_threshold),
    );
    if !p.weight.is_empty() {
        ctx.output.kv("weight", &p.weight);
    }
    if !p.flavors.is_empty() {
        let flavors: Vec<String> = p
            .flavors
            .iter()
            .map(|f| {
                if Some(f.as_str()) == view.default_flavor {
                    format!("{} (selected)", f)
                } else {
                    f.clone()
                }
            })
            .collect();
        ctx.output.kv("flavors", &flavors.join(", "));
    }
    ctx.output.blank();
    ctx.output.info(&p.description);

    if view.can_buy {
        if view.in_cart > 0 {
            ctx.output.kv("in cart", &view.in_cart.to_string());
        }
        ctx.output
            .kv("wishlist", if view.in_wishlist { "saved" } else { "not saved" });
    } else if !ctx.store.is_authenticated() {
        ctx.output.debug("log in as a buyer to add this to your cart");
    }

    if !view.related.is_empty() {
        ctx.output.header("Related Products");
        product_table(ctx, &view.related);
    }

    Ok(())
}
