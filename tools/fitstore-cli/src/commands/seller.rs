//! Seller back-office commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use fitstore_commerce::catalog::{Product, ProductDraft};
use fitstore_commerce::ids::{OrderId, ProductId};
use fitstore_commerce::money::Money;
use fitstore_commerce::orders::{Order, OrderStatus};
use serde_json::json;

use super::browse::product_table;
use super::{ProductFields, SellerArgs, SellerCommand, SellerOrdersCommand, SellerProductsCommand};
use crate::context::Context;
use crate::output::{status_badge, truncate};

/// Run the seller command.
pub fn run(args: SellerArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        SellerCommand::Dashboard => dashboard(ctx),
        SellerCommand::Products { command } => {
            match command.unwrap_or(SellerProductsCommand::List {
                search: String::new(),
            }) {
                SellerProductsCommand::List { search } => list_products(ctx, &search),
                SellerProductsCommand::Add(fields) => add_product(ctx, fields),
                SellerProductsCommand::Edit { id, fields } => edit_product(ctx, &id, fields),
                SellerProductsCommand::Delete { id, yes } => delete_product(ctx, &id, yes),
            }
        }
        SellerCommand::Orders { command } => match command.unwrap_or(SellerOrdersCommand::List {
            search: String::new(),
            status: None,
        }) {
            SellerOrdersCommand::List { search, status } => {
                list_orders(ctx, &search, status.as_deref())
            }
            SellerOrdersCommand::Status { id, status } => set_status(ctx, &id, &status),
        },
    }
}

fn dashboard(ctx: &Context) -> Result<()> {
    let dashboard = ctx.store.dashboard()?;

    if ctx.output.is_json() {
        ctx.output.json(&dashboard);
        return Ok(());
    }

    ctx.output.header("Seller Dashboard");
    ctx.output
        .kv("total products", &dashboard.total_products.to_string());
    ctx.output.kv("total orders", &dashboard.total_orders.to_string());
    ctx.output.kv("revenue", &dashboard.total_revenue.display());
    ctx.output
        .kv("pending orders", &dashboard.pending_orders.to_string());

    ctx.output.header(&format!(
        "Low Stock Alert ({} products below {})",
        dashboard.low_stock_count,
        ctx.store.config().low_stock_threshold
    ));
    if dashboard.low_stock.is_empty() {
        ctx.output.success("All products are well stocked");
    } else {
        let low: Vec<&Product> = dashboard.low_stock.iter().collect();
        product_table(ctx, &low);
    }

    ctx.output.header("Recent Orders");
    let recent: Vec<&Order> = dashboard.recent_orders.iter().collect();
    order_table(ctx, &recent);

    Ok(())
}

fn list_products(ctx: &mut Context, search: &str) -> Result<()> {
    let products = ctx.store.seller_products(search)?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output
        .header(&format!("Products ({} of {})", products.len(), ctx.store.catalog().len()));
    if products.is_empty() {
        ctx.output.info("No products match your search.");
        return Ok(());
    }
    let refs: Vec<&Product> = products.iter().collect();
    product_table(ctx, &refs);
    Ok(())
}

fn draft_from(ctx: &Context, fields: ProductFields) -> Result<ProductDraft> {
    let currency = ctx.store.config().currency;
    let price = fields
        .price
        .checked_mul(currency.minor_per_major())
        .map(|minor| Money::new(minor, currency))
        .context("Price is too large")?;
    Ok(ProductDraft {
        name: fields.name,
        description: fields.description,
        price,
        category: fields.category.parse()?,
        stock: fields.stock,
        image: fields.image,
        brand: fields.brand,
        rating: fields.rating,
        review_count: fields.reviews,
        flavors: fields
            .flavors
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect(),
        weight: fields.weight,
    })
}

fn add_product(ctx: &mut Context, fields: ProductFields) -> Result<()> {
    let draft = draft_from(ctx, fields)?;
    let id = ctx.store.add_product(draft)?;
    ctx.output.success(&format!("Product {} added", id));
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "id": id }));
    }
    Ok(())
}

fn edit_product(ctx: &mut Context, id: &str, fields: ProductFields) -> Result<()> {
    let id = ProductId::new(id);
    let draft = draft_from(ctx, fields)?;
    ctx.store.update_product(&id, draft)?;
    ctx.output.success(&format!("Product {} updated", id));
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "id": id }));
    }
    Ok(())
}

fn delete_product(ctx: &mut Context, id: &str, yes: bool) -> Result<()> {
    let id = ProductId::new(id);
    // Fail on a missing product or a non-seller before prompting
    let name = ctx
        .store
        .seller_products("")?
        .into_iter()
        .find(|p| p.id == id)
        .map(|p| p.name)
        .ok_or_else(|| fitstore_commerce::CommerceError::ProductNotFound(id.to_string()))?;

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", name))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Delete cancelled");
            return Ok(());
        }
    }

    let removed = ctx.store.delete_product(&id)?;
    ctx.output.success(&format!("Deleted {}", removed.name));
    if ctx.output.is_json() {
        ctx.output.json(&removed);
    }
    Ok(())
}

fn order_table(ctx: &Context, orders: &[&Order]) {
    let widths = [8, 12, 6, 11, 10];
    ctx.output
        .table_header(&["Order", "Date", "Items", "Total", "Status"], &widths);
    for order in orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &order.order_date.format("%d %b %Y").to_string(),
                &order.item_count().to_string(),
                &order.total_amount.display(),
                &status_badge(order.status),
            ],
            &widths,
        );
    }
}

fn list_orders(ctx: &Context, search: &str, status: Option<&str>) -> Result<()> {
    let status: Option<OrderStatus> = match status {
        None | Some("all") => None,
        Some(s) => Some(s.parse()?),
    };
    let orders = ctx.store.seller_orders(search, status)?;
    let counts = ctx.store.order_counts()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "counts": counts, "orders": orders }));
        return Ok(());
    }

    ctx.output.header("Orders");
    ctx.output.info(&format!(
        "All ({})  Processing ({})  Shipped ({})  Delivered ({})",
        counts.total, counts.processing, counts.shipped, counts.delivered
    ));
    ctx.output.blank();
    if orders.is_empty() {
        ctx.output.info("No orders found.");
        return Ok(());
    }
    order_table(ctx, &orders);

    if ctx.output.is_verbose() {
        for order in &orders {
            ctx.output.blank();
            ctx.output.info(&format!("{} ship to {}", order.id, order.shipping_address.one_line()));
            for item in &order.items {
                ctx.output.list_item(&format!(
                    "{} x {}",
                    item.quantity,
                    truncate(&item.name, 40)
                ));
            }
        }
    }
    Ok(())
}

fn set_status(ctx: &mut Context, id: &str, status: &str) -> Result<()> {
    let status: OrderStatus = status.parse()?;
    let id = OrderId::new(id);
    ctx.store.set_order_status(&id, status)?;
    ctx.output
        .success(&format!("Order {} marked {}", id, status_badge(status)));
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "id": id, "status": status }));
    }
    Ok(())
}
