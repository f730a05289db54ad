//! Shopping cart commands.

use anyhow::Result;
use fitstore_commerce::ids::ProductId;
use serde_json::json;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::truncate;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &mut Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show(ctx),
        CartCommand::Add { id, qty } => {
            let id = ProductId::new(id);
            let before = ctx
                .store
                .cart()?
                .cart()
                .get(&id)
                .map_or(0, |line| line.quantity);
            let quantity = ctx.store.add_to_cart(&id, qty)?;
            if quantity < before.saturating_add(qty) {
                ctx.output.warn(&format!("Only {} available; quantity capped", quantity));
            }
            ctx.output
                .success(&format!("Added to cart ({} x {})", quantity, name_of(ctx, &id)));
            report(ctx, json!({ "product_id": id, "quantity": quantity }))
        }
        CartCommand::Remove { id } => {
            let id = ProductId::new(id);
            let removed = ctx.store.remove_from_cart(&id)?;
            if removed {
                ctx.output.success(&format!("Removed {} from cart", name_of(ctx, &id)));
            } else {
                ctx.output.warn(&format!("{} is not in your cart", id));
            }
            report(ctx, json!({ "product_id": id, "removed": removed }))
        }
        CartCommand::Set { id, qty } => {
            let id = ProductId::new(id);
            if !ctx.store.set_cart_quantity(&id, qty)? {
                ctx.output.warn(&format!("{} is not in your cart", id));
            } else if qty <= 0 {
                ctx.output.success(&format!("Removed {} from cart", name_of(ctx, &id)));
            } else {
                ctx.output.success("Cart updated");
            }
            show(ctx)
        }
        CartCommand::Clear => {
            ctx.store.clear_cart()?;
            ctx.output.success("Cart cleared");
            report(ctx, json!({ "cleared": true }))
        }
    }
}

fn name_of(ctx: &Context, id: &ProductId) -> String {
    ctx.store
        .catalog()
        .get(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn report(ctx: &Context, value: serde_json::Value) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&value);
    }
    Ok(())
}

fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.store.cart()?.cart();
    let summary = ctx.store.cart_summary()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "lines": cart.lines, "summary": summary }));
        return Ok(());
    }

    ctx.output.header(&format!("Shopping Cart ({} items)", summary.item_count));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty. Browse /products to add something.");
        return Ok(());
    }

    let widths = [4, 30, 10, 4, 11];
    ctx.output
        .table_header(&["ID", "Product", "Price", "Qty", "Total"], &widths);
    for line in &cart.lines {
        let total = line.line_total()?;
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                &truncate(&line.name, widths[1]),
                &line.unit_price.display(),
                &line.quantity.to_string(),
                &total.display(),
            ],
            &widths,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("subtotal", &summary.subtotal.display());
    let shipping = if summary.has_free_shipping() {
        "FREE".to_string()
    } else {
        summary.shipping.display()
    };
    ctx.output.kv("shipping", &shipping);
    ctx.output.kv("tax", &summary.tax.display());
    ctx.output.kv("total", &summary.grand_total.display());
    if let Some(remaining) = summary.free_shipping_remaining {
        ctx.output.info(&format!(
            "Add {} more for free shipping",
            remaining.display()
        ));
    }

    Ok(())
}
