//! Wishlist commands.

use anyhow::Result;
use fitstore_commerce::catalog::Product;
use fitstore_commerce::ids::ProductId;
use serde_json::json;

use super::browse::product_table;
use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;

/// Run the wishlist command.
pub fn run(args: WishlistArgs, ctx: &mut Context) -> Result<()> {
    let (id, saved) = match args.command.unwrap_or(WishlistCommand::Show) {
        WishlistCommand::Show => return show(ctx),
        WishlistCommand::Clear => {
            ctx.store.clear_wishlist()?;
            ctx.output.success("Wishlist cleared");
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "cleared": true }));
            }
            return Ok(());
        }
        WishlistCommand::Add { id } => {
            let id = ProductId::new(id);
            if !ctx.store.add_to_wishlist(&id)? {
                ctx.output.info("Already in your wishlist");
            }
            (id, true)
        }
        WishlistCommand::Remove { id } => {
            let id = ProductId::new(id);
            if !ctx.store.remove_from_wishlist(&id)? {
                ctx.output.info("Not in your wishlist");
            }
            (id, false)
        }
        WishlistCommand::Toggle { id } => {
            let id = ProductId::new(id);
            let saved = ctx.store.toggle_wishlist(&id)?;
            (id, saved)
        }
    };

    if saved {
        ctx.output.success(&format!("{} saved to wishlist", id));
    } else {
        ctx.output.success(&format!("{} removed from wishlist", id));
    }
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "product_id": id, "saved": saved }));
    }
    Ok(())
}

fn show(ctx: &Context) -> Result<()> {
    let wishlist = ctx.store.wishlist()?;

    if ctx.output.is_json() {
        ctx.output.json(wishlist);
        return Ok(());
    }

    ctx.output.header(&format!("My Wishlist ({} items)", wishlist.count()));
    if wishlist.is_empty() {
        ctx.output.info("Your wishlist is empty. Browse /products to find something you like.");
        return Ok(());
    }
    let items: Vec<&Product> = wishlist.items().iter().collect();
    product_table(ctx, &items);
    Ok(())
}
