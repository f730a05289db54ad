//! Session and profile commands.

use anyhow::{bail, Context as _, Result};
use fitstore_auth::{ProfileUpdate, Registration, Role, User};
use fitstore_router::Route;
use serde_json::json;

use super::{LoginArgs, ProfileArgs, ProfileCommand, RegisterArgs};
use crate::context::Context;
use crate::output::status_badge;

fn landed(ctx: &Context, route: &Route) {
    if let Some(user) = ctx.store.current_user() {
        ctx.output
            .success(&format!("Logged in as {} ({})", user.name, user.role));
    }
    ctx.output.kv("next", &route.path());
    if ctx.output.is_json() {
        ctx.output
            .json(&json!({ "user": ctx.store.current_user(), "next": route.path() }));
    }
}

/// Run the login command.
pub fn login(args: LoginArgs, ctx: &mut Context) -> Result<()> {
    let route = match (args.demo, args.email, args.password) {
        (Some(role), _, _) => {
            let role: Role = role.parse().context("--demo takes buyer or seller")?;
            ctx.store.demo_login(role)?
        }
        (None, Some(email), Some(password)) => ctx.store.login(&email, &password)?,
        _ => bail!("Email and password are required"),
    };
    landed(ctx, &route);
    Ok(())
}

/// Run the logout command.
pub fn logout(ctx: &mut Context) -> Result<()> {
    if !ctx.store.is_authenticated() {
        ctx.output.info("Not logged in");
        return Ok(());
    }
    let route = ctx.store.logout()?;
    ctx.output.success("Logged out");
    ctx.output.kv("next", &route.path());
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "next": route.path() }));
    }
    Ok(())
}

/// Run the register command.
pub fn register(args: RegisterArgs, ctx: &mut Context) -> Result<()> {
    let form = Registration {
        name: args.name,
        email: args.email,
        phone: args.phone,
        password: args.password,
        confirm_password: args.confirm_password,
        role: args.role.parse().context("--role takes buyer or seller")?,
    };
    let route = ctx.store.register(form)?;
    landed(ctx, &route);
    Ok(())
}

fn print_user(ctx: &Context, user: &User) {
    ctx.output.header(&user.name);
    ctx.output.kv("id", user.id.as_str());
    ctx.output.kv("email", &user.email);
    if !user.phone.is_empty() {
        ctx.output.kv("phone", &user.phone);
    }
    ctx.output.kv("role", user.role.as_str());
    if let Some(primary) = user.addresses.primary() {
        ctx.output.kv("address", &primary.one_line());
    }
}

/// Run the whoami command.
pub fn whoami(ctx: &Context) -> Result<()> {
    match ctx.store.current_user() {
        Some(user) => {
            if ctx.output.is_json() {
                ctx.output.json(user);
            } else {
                print_user(ctx, user);
            }
        }
        None => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::Value::Null);
            } else {
                ctx.output.info("Not logged in. Use `fitstore login` to sign in.");
            }
        }
    }
    Ok(())
}

/// Run the profile command.
pub fn profile(args: ProfileArgs, ctx: &mut Context) -> Result<()> {
    match args.command.unwrap_or(ProfileCommand::Show) {
        ProfileCommand::Show => {
            let user = ctx
                .store
                .current_user()
                .ok_or(fitstore_core::StoreError::LoginRequired)?;
            if ctx.output.is_json() {
                ctx.output.json(user);
            } else {
                print_user(ctx, user);
            }
            Ok(())
        }
        ProfileCommand::Edit { name, email, phone } => {
            let update = ProfileUpdate {
                name,
                email,
                phone,
                addresses: None,
            };
            if update.is_empty() {
                bail!("Nothing to change; pass --name, --email or --phone");
            }
            let user = ctx.store.update_profile(update)?.clone();
            ctx.output.success("Profile updated");
            if ctx.output.is_json() {
                ctx.output.json(&user);
            } else {
                print_user(ctx, &user);
            }
            Ok(())
        }
        ProfileCommand::Orders => orders(ctx),
    }
}

fn orders(ctx: &Context) -> Result<()> {
    let orders = ctx.store.my_orders()?;

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header(&format!("My Orders ({})", orders.len()));
    if orders.is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }
    for order in orders {
        ctx.output.blank();
        ctx.output.info(&format!(
            "{}  {}  {}",
            order.id,
            order.order_date.format("%d %b %Y"),
            status_badge(order.status)
        ));
        for item in &order.items {
            ctx.output.list_item(&format!(
                "{} x {} @ {}",
                item.quantity,
                item.name,
                item.price.display()
            ));
        }
        ctx.output.kv("total", &order.total_amount.display());
        if let Some(at) = order.delivery_date {
            ctx.output.kv("delivered", &at.format("%d %b %Y").to_string());
        } else if let Some(at) = order.expected_delivery {
            ctx.output.kv("expected", &at.format("%d %b %Y").to_string());
        }
        ctx.output.kv("ship to", &order.shipping_address.one_line());
    }
    Ok(())
}
