//! Route resolution command.

use anyhow::Result;
use fitstore_router::Navigation;
use serde_json::json;

use super::RouteArgs;
use crate::context::Context;

/// Run the route command.
pub fn run(args: RouteArgs, ctx: &Context) -> Result<()> {
    let nav = ctx.store.navigate(&args.path)?;
    let viewer = ctx
        .store
        .current_user()
        .map(|u| u.role.as_str())
        .unwrap_or("anonymous");

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "path": args.path,
            "viewer": viewer,
            "navigation": nav,
            "access": nav.route().access(),
        }));
        return Ok(());
    }

    ctx.output.kv("viewer", viewer);
    match &nav {
        Navigation::Render(route) if route.is_not_found() => {
            ctx.output.warn(&format!("{} is not a page (404)", route));
        }
        Navigation::Render(route) => {
            ctx.output.success(&format!("render {}", route));
        }
        Navigation::Redirect(route) => {
            ctx.output.warn(&format!("redirect to {}", route));
        }
    }
    Ok(())
}
