//! Community chat board commands.

use anyhow::Result;
use fitstore_commerce::ids::ChatId;
use serde_json::json;

use super::{ChatArgs, ChatCommand};
use crate::context::Context;

/// Run the chat command.
pub fn run(args: ChatArgs, ctx: &mut Context) -> Result<()> {
    match args.command.unwrap_or(ChatCommand::List {
        search: String::new(),
    }) {
        ChatCommand::List { search } => list(ctx, &search),
        ChatCommand::Post { message } => {
            let id = ctx.store.post_chat(&message)?;
            ctx.output.success(&format!("Posted {}", id));
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "id": id }));
            }
            Ok(())
        }
        ChatCommand::Reply { id, message } => {
            let reply = ctx.store.reply_chat(&ChatId::new(id), &message)?;
            ctx.output.success(&format!("Replied ({})", reply));
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "id": reply }));
            }
            Ok(())
        }
    }
}

fn list(ctx: &Context, search: &str) -> Result<()> {
    let posts = ctx.store.chat_posts(search)?;

    if ctx.output.is_json() {
        ctx.output.json(&posts);
        return Ok(());
    }

    ctx.output.header("Community Chat");
    if posts.is_empty() {
        if search.trim().is_empty() {
            ctx.output.info("No messages yet. Start the conversation!");
        } else {
            ctx.output.info(&format!("No messages match \"{}\"", search.trim()));
        }
        return Ok(());
    }

    for post in posts {
        ctx.output.blank();
        ctx.output.info(&format!(
            "{}  {}  {}",
            console::style(&post.user_name).bold(),
            console::style(post.timestamp.format("%d %b %Y %H:%M")).dim(),
            console::style(&post.id).dim()
        ));
        ctx.output.kv("message", &post.message);
        for reply in &post.replies {
            ctx.output.list_item(&format!(
                "{}: {}",
                console::style(&reply.user_name).bold(),
                reply.message
            ));
        }
    }
    Ok(())
}
