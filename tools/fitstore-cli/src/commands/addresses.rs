//! Saved address commands.

use anyhow::Result;
use fitstore_commerce::address::AddressDraft;
use fitstore_commerce::ids::AddressId;
use fitstore_core::StoreError;
use serde_json::json;

use super::{AddressFields, AddressesArgs, AddressesCommand};
use crate::context::Context;

impl From<AddressFields> for AddressDraft {
    fn from(fields: AddressFields) -> Self {
        AddressDraft {
            street: fields.street,
            city: fields.city,
            state: fields.state,
            pincode: fields.pincode,
            is_primary: fields.primary,
        }
    }
}

/// Run the addresses command.
pub fn run(args: AddressesArgs, ctx: &mut Context) -> Result<()> {
    match args.command.unwrap_or(AddressesCommand::List) {
        AddressesCommand::List => return list(ctx),
        AddressesCommand::Add(fields) => {
            let id = ctx.store.add_address(fields.into())?;
            ctx.output.success(&format!("Address {} saved", id));
        }
        AddressesCommand::Edit { id, fields } => {
            ctx.store
                .update_address(&AddressId::new(id), fields.into())?;
            ctx.output.success("Address updated");
        }
        AddressesCommand::Remove { id } => {
            ctx.store.remove_address(&AddressId::new(id))?;
            ctx.output.success("Address removed");
        }
        AddressesCommand::Primary { id } => {
            ctx.store.set_primary_address(&AddressId::new(id))?;
            ctx.output.success("Primary address updated");
        }
    }
    list(ctx)
}

fn list(ctx: &Context) -> Result<()> {
    let user = ctx.store.current_user().ok_or(StoreError::LoginRequired)?;
    let book = &user.addresses;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "addresses": book }));
        return Ok(());
    }

    ctx.output.header(&format!("Saved Addresses ({})", book.len()));
    if book.is_empty() {
        ctx.output
            .info("No saved addresses. Add one with `fitstore addresses add`.");
        return Ok(());
    }
    for address in book.iter() {
        let marker = if address.is_primary { " (primary)" } else { "" };
        ctx.output
            .list_item(&format!("{}  {}{}", address.id, address.one_line(), marker));
    }
    Ok(())
}
