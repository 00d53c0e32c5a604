pub mod add;
pub mod clear;
pub mod collections;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod stats;
pub mod toggle;

use anyhow::Result;
use shelfview_runtime::Controller;
use shelfview_types::ItemId;

/// Resolve an id argument (full id or unique prefix) against the store.
/// `None` means nothing matched; an ambiguous prefix is an error.
pub(crate) fn resolve_id(controller: &Controller, raw: &str) -> Result<Option<ItemId>> {
    Ok(controller.store().find_by_prefix(raw)?)
}

pub(crate) fn print_not_found(raw: &str) {
    println!("No item matches '{}'", raw);
}
