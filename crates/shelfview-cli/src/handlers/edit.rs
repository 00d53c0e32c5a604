use anyhow::Result;
use shelfview_runtime::{Controller, Outcome};
use shelfview_types::{Action, ItemPatch};

use crate::args::OutputFormat;
use crate::handlers::{print_not_found, resolve_id};

pub fn handle(
    controller: &mut Controller,
    raw_id: &str,
    patch: ItemPatch,
    format: OutputFormat,
) -> Result<()> {
    if patch.is_empty() {
        anyhow::bail!("nothing to edit; pass at least one field flag (see 'edit --help')");
    }

    let Some(id) = resolve_id(controller, raw_id)? else {
        print_not_found(raw_id);
        return Ok(());
    };

    let outcome = controller.dispatch(Action::Edit(id, patch))?;

    if let Outcome::Edited(id) = outcome {
        match format {
            OutputFormat::Plain => println!("Updated {}", id.short()),
            OutputFormat::Json => {
                // The item is still present after an edit.
                if let Some(item) = controller.store().get(id) {
                    println!("{}", serde_json::to_string_pretty(item)?);
                }
            }
        }
    }

    Ok(())
}
