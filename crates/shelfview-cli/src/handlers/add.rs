use anyhow::Result;
use shelfview_runtime::{Controller, Outcome};
use shelfview_types::{Action, ItemDraft};

use crate::args::OutputFormat;

pub fn handle(controller: &mut Controller, draft: ItemDraft, format: OutputFormat) -> Result<()> {
    let outcome = controller.dispatch(Action::Add(draft))?;

    if let Outcome::Added(item) = outcome {
        match format {
            OutputFormat::Plain => println!("Added {} {}", item.id.short(), item.name),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&item)?),
        }
    }

    Ok(())
}
