use anyhow::Result;
use shelfview_runtime::{Controller, Outcome};
use shelfview_types::Action;

use crate::args::OutputFormat;
use crate::handlers::{print_not_found, resolve_id};

pub fn handle(controller: &mut Controller, raw_id: &str, format: OutputFormat) -> Result<()> {
    let Some(id) = resolve_id(controller, raw_id)? else {
        print_not_found(raw_id);
        return Ok(());
    };

    let outcome = controller.dispatch(Action::Delete(id))?;

    if let Outcome::Deleted(id) = outcome {
        match format {
            OutputFormat::Plain => println!("Deleted {}", id.short()),
            OutputFormat::Json => println!("{}", serde_json::json!({ "deleted": id })),
        }
    }

    Ok(())
}
