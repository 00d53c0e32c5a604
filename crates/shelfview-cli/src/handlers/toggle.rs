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

    let outcome = controller.dispatch(Action::Toggle(id))?;

    if let Outcome::Toggled { id, completed } = outcome {
        match format {
            OutputFormat::Plain => {
                if completed {
                    println!("Completed {}", id.short());
                } else {
                    println!("Reopened {}", id.short());
                }
            }
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "id": id, "completed": completed })
            ),
        }
    }

    Ok(())
}
