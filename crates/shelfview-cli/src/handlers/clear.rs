use anyhow::Result;
use shelfview_runtime::{Controller, Outcome};
use shelfview_types::Action;

use crate::args::OutputFormat;

pub fn handle(controller: &mut Controller, all: bool, format: OutputFormat) -> Result<()> {
    let action = if all {
        Action::ClearAll
    } else {
        Action::ClearCompleted
    };
    let outcome = controller.dispatch(action)?;

    if let Outcome::Cleared(removed) = outcome {
        match format {
            OutputFormat::Plain => {
                if all {
                    println!("Removed all {} item(s)", removed);
                } else {
                    println!("Removed {} completed item(s)", removed);
                }
            }
            OutputFormat::Json => println!("{}", serde_json::json!({ "removed": removed })),
        }
    }

    Ok(())
}
