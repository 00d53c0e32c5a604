use anyhow::Result;
use shelfview_runtime::Controller;

use crate::args::OutputFormat;

pub fn handle(controller: &Controller, format: OutputFormat) -> Result<()> {
    let frame = controller.frame()?;
    let stats = frame.stats;

    match format {
        OutputFormat::Plain => {
            println!("Collection: {}", controller.store().key());
            println!("  Total:     {}", stats.total);
            println!("  Completed: {}", stats.completed);
            println!("  Pending:   {}", stats.pending);
            println!("  Progress:  {}%", stats.progress_percent);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}
