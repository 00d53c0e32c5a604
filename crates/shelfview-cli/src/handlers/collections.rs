use anyhow::Result;
use shelfview_store::KvStore;

use crate::args::OutputFormat;

pub fn handle(kv: &KvStore, format: OutputFormat) -> Result<()> {
    let keys = kv.keys()?;

    match format {
        OutputFormat::Plain => {
            if keys.is_empty() {
                println!("No collections yet.");
            } else {
                for key in keys {
                    println!("{}", key);
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&keys)?),
    }

    Ok(())
}
