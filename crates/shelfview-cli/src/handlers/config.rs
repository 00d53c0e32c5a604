use std::path::PathBuf;

use anyhow::Result;
use shelfview_runtime::Config;
use shelfview_types::{SortKey, ViewMode};

use crate::args::OutputFormat;

pub fn show(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            println!("display.page_size = {}", config.display.page_size);
            println!("display.view      = {}", config.display.view);
            println!("display.sort      = {}", config.display.sort);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }

    Ok(())
}

pub fn set(
    mut config: Config,
    config_path: &PathBuf,
    page_size: Option<usize>,
    view: Option<ViewMode>,
    sort: Option<SortKey>,
) -> Result<()> {
    if page_size.is_none() && view.is_none() && sort.is_none() {
        anyhow::bail!("nothing to set; pass --page-size, --view or --sort");
    }

    if let Some(size) = page_size {
        if size == 0 {
            anyhow::bail!("page size must be at least 1");
        }
        config.display.page_size = size;
    }
    if let Some(view) = view {
        config.display.view = view;
    }
    if let Some(sort) = sort {
        config.display.sort = sort;
    }

    config.save_to(config_path)?;
    println!("Configuration saved to {}", config_path.display());

    Ok(())
}
