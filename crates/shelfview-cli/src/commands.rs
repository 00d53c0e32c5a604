use std::path::Path;

use anyhow::Result;
use shelfview_runtime::{Config, Controller, resolve_data_dir};
use shelfview_store::{CollectionStore, KvStore};
use shelfview_types::{ItemDraft, ItemPatch, Priority};

use crate::args::{Cli, Commands, ConfigCommand};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    std::fs::create_dir_all(&data_dir)?;

    let config_path = data_dir.join("config.toml");
    let mut config = Config::load_from(&config_path)?;

    let Some(command) = cli.command else {
        show_guidance(&cli.collection);
        return Ok(());
    };

    match command {
        Commands::Add {
            name,
            description,
            category,
            price,
            rating,
            priority,
            image_url,
            out_of_stock,
        } => {
            let draft = ItemDraft {
                name,
                description: description.unwrap_or_default(),
                category,
                price,
                rating,
                in_stock: !out_of_stock,
                priority: priority.unwrap_or(Priority::Low),
                image_url,
            };
            let mut controller = open_controller(&data_dir, &cli.collection, &config)?;
            handlers::add::handle(&mut controller, draft, cli.format)
        }

        Commands::List {
            search,
            category,
            price,
            rating,
            status,
            sort,
            page,
            page_size,
            view,
        } => {
            if let Some(size) = page_size {
                if size == 0 {
                    anyhow::bail!("page size must be at least 1");
                }
                config.display.page_size = size;
            }
            let mut controller = open_controller(&data_dir, &cli.collection, &config)?;
            let opts = handlers::list::ListOpts {
                search,
                category,
                price,
                rating,
                status,
                sort,
                page,
                view,
            };
            handlers::list::handle(&mut controller, opts, cli.format)
        }

        Commands::Toggle { id } => {
            let mut controller = open_controller(&data_dir, &cli.collection, &config)?;
            handlers::toggle::handle(&mut controller, &id, cli.format)
        }

        Commands::Edit {
            id,
            name,
            description,
            category,
            price,
            rating,
            in_stock,
            priority,
            image_url,
        } => {
            let patch = ItemPatch {
                name,
                description,
                category,
                price,
                rating,
                in_stock,
                priority,
                image_url,
            };
            let mut controller = open_controller(&data_dir, &cli.collection, &config)?;
            handlers::edit::handle(&mut controller, &id, patch, cli.format)
        }

        Commands::Delete { id } => {
            let mut controller = open_controller(&data_dir, &cli.collection, &config)?;
            handlers::delete::handle(&mut controller, &id, cli.format)
        }

        Commands::Clear { all } => {
            let mut controller = open_controller(&data_dir, &cli.collection, &config)?;
            handlers::clear::handle(&mut controller, all, cli.format)
        }

        Commands::Stats => {
            let controller = open_controller(&data_dir, &cli.collection, &config)?;
            handlers::stats::handle(&controller, cli.format)
        }

        Commands::Collections => {
            let kv = KvStore::open(&data_dir.join("shelfview.db"))?;
            handlers::collections::handle(&kv, cli.format)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&config, cli.format),
            ConfigCommand::Set {
                page_size,
                view,
                sort,
            } => handlers::config::set(config, &config_path, page_size, view, sort),
        },
    }
}

fn open_controller(data_dir: &Path, collection: &str, config: &Config) -> Result<Controller> {
    let kv = KvStore::open(&data_dir.join("shelfview.db"))?;
    let store = CollectionStore::load(kv, collection)?;

    let report = store.load_report();
    if report.malformed {
        eprintln!(
            "Warning: snapshot for '{}' was unreadable; starting with an empty collection",
            collection
        );
    }
    if report.skipped > 0 {
        eprintln!(
            "Warning: dropped {} unreadable record(s) from '{}'",
            report.skipped, collection
        );
    }

    Ok(Controller::new(store, config))
}

fn show_guidance(collection: &str) {
    println!("shelfview - manage filtered, sorted, paginated item collections");
    println!();
    println!("Active collection: {}", collection);
    println!();
    println!("Common commands:");
    println!("  shelfview add <name>               Add an item");
    println!("  shelfview list                     Show the current view");
    println!("  shelfview list --status pending    Filter the view");
    println!("  shelfview toggle <id>              Flip completion");
    println!("  shelfview stats                    Completion statistics");
    println!();
    println!("Run 'shelfview --help' for the full command list.");
}
