use clap::{Parser, Subcommand, ValueEnum};
use shelfview_types::{
    CategoryFilter, PriceRange, Priority, RatingFilter, SortKey, StatusFilter, ViewMode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "shelfview")]
#[command(about = "Manage filtered, sorted, paginated item collections", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: platform data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "todos", global = true)]
    pub collection: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Add a new item to the collection")]
    Add {
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long, help = "Rating from 0 to 5")]
        rating: Option<f64>,

        #[arg(long, help = "low, medium or high")]
        priority: Option<Priority>,

        #[arg(long, help = "http(s) URL of a display image")]
        image_url: Option<String>,

        #[arg(long)]
        out_of_stock: bool,
    },

    #[command(about = "Show the filtered, sorted, paginated view")]
    List {
        #[arg(long, help = "Case-insensitive match on name or description")]
        search: Option<String>,

        #[arg(long, help = "Category name, or 'all'")]
        category: Option<CategoryFilter>,

        #[arg(long, help = "Price bracket: 0-50, 51-100, 101-200, 201-500, 501+")]
        price: Option<PriceRange>,

        #[arg(long, help = "Minimum rating, e.g. '4+'")]
        rating: Option<RatingFilter>,

        #[arg(long, help = "all, pending or completed")]
        status: Option<StatusFilter>,

        #[arg(long, help = "storage, name[-desc], price[-desc], rating[-desc]")]
        sort: Option<SortKey>,

        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long, help = "grid or list")]
        view: Option<ViewMode>,
    },

    #[command(about = "Flip an item's completion state")]
    Toggle {
        #[arg(help = "Item id or unique id prefix")]
        id: String,
    },

    #[command(about = "Edit fields of an existing item")]
    Edit {
        #[arg(help = "Item id or unique id prefix")]
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        rating: Option<f64>,

        #[arg(long, help = "true or false")]
        in_stock: Option<bool>,

        #[arg(long)]
        priority: Option<Priority>,

        #[arg(long)]
        image_url: Option<String>,
    },

    #[command(about = "Delete an item")]
    Delete {
        #[arg(help = "Item id or unique id prefix")]
        id: String,
    },

    #[command(about = "Remove completed items, or everything with --all")]
    Clear {
        #[arg(long)]
        all: bool,
    },

    #[command(about = "Show completion statistics for the collection")]
    Stats,

    #[command(about = "List collections present in the data store")]
    Collections,

    #[command(about = "View or change persisted display defaults")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the active configuration")]
    Show,

    #[command(about = "Persist display defaults to config.toml")]
    Set {
        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long)]
        view: Option<ViewMode>,

        #[arg(long)]
        sort: Option<SortKey>,
    },
}
