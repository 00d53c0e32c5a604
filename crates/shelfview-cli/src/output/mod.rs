pub mod format;
pub mod json;
pub mod table;

pub use json::JsonRenderer;
pub use table::TableRenderer;
