pub mod config;
pub mod controller;
pub mod error;
pub mod renderer;

pub use config::{Config, DisplayConfig, resolve_data_dir};
pub use controller::{Controller, Outcome, ViewFrame};
pub use error::{Error, Result};
pub use renderer::{InputAdapter, Renderer};
