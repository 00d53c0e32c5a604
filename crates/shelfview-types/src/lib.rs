pub mod action;
pub mod error;
pub mod filter;
pub mod item;
pub mod page;
pub mod sort;

pub use action::*;
pub use error::{Error, Result};
pub use filter::*;
pub use item::*;
pub use page::*;
pub use sort::*;
