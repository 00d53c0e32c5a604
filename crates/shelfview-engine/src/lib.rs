pub mod error;
pub mod paginate;
pub mod stats;
pub mod validate;
pub mod view;

pub use error::{Error, Result};
pub use paginate::{paginate, total_pages};
pub use stats::{CollectionStats, collection_stats};
pub use validate::{validate_draft, validate_patch};
pub use view::compute_view;
