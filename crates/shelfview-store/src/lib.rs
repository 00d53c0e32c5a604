pub mod collection;
pub mod error;
pub mod kv;
pub mod snapshot;

pub use collection::{CollectionStore, LoadReport};
pub use error::{Error, Result};
pub use kv::KvStore;
pub use snapshot::DecodeOutcome;
