use std::fmt;

/// Result type for shelfview-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input rejected before any state change
    Validation {
        field: &'static str,
        message: String,
    },

    /// Page request outside [1, total_pages]; callers must clamp first
    PageOutOfRange {
        page: usize,
        total_pages: usize,
    },

    /// Page size must be at least 1
    InvalidPageSize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            Error::PageOutOfRange { page, total_pages } => {
                write!(f, "Page {} is out of range (1-{})", page, total_pages)
            }
            Error::InvalidPageSize => write!(f, "Page size must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}
