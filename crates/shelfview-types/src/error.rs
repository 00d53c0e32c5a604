use std::fmt;

/// Result type for shelfview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A user-supplied selector token didn't match any known value
    UnknownToken {
        kind: &'static str,
        value: String,
    },

    /// Item identifier failed to parse
    InvalidId(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownToken { kind, value } => {
                write!(f, "Unrecognized {} value: '{}'", kind, value)
            }
            Error::InvalidId(value) => write!(f, "Invalid item id: '{}'", value),
        }
    }
}

impl std::error::Error for Error {}
