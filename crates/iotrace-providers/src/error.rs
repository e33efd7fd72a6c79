use std::fmt;

/// Result type for iotrace-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
///
/// `Row` wraps failures scoped to a single log row: ingest loops catch it,
/// record a rejection, and keep classifying. Every other variant aborts the
/// operation that raised it. Lookup-table misses are not errors at all;
/// the label helpers substitute an "Unknown" label and cannot fail.
#[derive(Debug)]
pub enum Error {
    /// SQLite access failed
    Sqlite(rusqlite::Error),

    /// Base64 decoding failed
    Base64(base64::DecodeError),

    /// Registry invariant violation (fatal: malformed input upstream)
    Registry(iotrace_types::Error),

    /// A required settings key was absent from a vendor settings store
    MissingSetting(&'static str),

    /// Classification of a single row failed; reject the row and continue
    Row(RowError),
}

/// Per-row classification failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Action-log row with a log type outside the classifiable set
    UnknownLogType { log_type: i64 },

    /// A code field that must parse as an integer did not
    InvalidCode { field: &'static str, value: String },

    /// A JSON row column did not match the expected record shape
    MalformedJson { detail: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sqlite(err) => write!(f, "SQLite error: {}", err),
            Error::Base64(err) => write!(f, "base64 error: {}", err),
            Error::Registry(err) => write!(f, "registry error: {}", err),
            Error::MissingSetting(key) => write!(f, "missing settings key: {}", key),
            Error::Row(err) => write!(f, "row classification failed: {}", err),
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::UnknownLogType { log_type } => {
                write!(f, "unknown log type: {}", log_type)
            }
            RowError::InvalidCode { field, value } => {
                write!(f, "invalid code in field '{}': '{}'", field, value)
            }
            RowError::MalformedJson { detail } => write!(f, "malformed JSON row: {}", detail),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Sqlite(err) => Some(err),
            Error::Base64(err) => Some(err),
            Error::Registry(err) => Some(err),
            Error::MissingSetting(_) | Error::Row(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Sqlite(err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Base64(err)
    }
}

impl From<iotrace_types::Error> for Error {
    fn from(err: iotrace_types::Error) -> Self {
        Error::Registry(err)
    }
}
