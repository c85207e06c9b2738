//! Route store error types.

use crate::domain::{Location, TransportMode};

/// Errors that can occur when reading or writing the route store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// A route with the same (source, destination, mode) is already stored
    #[error("route already exists: {from}-{to}-{mode}")]
    Duplicate {
        from: Location,
        to: Location,
        mode: TransportMode,
    },

    /// Reading or writing the backing file failed
    #[error("store IO error: {message}")]
    Io { message: String },

    /// The backing file could not be (de)serialized
    #[error("store JSON error: {message}")]
    Json { message: String },

    /// The store refused the write
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::Duplicate {
            from: Location::new("Mumbai"),
            to: Location::new("Delhi"),
            mode: TransportMode::Train,
        };
        assert_eq!(err.to_string(), "route already exists: Mumbai-Delhi-train");

        let err = StoreError::Io {
            message: "permission denied".into(),
        };
        assert_eq!(err.to_string(), "store IO error: permission denied");

        let err = StoreError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "store JSON error: expected value");

        let err = StoreError::Unavailable {
            message: "read-only".into(),
        };
        assert_eq!(err.to_string(), "store unavailable: read-only");
    }
}
