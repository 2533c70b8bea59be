use thiserror::Error;

/// Mockbase-wide error type for the record store.
///
/// Every document store and record operation returns this type. The HTTP layer
/// maps each variant onto a status code; the command-line front-end logs it and
/// exits.
#[derive(Error, Debug)]
pub enum MockbaseError {
    /// The backing file could not be read or written.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The backing document is not a valid JSON object, or could not be serialized.
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// A request body could not be interpreted as a record.
    #[error("Invalid record body: {reason}")]
    InvalidBody {
        reason: String,
    },

    /// The identifier supplied by the caller is not a number.
    #[error("Invalid record id: {id}")]
    InvalidRecordId {
        id: String,
    },

    /// The named collection does not exist, or its value is not an array.
    #[error("Collection '{name}' not found in document")]
    CollectionNotFound {
        name: String,
    },

    /// No record in the collection carries the requested identifier.
    #[error("Record '{id}' not found in collection '{collection}'")]
    RecordNotFound {
        id:         String,
        collection: String,
    },

    /// The document member exists but cannot hold records.
    #[error("Member '{name}' exists but is not a collection of records")]
    InvalidCollection {
        name: String,
    },

    /// A stored record lacks a numeric identifier or is not an object.
    #[error("Malformed record in collection '{collection}': {reason}")]
    MalformedRecord {
        collection: String,
        reason:     String,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },
}

impl MockbaseError {
    /// Returns true when the error means "nothing matched" rather than a failure
    /// of the store itself.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CollectionNotFound { .. } | Self::RecordNotFound { .. }
        )
    }

    /// Returns true when the error was caused by caller input rather than by the
    /// backing store.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBody { .. } |
                Self::InvalidRecordId { .. } |
                Self::CollectionNotFound { .. } |
                Self::RecordNotFound { .. } |
                Self::InvalidCollection { .. }
        )
    }
}

/// Result type alias for Mockbase operations.
pub type Result<T> = std::result::Result<T, MockbaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = MockbaseError::RecordNotFound {
            id:         "2".to_owned(),
            collection: "notes".to_owned(),
        };
        assert!(err.is_not_found());
        assert!(err.is_client_error());

        let err = MockbaseError::CollectionNotFound {
            name: "missing".to_owned(),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_store_failures_are_not_client_errors() {
        let err = MockbaseError::from(std::io::Error::other("disk full"));
        assert!(!err.is_not_found());
        assert!(!err.is_client_error());

        let err = MockbaseError::MalformedRecord {
            collection: "notes".to_owned(),
            reason:     "record has no numeric 'id' field".to_owned(),
        };
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_messages() {
        let err = MockbaseError::InvalidRecordId {
            id: "abc".to_owned(),
        };
        assert_eq!(err.to_string(), "Invalid record id: abc");

        let err = MockbaseError::RecordNotFound {
            id:         "7".to_owned(),
            collection: "posts".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Record '7' not found in collection 'posts'"
        );
    }
}
