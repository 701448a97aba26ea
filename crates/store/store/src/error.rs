use thiserror::Error;

/// Errors from parcel store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("operation timed out after {0:?}")]
    Timeout(std::time::Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = StoreError::Connection("refused".into());
        assert_eq!(err.to_string(), "connection error: refused");

        let err = StoreError::Backend("relation does not exist".into());
        assert_eq!(err.to_string(), "backend error: relation does not exist");

        let err = StoreError::Timeout(std::time::Duration::from_secs(2));
        assert_eq!(err.to_string(), "operation timed out after 2s");
    }
}
