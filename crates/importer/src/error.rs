use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::error::StorageError),

    #[error("Strava API error: {0}")]
    StravaError(String),

    #[error("Strava not connected")]
    NotConnected,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_database_errors() {
        let err = ImporterError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, ImporterError::DatabaseError(_)));
        assert!(err.to_string().starts_with("Database error"));
    }
}
