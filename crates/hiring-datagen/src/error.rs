//! Error types for the data generator.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum DatagenError {
    /// Transport-level HTTP failure or an unreadable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The engine refused to hand a task over to the demo user.
    #[error("Could not claim user task {task_id}: engine answered {status}")]
    ClaimRejected { task_id: String, status: StatusCode },

    /// The engine answered with a status the run cannot continue from.
    #[error("Unexpected status {status} while trying to {operation}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<envy::Error> for DatagenError {
    fn from(e: envy::Error) -> Self {
        DatagenError::Configuration(e.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DatagenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatagenError::ClaimRejected {
            task_id: "task-1".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            err.to_string(),
            "Could not claim user task task-1: engine answered 500 Internal Server Error"
        );

        let err = DatagenError::UnexpectedStatus {
            operation: "list tasks",
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 Not Found while trying to list tasks"
        );
    }

    #[test]
    fn test_error_from_envy() {
        #[derive(Debug, serde::Deserialize)]
        struct PortOnly {
            #[allow(dead_code)]
            port: u16,
        }

        let env_err = envy::from_iter::<_, PortOnly>(vec![(
            "PORT".to_string(),
            "not-a-number".to_string(),
        )])
        .unwrap_err();
        let err: DatagenError = env_err.into();
        assert!(matches!(err, DatagenError::Configuration(_)));
    }
}
