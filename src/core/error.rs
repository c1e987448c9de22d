//! Error types for the logger hierarchy

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Parameter index past the end of a logging event's parameter list
    #[error("Parameter index {index} out of range: event has {count} parameters")]
    OutOfRange { index: usize, count: usize },

    /// Dotted logger name that cannot be resolved to a tree node
    #[error("Invalid logger name '{name}': {reason}")]
    InvalidLoggerName { name: String, reason: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an out-of-range parameter access error
    pub fn out_of_range(index: usize, count: usize) -> Self {
        LoggerError::OutOfRange { index, count }
    }

    /// Create an invalid logger name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::InvalidLoggerName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
