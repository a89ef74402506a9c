use thiserror::Error;
use tracing::error;

/// Error types shared by the dashboard core and the browser client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request never produced a response (network down, CORS, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status
    #[error("HTTP error {status}: {detail}")]
    Http { status: u16, detail: String },

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A request body or query string could not be encoded
    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    /// User input rejected before anything was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A date or date-time string in none of the accepted formats
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl DashboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Text for the inline form message: the bare reason for rejected input
    /// and API `detail` bodies, the full description otherwise
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Http { detail, .. } if !detail.is_empty() => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for DashboardError {
    fn from(error: serde_urlencoded::ser::Error) -> Self {
        let err = DashboardError::Serialize(error.to_string());
        error!(?err, "Query string encoding failed");
        err
    }
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
