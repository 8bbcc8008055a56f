use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Recommendation API error: {0}")]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Recommendation API errors
///
/// The `Display` text of each variant is what the front end shows inline
/// next to the flow that failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx from the standard endpoint without a usable `detail`.
    #[error("API error: {status}")]
    Status { status: u16 },

    /// Non-2xx from the standard endpoint carrying a JSON `detail` field.
    #[error("API error: {status} - {detail}")]
    StatusDetail { status: u16, detail: String },

    /// Non-2xx from the agentic endpoint; the body is kept verbatim.
    #[error("Agent API error: {status} - {body}")]
    Agent { status: u16, body: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status }
            | ApiError::StatusDetail { status, .. }
            | ApiError::Agent { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for recommendation API calls
pub type ApiResult<T> = Result<T, ApiError>;
