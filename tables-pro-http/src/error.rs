//! Error types

/// Errors from a single fragment request.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Non-success status from the server.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request URL could not be resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }
}
