//! Error types for the beyag library.

use thiserror::Error;

/// Result type alias for beyag operations.
pub type Result<T> = std::result::Result<T, BeyagError>;

#[derive(Error, Debug)]
pub enum BeyagError {
    #[error("Missing required credential `{0}`. Both a shop id and a secret key are needed to build a client.")]
    MissingCredential(&'static str),

    #[error("Request parameters are missing required field `{0}`.")]
    MissingField(&'static str),

    #[error("HTTP method '{0}' is not supported. Use GET or POST.")]
    UnsupportedHttpMethod(String),

    #[error("{0}")]
    Http(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network request failed: {0}")]
    Curl(#[from] curl::Error),

    #[error("Gateway returned invalid text encoding. The response may be corrupted.")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl BeyagError {
    /// Create a generic transport error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}
