use thiserror::Error;

/// Failures of a single submission attempt.
///
/// The store never shows these to shells directly; their `Display` text
/// becomes the message of a failed submission.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from server (HTTP {status})")]
    InvalidResponse { status: u16 },

    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("Encoding error: {0}")]
    Encode(String),
}

impl ApiError {
    /// Get error kind string for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl(_) => "invalid_url",
            ApiError::Network(_) => "network",
            ApiError::InvalidResponse { .. } => "invalid_response",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Decode(_) => "decode",
            ApiError::Encode(_) => "encode",
        }
    }
}
