use thiserror::Error;

/// Fallback shown when the backend fails without a usable `detail`.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// A newer analysis started; never surfaced to the user.
    #[error("analysis superseded by a newer request")]
    Superseded,

    #[error("Request timed out after {secs} seconds. Please try with shorter text.")]
    Timeout { secs: u64 },

    /// Usage allowance exhausted; surfaced as an upgrade prompt.
    #[error("usage quota exceeded: {detail}")]
    QuotaExceeded { detail: String },

    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("invalid response from analysis API: {0}")]
    InvalidResponse(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl AnalysisError {
    /// Message for the session's error field. `None` for outcomes that
    /// are not shown as an error banner.
    pub fn user_message(&self) -> Option<String> {
        match self {
            AnalysisError::Superseded | AnalysisError::QuotaExceeded { .. } => None,
            other => Some(other.to_string()),
        }
    }
}

impl From<dashaway_core::error::CoreError> for AnalysisError {
    fn from(e: dashaway_core::error::CoreError) -> Self {
        AnalysisError::InvalidResponse(e.to_string())
    }
}
