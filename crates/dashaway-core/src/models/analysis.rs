use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::segment::Segment;

/// Body of `POST /api/process`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub text: String,
}

/// Successful response of `POST /api/process`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessResponse {
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub readability_score: Option<f64>,
}

impl ProcessResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Error body returned by the analysis API on a non-2xx status.
///
/// Older backends only send `detail`; `code` is the structured form
/// (`"quota_exceeded"`, `"internal_error"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, treating anything that is not the expected JSON
    /// shape as an empty body.
    pub fn from_slice_lossy(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}
