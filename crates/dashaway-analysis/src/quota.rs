//! Classification of failed analysis responses.
//!
//! The structured `code` field is preferred. Older backends only send a
//! free-text `detail`, so a 403 whose detail mentions one of the known
//! usage-limit phrases is also treated as quota exhaustion.

use dashaway_core::models::analysis::ErrorBody;

use crate::error::{AnalysisError, UNKNOWN_ERROR};

pub const QUOTA_CODE: &str = "quota_exceeded";

/// Phrases the backend uses in `detail` when a usage allowance runs out.
pub const QUOTA_PHRASES: &[&str] = &["free try", "monthly uses"];

const FORBIDDEN: u16 = 403;

pub fn is_quota_rejection(status: u16, body: &ErrorBody) -> bool {
    if body.code.as_deref() == Some(QUOTA_CODE) {
        return true;
    }
    if status != FORBIDDEN {
        return false;
    }
    body.detail.as_deref().is_some_and(|detail| {
        let detail = detail.to_lowercase();
        QUOTA_PHRASES.iter().any(|phrase| detail.contains(phrase))
    })
}

/// Turn a non-2xx status and its raw body into an [`AnalysisError`].
pub fn classify_failure(status: u16, body: &[u8]) -> AnalysisError {
    let body = ErrorBody::from_slice_lossy(body);
    let detail = body
        .detail
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    if is_quota_rejection(status, &body) {
        AnalysisError::QuotaExceeded { detail }
    } else {
        AnalysisError::RequestFailed {
            status,
            message: detail,
        }
    }
}
