//! dashaway-analysis
//!
//! Remote text analysis: the HTTP client for `POST /api/process` and the
//! single-flight session that owns the request lifecycle.

pub mod client;
pub mod credentials;
pub mod error;
pub mod quota;
pub mod session;

pub use client::{AnalysisBackend, HttpBackend};
pub use credentials::{Anonymous, CredentialProvider, StaticToken};
pub use error::AnalysisError;
pub use session::{AnalysisSession, AnalysisState, DEFAULT_TIMEOUT, MIN_TIMEOUT};
