use std::future::Future;

use dashaway_core::models::analysis::{ProcessRequest, ProcessResponse};
use reqwest::Client;
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::quota::classify_failure;

const PROCESS_PATH: &str = "/api/process";

/// Anything that can classify text into segments.
///
/// [`HttpBackend`] talks to the real API; tests substitute scripted
/// backends. Dropping the returned future must abort the work.
pub trait AnalysisBackend: Send + Sync + 'static {
    fn process(
        &self,
        text: &str,
        bearer_token: Option<&str>,
    ) -> impl Future<Output = Result<ProcessResponse, AnalysisError>> + Send;
}

/// `POST {api_base}/api/process` over reqwest.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    api_base: String,
}

impl HttpBackend {
    pub fn new(api_base: impl Into<String>) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AnalysisError::Client(e.to_string()))?;
        Ok(Self::with_client(client, api_base))
    }

    pub fn with_client(client: Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { client, api_base }
    }

    pub fn process_url(&self) -> String {
        format!("{}{PROCESS_PATH}", self.api_base)
    }
}

impl AnalysisBackend for HttpBackend {
    async fn process(
        &self,
        text: &str,
        bearer_token: Option<&str>,
    ) -> Result<ProcessResponse, AnalysisError> {
        let url = self.process_url();
        let mut request = self.client.post(&url).json(&ProcessRequest {
            text: text.to_string(),
        });
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        debug!(%url, chars = text.chars().count(), authenticated = bearer_token.is_some(), "sending analysis request");

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &body));
        }

        let parsed = ProcessResponse::from_slice(&body)?;
        info!(
            segments = parsed.segments.len(),
            readability = ?parsed.readability_score,
            "analysis response received"
        );
        Ok(parsed)
    }
}
