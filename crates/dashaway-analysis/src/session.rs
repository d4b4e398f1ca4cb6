//! The analysis session: one text buffer, at most one request in flight.
//!
//! Starting a new analysis cancels the previous request's token, which
//! drops its network future, and bumps a generation counter so that a
//! response racing the cancellation is still discarded at commit time.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashaway_core::models::analysis::ProcessResponse;
use dashaway_core::models::segment::Segment;
use dashaway_core::models::session::SessionStatus;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::AnalysisBackend;
use crate::credentials::CredentialProvider;
use crate::error::AnalysisError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeouts are reported in whole seconds, so shorter ones are raised to this.
pub const MIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Observable state of the current analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisState {
    /// The text the current request was issued for.
    pub source_text: String,
    pub segments: Vec<Segment>,
    pub readability_score: Option<f64>,
    pub status: SessionStatus,
    /// User-facing error, unset for quota rejections and cancellations.
    pub error: Option<String>,
    pub upgrade_required: bool,
}

impl AnalysisState {
    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::InFlight
    }
}

pub struct AnalysisSession<B, C> {
    backend: Arc<B>,
    credentials: C,
    timeout: Duration,
    text: String,
    state: Arc<watch::Sender<AnalysisState>>,
    generation: Arc<AtomicU64>,
    in_flight: Option<CancellationToken>,
}

impl<B, C> AnalysisSession<B, C>
where
    B: AnalysisBackend,
    C: CredentialProvider,
{
    pub fn new(backend: B, credentials: C) -> Self {
        let (state, _) = watch::channel(AnalysisState::default());
        Self {
            backend: Arc::new(backend),
            credentials,
            timeout: DEFAULT_TIMEOUT,
            text: String::new(),
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(MIN_TIMEOUT);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Update the text buffer. Clearing it cancels any request in flight
    /// and resets the session.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.is_empty() {
            self.abort_in_flight();
            self.state.send_replace(AnalysisState::default());
        }
    }

    /// A copy of the current state.
    pub fn state(&self) -> AnalysisState {
        self.state.borrow().clone()
    }

    /// Watch the state as it changes.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.state.subscribe()
    }

    pub fn dismiss_upgrade_prompt(&self) {
        self.state.send_if_modified(|state| {
            std::mem::replace(&mut state.upgrade_required, false)
        });
    }

    /// Analyse `text`, superseding any request still in flight.
    ///
    /// Previous results are cleared immediately. The returned handle
    /// resolves once this request's outcome has been committed (or
    /// discarded because a newer request replaced it). Must be called from
    /// within a tokio runtime.
    pub fn analyze(&mut self, text: impl Into<String>) -> JoinHandle<()> {
        let text = text.into();
        self.text.clone_from(&text);
        let generation = self.abort_in_flight();

        self.state.send_replace(AnalysisState {
            source_text: text.clone(),
            status: SessionStatus::InFlight,
            ..AnalysisState::default()
        });

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let backend = Arc::clone(&self.backend);
        let bearer = self.credentials.bearer_token();
        let timeout = self.timeout;
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);

        info!(
            generation,
            chars = text.chars().count(),
            authenticated = bearer.is_some(),
            "starting analysis"
        );

        tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = token.cancelled() => Err(AnalysisError::Superseded),
                result = tokio::time::timeout(timeout, backend.process(&text, bearer.as_deref())) => {
                    result.unwrap_or(Err(AnalysisError::Timeout { secs: timeout.as_secs() }))
                }
            };
            commit(&state, &current, generation, outcome);
        })
    }

    /// Abort the request in flight, if any, and return to idle.
    pub fn cancel(&mut self) {
        if self.in_flight.is_none() {
            return;
        }
        self.abort_in_flight();
        self.state.send_if_modified(|state| {
            if state.status != SessionStatus::InFlight {
                return false;
            }
            state.status = SessionStatus::Idle;
            true
        });
    }

    /// Cancel the outstanding token and move to a new generation, which
    /// invalidates any commit still on its way. Returns the new generation.
    fn abort_in_flight(&mut self) -> u64 {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_cancelled() {
                debug!("cancelling superseded analysis request");
            }
            previous.cancel();
        }
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl<B, C> Drop for AnalysisSession<B, C> {
    fn drop(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

fn commit(
    state: &watch::Sender<AnalysisState>,
    current: &AtomicU64,
    generation: u64,
    outcome: Result<ProcessResponse, AnalysisError>,
) {
    if let Err(AnalysisError::Superseded) = outcome {
        debug!(generation, "analysis superseded, nothing to commit");
        return;
    }

    let committed = state.send_if_modified(|state| {
        if current.load(Ordering::SeqCst) != generation {
            return false;
        }
        match outcome {
            Ok(response) => {
                info!(generation, segments = response.segments.len(), "analysis succeeded");
                state.segments = response.segments;
                state.readability_score = response.readability_score;
                state.status = SessionStatus::Succeeded;
            }
            Err(AnalysisError::QuotaExceeded { detail }) => {
                info!(generation, %detail, "analysis rejected: usage quota exceeded");
                state.upgrade_required = true;
                state.status = SessionStatus::Failed;
            }
            Err(e) => {
                warn!(generation, error = %e, "analysis failed");
                state.error = e.user_message();
                state.status = SessionStatus::Failed;
            }
        }
        true
    });

    if !committed {
        debug!(generation, "stale analysis outcome discarded");
    }
}
