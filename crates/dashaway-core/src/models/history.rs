use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::segment::Segment;

/// An immutable copy of the segment list taken after an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistorySnapshot {
    pub segments: Vec<Segment>,
    /// Human-readable label, e.g. `Replaced "—" with ","`.
    pub action: String,
    pub timestamp: jiff::Timestamp,
}

impl HistorySnapshot {
    pub fn capture(segments: &[Segment], action: impl Into<String>) -> Self {
        Self {
            segments: segments.to_vec(),
            action: action.into(),
            timestamp: jiff::Timestamp::now(),
        }
    }
}
