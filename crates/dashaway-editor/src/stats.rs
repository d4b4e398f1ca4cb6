use std::collections::BTreeMap;

use dashaway_core::models::segment::{Segment, SegmentKind};
use serde::Serialize;

/// Issue counts for the category controls.
///
/// Hidden kinds are counted too: visibility only affects highlighting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub counts: BTreeMap<SegmentKind, usize>,
    pub total_issues: usize,
    pub word_count: usize,
    pub readability_score: Option<f64>,
}

impl Stats {
    pub fn collect(segments: &[Segment], readability_score: Option<f64>) -> Self {
        let mut counts = BTreeMap::new();
        for segment in segments.iter().filter(|s| !s.kind.is_plain()) {
            *counts.entry(segment.kind.clone()).or_insert(0) += 1;
        }
        let total_issues = counts.values().sum();
        let word_count = dashaway_core::models::segment::full_text(segments)
            .split_whitespace()
            .count();
        Self {
            counts,
            total_issues,
            word_count,
            readability_score,
        }
    }

    pub fn count(&self, kind: &SegmentKind) -> usize {
        self.counts.get(kind).copied().unwrap_or(0)
    }
}
