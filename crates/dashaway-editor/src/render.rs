//! Render units for the highlighted text view.

use std::collections::BTreeSet;

use dashaway_core::models::segment::{Segment, SegmentKind};
use serde::Serialize;

use crate::spacing::EM_DASH;

/// Highlight colour for an issue kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightColor {
    Primary,
    Secondary,
    Accent,
    Pink,
    Orange,
    Red,
    Neutral,
}

impl HighlightColor {
    pub fn for_kind(kind: &SegmentKind) -> Self {
        match kind {
            SegmentKind::EmDash => HighlightColor::Primary,
            SegmentKind::Cliche => HighlightColor::Secondary,
            SegmentKind::Jargon => HighlightColor::Accent,
            SegmentKind::AiTell => HighlightColor::Pink,
            SegmentKind::ComplexWord => HighlightColor::Orange,
            SegmentKind::LongSentence => HighlightColor::Red,
            SegmentKind::Plain | SegmentKind::Other(_) => HighlightColor::Neutral,
        }
    }
}

/// The suggestion popover attached to an open highlight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popover {
    pub suggestions: Vec<String>,
    /// False for display-only kinds: the list is shown but cannot be applied.
    pub can_replace: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum RenderUnit {
    Text {
        content: String,
    },
    Highlight {
        index: usize,
        content: String,
        kind: SegmentKind,
        color: HighlightColor,
        popover: Option<Popover>,
    },
}

impl RenderUnit {
    pub fn content(&self) -> &str {
        match self {
            RenderUnit::Text { content } | RenderUnit::Highlight { content, .. } => content,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, RenderUnit::Highlight { .. })
    }
}

/// Suggestions shown in a segment's popover. Em-dash popovers always lead
/// with the em-dash itself so the user can keep the original character.
pub fn popover_suggestions(segment: &Segment) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(segment.suggestions.len() + 1);
    if segment.kind == SegmentKind::EmDash {
        suggestions.push(EM_DASH.to_string());
    }
    for suggestion in &segment.suggestions {
        if !suggestions.contains(suggestion) {
            suggestions.push(suggestion.clone());
        }
    }
    suggestions
}

/// Whether a segment would render as a clickable highlight.
pub fn is_interactive(segment: &Segment, hidden: &BTreeSet<SegmentKind>) -> bool {
    !segment.kind.is_plain() && !hidden.contains(&segment.kind)
}

pub fn render(
    segments: &[Segment],
    hidden: &BTreeSet<SegmentKind>,
    open_popover: Option<usize>,
) -> Vec<RenderUnit> {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            if !is_interactive(segment, hidden) {
                return RenderUnit::Text {
                    content: segment.content.clone(),
                };
            }
            let popover = (open_popover == Some(index)).then(|| Popover {
                suggestions: popover_suggestions(segment),
                can_replace: segment.kind.is_replaceable(),
            });
            RenderUnit::Highlight {
                index,
                content: segment.content.clone(),
                kind: segment.kind.clone(),
                color: HighlightColor::for_kind(&segment.kind),
                popover,
            }
        })
        .collect()
}
