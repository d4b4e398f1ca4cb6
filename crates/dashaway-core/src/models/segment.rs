use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Classification of a span of cleaned text.
///
/// The backend spells the plain kind `"text"`; `"plain"` is accepted as an
/// alias when parsing. Kinds this build does not know about are kept
/// verbatim in [`SegmentKind::Other`] so they still render and count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SegmentKind {
    Plain,
    EmDash,
    Cliche,
    Jargon,
    AiTell,
    ComplexWord,
    /// Display-only: flagged for the reader, never replaced in place.
    LongSentence,
    Other(String),
}

impl SegmentKind {
    /// Issue kinds the UI offers a category control for.
    pub fn known_issues() -> [SegmentKind; 6] {
        [
            SegmentKind::EmDash,
            SegmentKind::Cliche,
            SegmentKind::Jargon,
            SegmentKind::AiTell,
            SegmentKind::ComplexWord,
            SegmentKind::LongSentence,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            SegmentKind::Plain => "text",
            SegmentKind::EmDash => "em_dash",
            SegmentKind::Cliche => "cliche",
            SegmentKind::Jargon => "jargon",
            SegmentKind::AiTell => "ai_tell",
            SegmentKind::ComplexWord => "complex_word",
            SegmentKind::LongSentence => "long_sentence",
            SegmentKind::Other(name) => name,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, SegmentKind::Plain)
    }

    /// Whether a segment of this kind may have its content substituted.
    pub fn is_replaceable(&self) -> bool {
        !matches!(self, SegmentKind::LongSentence)
    }
}

impl From<&str> for SegmentKind {
    fn from(value: &str) -> Self {
        match value {
            "text" | "plain" => SegmentKind::Plain,
            "em_dash" => SegmentKind::EmDash,
            "cliche" => SegmentKind::Cliche,
            "jargon" => SegmentKind::Jargon,
            "ai_tell" => SegmentKind::AiTell,
            "complex_word" => SegmentKind::ComplexWord,
            "long_sentence" => SegmentKind::LongSentence,
            other => SegmentKind::Other(other.to_string()),
        }
    }
}

impl From<String> for SegmentKind {
    fn from(value: String) -> Self {
        SegmentKind::from(value.as_str())
    }
}

impl From<SegmentKind> for String {
    fn from(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An ordered element of the cleaned-text representation.
///
/// Concatenating `content` across a segment list in order reconstructs the
/// full cleaned text exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Segment {
    #[serde(rename = "type")]
    #[ts(type = "string")]
    pub kind: SegmentKind,
    pub content: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Segment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Plain,
            content: content.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn issue(
        kind: SegmentKind,
        content: impl Into<String>,
        suggestions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            kind,
            content: content.into(),
            suggestions: suggestions.into_iter().map(Into::into).collect(),
        }
    }

    /// Turn this segment into inert text with the given content.
    pub fn settle(&mut self, content: impl Into<String>) {
        self.kind = SegmentKind::Plain;
        self.content = content.into();
        self.suggestions.clear();
    }
}

/// Reassemble the full cleaned text from a segment list.
pub fn full_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.content.as_str()).collect()
}
