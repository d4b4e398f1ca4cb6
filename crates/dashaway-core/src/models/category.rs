use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::segment::SegmentKind;

/// A category control the user can select before a bulk replacement.
///
/// `Readability` is a display-only pseudo-category: it shows the grade
/// level and has no segments behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Issue(SegmentKind),
    Readability,
}

impl Category {
    /// The segment kind this category edits, if it edits any. Plain text
    /// and display-only kinds are never edited.
    pub fn editable_kind(&self) -> Option<&SegmentKind> {
        match self {
            Category::Issue(kind) if !kind.is_plain() && kind.is_replaceable() => Some(kind),
            _ => None,
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(CoreError::UnknownCategory(s.to_string()));
        }
        if name == "readability" {
            return Ok(Category::Readability);
        }
        Ok(Category::Issue(SegmentKind::from(name)))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Issue(kind) => write!(f, "{kind}"),
            Category::Readability => f.write_str("readability"),
        }
    }
}
