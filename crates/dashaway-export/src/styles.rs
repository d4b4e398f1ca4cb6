use serde::{Deserialize, Serialize};

/// Document styling for DOCX exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Calibri").
    pub body_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Font for the optional title.
    pub heading_font: String,

    /// Title font size in points.
    pub heading_size: usize,

    /// Title placed above the text. `None` exports the text alone.
    pub title: Option<String>,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            body_size: 11,
            heading_font: "Calibri".to_string(),
            heading_size: 16,
            title: None,
        }
    }
}
