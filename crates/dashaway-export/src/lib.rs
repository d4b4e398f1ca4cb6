//! dashaway-export
//!
//! Plain-text and DOCX export of the cleaned text.

pub mod docx;
pub mod error;
pub mod styles;
pub mod text;

use std::path::Path;

use dashaway_core::models::segment::Segment;
use tracing::info;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    PlainText,
    Docx,
}

impl ExportFormat {
    /// Pick a format from a file extension (`.txt`, `.docx`).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("txt") | Some("text") => Ok(ExportFormat::PlainText),
            Some("docx") => Ok(ExportFormat::Docx),
            _ => Err(ExportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub fn export_bytes(
    format: ExportFormat,
    segments: &[Segment],
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::PlainText => Ok(text::to_plain_text(segments).into_bytes()),
        ExportFormat::Docx => docx::generate_docx(segments, styles),
    }
}

/// Write the cleaned text to `path`, choosing the format by extension.
pub fn write_export(
    path: &Path,
    segments: &[Segment],
    styles: &DocumentStyles,
) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path)?;
    let bytes = export_bytes(format, segments, styles)?;
    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), ?format, bytes = bytes.len(), "exported cleaned text");
    Ok(format)
}
