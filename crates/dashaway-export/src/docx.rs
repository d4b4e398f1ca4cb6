use std::io::Cursor;

use dashaway_core::models::segment::Segment;
use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;
use crate::text::to_plain_text;

const TITLE_STYLE: &str = "Title";

/// Generate a DOCX document from the cleaned text.
///
/// Each line of the text becomes one paragraph; blank lines become empty
/// paragraphs so the spacing of the original survives.
pub fn generate_docx(segments: &[Segment], styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new().add_style(title_style(styles));

    if let Some(title) = &styles.title {
        docx = docx.add_paragraph(
            Paragraph::new().style(TITLE_STYLE).add_run(
                Run::new()
                    .add_text(title)
                    .fonts(RunFonts::new().ascii(&styles.heading_font)),
            ),
        );
    }

    let text = to_plain_text(segments);
    for line in text.lines() {
        if line.trim().is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }
        docx = docx.add_paragraph(body_paragraph(line, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn title_style(styles: &DocumentStyles) -> Style {
    Style::new(TITLE_STYLE, StyleType::Paragraph)
        .name("title")
        .size(styles.heading_size * 2) // OOXML uses half-points
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Left).add_run(
        Run::new()
            .add_text(text)
            .size(styles.body_size * 2)
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}
