//! dashaway-editor
//!
//! The segment editor: turns an analysed segment list into render units,
//! splices accepted suggestions back into the text, applies bulk
//! replacements and keeps an undo/redo history. Pure, synchronous logic.

pub mod editor;
pub mod error;
pub mod history;
pub mod render;
pub mod spacing;
pub mod stats;

pub use editor::SegmentEditor;
pub use error::EditError;
