use std::collections::BTreeSet;

use dashaway_core::models::category::Category;
use dashaway_core::models::history::HistorySnapshot;
use dashaway_core::models::segment::{self, Segment, SegmentKind};
use tracing::debug;

use crate::error::EditError;
use crate::history::History;
use crate::render::{self, RenderUnit};
use crate::spacing;

const LOADED_ACTION: &str = "Analyzed text";

/// UI events that dismiss an open suggestion popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverEvent {
    OutsideClick,
    Escape,
}

/// Owns the live segment list while the user edits it.
///
/// Every successful mutation pushes a [`HistorySnapshot`]; failed calls
/// leave the segments untouched.
#[derive(Debug, Clone, Default)]
pub struct SegmentEditor {
    segments: Vec<Segment>,
    readability_score: Option<f64>,
    hidden: BTreeSet<SegmentKind>,
    open_popover: Option<usize>,
    history: History,
}

impl SegmentEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history: History::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let mut editor = Self::new();
        editor.load(segments, None);
        editor
    }

    /// Take over a freshly analysed segment list. Resets the history to a
    /// single base snapshot so undoing every edit lands back here.
    pub fn load(&mut self, segments: Vec<Segment>, readability_score: Option<f64>) {
        self.segments = segments;
        self.readability_score = readability_score;
        self.open_popover = None;
        self.history.clear();
        self.history
            .push(HistorySnapshot::capture(&self.segments, LOADED_ACTION));
        debug!(segments = self.segments.len(), "editor loaded segments");
    }

    /// Drop the segments and history, e.g. when the text buffer is cleared.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.readability_score = None;
        self.open_popover = None;
        self.history.clear();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn text(&self) -> String {
        segment::full_text(&self.segments)
    }

    pub fn readability_score(&self) -> Option<f64> {
        self.readability_score
    }

    pub fn render(&self) -> Vec<RenderUnit> {
        render::render(&self.segments, &self.hidden, self.open_popover)
    }

    pub fn stats(&self) -> crate::stats::Stats {
        crate::stats::Stats::collect(&self.segments, self.readability_score)
    }

    // ── Popover ──────────────────────────────────────────────────────────

    /// Open the suggestion popover on a highlighted segment, closing any
    /// other one.
    pub fn open_popover(&mut self, index: usize) -> Result<(), EditError> {
        let segment = self.segment(index)?;
        if !render::is_interactive(segment, &self.hidden) {
            return Err(EditError::NotInteractive { index });
        }
        self.open_popover = Some(index);
        Ok(())
    }

    pub fn close_popover(&mut self) {
        self.open_popover = None;
    }

    pub fn open_popover_index(&self) -> Option<usize> {
        self.open_popover
    }

    pub fn handle_popover_event(&mut self, event: PopoverEvent) {
        match event {
            PopoverEvent::OutsideClick | PopoverEvent::Escape => self.close_popover(),
        }
    }

    // ── Editing ──────────────────────────────────────────────────────────

    /// Substitute one segment's content with a suggestion.
    ///
    /// An em-dash with neighbours on both sides keeps its kind and has the
    /// surrounding whitespace renormalised for the new punctuation. Every
    /// other segment becomes plain text.
    pub fn replace_segment(&mut self, index: usize, suggestion: &str) -> Result<(), EditError> {
        let segment = self.segment(index)?;
        if !segment.kind.is_replaceable() {
            return Err(EditError::NotReplaceable {
                index,
                kind: segment.kind.to_string(),
            });
        }
        let previous = segment.content.clone();
        let interior = index > 0 && index + 1 < self.segments.len();

        if segment.kind == SegmentKind::EmDash && interior {
            let (head, tail) = self.segments.split_at_mut(index);
            let (current, rest) = tail.split_at_mut(1);
            let prev = &mut head[index - 1];
            let next = &mut rest[0];
            current[0].content = suggestion.to_string();
            spacing::renormalize(prev, next, suggestion);
        } else {
            self.segments[index].settle(suggestion);
        }

        self.open_popover = None;
        self.history.push(HistorySnapshot::capture(
            &self.segments,
            format!("Replaced \"{previous}\" with \"{suggestion}\""),
        ));
        debug!(index, suggestion, "segment replaced");
        Ok(())
    }

    /// Replace every segment of the selected kind with `replacement`.
    ///
    /// No whitespace renormalisation: the replacement is applied verbatim.
    /// Returns how many segments changed.
    pub fn replace_all(
        &mut self,
        selection: Option<&Category>,
        replacement: &str,
    ) -> Result<usize, EditError> {
        let kind = selection
            .and_then(Category::editable_kind)
            .ok_or(EditError::NoTypeSelected)?
            .clone();

        let mut replaced = 0;
        for segment in self.segments.iter_mut().filter(|s| s.kind == kind) {
            segment.settle(replacement);
            replaced += 1;
        }

        self.open_popover = None;
        if replaced > 0 {
            self.history.push(HistorySnapshot::capture(
                &self.segments,
                format!("Replaced all {kind} with \"{replacement}\""),
            ));
        }
        debug!(%kind, replaced, "replace all applied");
        Ok(replaced)
    }

    // ── Visibility ───────────────────────────────────────────────────────

    /// Show or hide highlights of a kind. Returns true if the kind is now
    /// hidden.
    pub fn toggle_visibility(&mut self, kind: SegmentKind) -> bool {
        let hidden = if self.hidden.remove(&kind) {
            false
        } else {
            self.hidden.insert(kind.clone());
            true
        };
        if hidden
            && self
                .open_popover
                .is_some_and(|i| self.segments.get(i).is_some_and(|s| s.kind == kind))
        {
            self.open_popover = None;
        }
        hidden
    }

    pub fn is_hidden(&self, kind: &SegmentKind) -> bool {
        self.hidden.contains(kind)
    }

    // ── History ──────────────────────────────────────────────────────────

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(segments) => {
                self.restore(segments);
                true
            }
            None => false,
        }
    }

    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(segments) => {
                self.restore(segments);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn restore(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.open_popover = None;
    }

    fn segment(&self, index: usize) -> Result<&Segment, EditError> {
        self.segments.get(index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.segments.len(),
        })
    }
}
