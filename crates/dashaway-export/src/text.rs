use dashaway_core::models::segment::{self, Segment};

/// The cleaned text exactly as the segments spell it.
pub fn to_plain_text(segments: &[Segment]) -> String {
    segment::full_text(segments)
}
