//! Whitespace rules applied around an interior em-dash when it is
//! swapped for a different punctuation mark.

use dashaway_core::models::segment::Segment;

pub const EM_DASH: &str = "\u{2014}";

/// Single spaces to place around a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub before: bool,
    pub after: bool,
}

impl Spacing {
    const fn new(before: bool, after: bool) -> Self {
        Self { before, after }
    }
}

/// Spacing for a punctuation replacement.
///
/// Closing punctuation hugs the preceding word, opening brackets hug the
/// following word, a hyphen joins both sides and an em-dash stands apart.
/// Anything else gets a single trailing space.
pub fn spacing_for(replacement: &str) -> Spacing {
    match replacement {
        "," | "." | ";" | ":" | ")" | "]" | "}" => Spacing::new(false, true),
        "(" | "[" | "{" => Spacing::new(true, false),
        EM_DASH => Spacing::new(true, true),
        "-" => Spacing::new(false, false),
        _ => Spacing::new(false, true),
    }
}

/// Trim the whitespace touching the replaced segment on both sides and
/// re-insert exactly the spaces `spacing_for(replacement)` asks for.
pub fn renormalize(prev: &mut Segment, next: &mut Segment, replacement: &str) {
    let spacing = spacing_for(replacement);

    let trimmed_len = prev.content.trim_end().len();
    prev.content.truncate(trimmed_len);
    if spacing.before {
        prev.content.push(' ');
    }

    let lead = next.content.len() - next.content.trim_start().len();
    next.content.drain(..lead);
    if spacing.after {
        next.content.insert(0, ' ');
    }
}
