//! Terminal formatting of render units and statistics.

use std::fmt::Write;

use dashaway_editor::render::RenderUnit;
use dashaway_editor::stats::Stats;

/// Inline view of the text: plain units verbatim, highlights as
/// `[[content|kind]]`.
pub fn format_units(units: &[RenderUnit]) -> String {
    let mut out = String::new();
    for unit in units {
        match unit {
            RenderUnit::Text { content } => out.push_str(content),
            RenderUnit::Highlight { content, kind, .. } => {
                let _ = write!(out, "[[{content}|{kind}]]");
            }
        }
    }
    out
}

pub fn format_stats(stats: &Stats) -> String {
    let mut out = String::new();
    for (kind, count) in &stats.counts {
        let _ = writeln!(out, "{kind:>14}: {count}");
    }
    let _ = writeln!(out, "{:>14}: {}", "issues", stats.total_issues);
    let _ = writeln!(out, "{:>14}: {}", "words", stats.word_count);
    match stats.readability_score {
        Some(score) => {
            let _ = writeln!(out, "{:>14}: grade {score:.1}", "readability");
        }
        None => {
            let _ = writeln!(out, "{:>14}: n/a", "readability");
        }
    }
    out
}
