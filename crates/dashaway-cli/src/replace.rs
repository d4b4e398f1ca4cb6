use dashaway_core::models::category::Category;
use dashaway_core::models::segment::SegmentKind;

/// Parse an issue kind named on the command line, e.g. for `--hide`.
pub fn parse_kind(name: &str) -> eyre::Result<SegmentKind> {
    let kind = SegmentKind::from(name.trim());
    if SegmentKind::known_issues().contains(&kind) {
        return Ok(kind);
    }
    let known = SegmentKind::known_issues().map(|k| k.to_string()).join(", ");
    Err(eyre::eyre!("unknown issue kind {name:?} (expected one of: {known})"))
}

/// Parse a `--replace-all KIND=TEXT` argument.
///
/// Everything after the first `=` is the replacement, verbatim, so the
/// replacement itself may contain `=` or surrounding spaces.
pub fn parse_replace_all(arg: &str) -> eyre::Result<(Category, String)> {
    let (kind, text) = arg
        .split_once('=')
        .ok_or_else(|| eyre::eyre!("expected KIND=TEXT, got {arg:?}"))?;
    let category: Category = kind.parse()?;
    if let Category::Issue(kind) = &category {
        parse_kind(kind.as_str())?;
    }
    Ok((category, text.to_string()))
}
