use dashaway_core::models::segment::{Segment, SegmentKind};
use dashaway_editor::SegmentEditor;
use dashaway_editor::editor::PopoverEvent;
use dashaway_editor::render::{HighlightColor, RenderUnit, popover_suggestions};

const EM_DASH: &str = "\u{2014}";

fn sample() -> SegmentEditor {
    SegmentEditor::from_segments(vec![
        Segment::plain("It was "),
        Segment::issue(SegmentKind::Cliche, "a perfect storm", ["a crisis"]),
        Segment::plain(" "),
        Segment::issue(SegmentKind::EmDash, EM_DASH, [",", ";"]),
        Segment::plain(" truly."),
    ])
}

#[test]
fn plain_segments_render_as_text() {
    let units = sample().render();
    assert_eq!(units.len(), 5);
    assert!(!units[0].is_interactive());
    assert_eq!(units[0].content(), "It was ");
    assert!(units[1].is_interactive());
}

#[test]
fn highlights_carry_kind_colour() {
    let units = sample().render();
    match &units[1] {
        RenderUnit::Highlight {
            index,
            kind,
            color,
            popover,
            ..
        } => {
            assert_eq!(*index, 1);
            assert_eq!(*kind, SegmentKind::Cliche);
            assert_eq!(*color, HighlightColor::Secondary);
            assert!(popover.is_none());
        }
        other => panic!("expected highlight, got {other:?}"),
    }
}

#[test]
fn em_dash_popover_leads_with_em_dash() {
    let mut editor = sample();
    editor.open_popover(3).unwrap();

    let units = editor.render();
    let RenderUnit::Highlight {
        popover: Some(popover),
        ..
    } = &units[3]
    else {
        panic!("expected open popover on em-dash");
    };
    assert_eq!(popover.suggestions, [EM_DASH, ",", ";"]);
    assert!(popover.can_replace);
}

#[test]
fn em_dash_is_not_duplicated_when_already_suggested() {
    let segment = Segment::issue(SegmentKind::EmDash, EM_DASH, [EM_DASH, ","]);
    assert_eq!(popover_suggestions(&segment), [EM_DASH, ","]);
}

#[test]
fn only_one_popover_open_at_a_time() {
    let mut editor = sample();
    editor.open_popover(1).unwrap();
    editor.open_popover(3).unwrap();

    let open: Vec<_> = editor
        .render()
        .into_iter()
        .filter(|u| matches!(u, RenderUnit::Highlight { popover: Some(_), .. }))
        .collect();
    assert_eq!(open.len(), 1);
    assert_eq!(editor.open_popover_index(), Some(3));
}

#[test]
fn escape_and_outside_click_close_popover() {
    let mut editor = sample();
    editor.open_popover(1).unwrap();
    editor.handle_popover_event(PopoverEvent::Escape);
    assert_eq!(editor.open_popover_index(), None);

    editor.open_popover(1).unwrap();
    editor.handle_popover_event(PopoverEvent::OutsideClick);
    assert_eq!(editor.open_popover_index(), None);
}

#[test]
fn popover_cannot_open_on_plain_text() {
    let mut editor = sample();
    assert!(editor.open_popover(0).is_err());
    assert!(editor.open_popover(42).is_err());
}

#[test]
fn hidden_kinds_render_inert() {
    let mut editor = sample();
    assert!(editor.toggle_visibility(SegmentKind::Cliche));
    assert!(editor.is_hidden(&SegmentKind::Cliche));

    let units = editor.render();
    assert!(!units[1].is_interactive());
    assert_eq!(units[1].content(), "a perfect storm");
    assert!(editor.open_popover(1).is_err());

    assert!(!editor.toggle_visibility(SegmentKind::Cliche));
    assert!(editor.render()[1].is_interactive());
}

#[test]
fn hiding_a_kind_closes_its_open_popover() {
    let mut editor = sample();
    editor.open_popover(3).unwrap();
    editor.toggle_visibility(SegmentKind::EmDash);
    assert_eq!(editor.open_popover_index(), None);
}

#[test]
fn long_sentence_popover_is_display_only() {
    let mut editor = SegmentEditor::from_segments(vec![Segment::issue(
        SegmentKind::LongSentence,
        "This goes on.",
        ["Shorten it."],
    )]);
    editor.open_popover(0).unwrap();
    let RenderUnit::Highlight {
        popover: Some(popover),
        color,
        ..
    } = &editor.render()[0]
    else {
        panic!("expected open popover");
    };
    assert!(!popover.can_replace);
    assert_eq!(*color, HighlightColor::Red);
}
