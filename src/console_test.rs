use std::io::Cursor;

use matcher::{DimensionText, Document, Element, ElementKind, MatchKind, MutationSession, Termination};

use super::*;

fn doc_with(elements: Vec<Element>) -> DocStore {
    let mut doc = DocStore::new();
    doc.load_snapshot(elements);
    doc
}

fn picker(input: &str, doc: &DocStore) -> ConsolePicker<Cursor<Vec<u8>>, Vec<u8>> {
    ConsolePicker::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), doc)
}

fn output_of(p: ConsolePicker<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(p.into_output()).unwrap()
}

// =============================================================
// Picker
// =============================================================

#[test]
fn picks_by_name() {
    let d = Element::new("D-1", ElementKind::Dimension);
    let id = d.id;
    let doc = doc_with(vec![d]);
    let mut p = picker("D-1\n", &doc);
    assert_eq!(p.pick_one("Pick", &|_: ElementId| true), PickOutcome::Picked(id));
    assert!(output_of(p).starts_with("Pick\n> "));
}

#[test]
fn picks_by_uuid() {
    let d = Element::new("", ElementKind::Dimension);
    let id = d.id;
    let doc = doc_with(vec![d]);
    let mut p = picker(&format!("{id}\n"), &doc);
    assert_eq!(p.pick_one("Pick", &|_: ElementId| true), PickOutcome::Picked(id));
}

#[test]
fn cancel_words_and_eof() {
    let doc = DocStore::new();
    for input in ["\n", "esc\n", "ESC\n", "q\n", "quit\n", ""] {
        let mut p = picker(input, &doc);
        assert_eq!(p.pick_one("Pick", &|_: ElementId| true), PickOutcome::Cancelled, "{input:?}");
    }
}

#[test]
fn unknown_name_reprompts() {
    let d = Element::new("D-1", ElementKind::Dimension);
    let id = d.id;
    let doc = doc_with(vec![d]);
    let mut p = picker("nope\nD-1\n", &doc);
    assert_eq!(p.pick_one("Pick", &|_: ElementId| true), PickOutcome::Picked(id));
    let out = output_of(p);
    assert!(out.contains("No element named 'nope'."));
    assert_eq!(out.matches("Pick\n> ").count(), 2);
}

#[test]
fn filtered_pick_is_refused() {
    let wall = Element::new("W-1", ElementKind::Wall);
    let wall_id = wall.id;
    let doc = doc_with(vec![wall]);
    let mut p = picker("W-1\n", &doc);
    let outcome = p.pick_one("Pick", &|id: ElementId| id != wall_id);
    assert_eq!(outcome, PickOutcome::Cancelled);
    assert!(output_of(p).contains("'W-1' cannot be picked here."));
}

// =============================================================
// UI
// =============================================================

#[test]
fn notice_format() {
    let mut ui = ConsoleUi::new(Vec::new());
    ui.notify(&Notice::new(NoticeKind::Warning, "No Text Found", "nothing"));
    assert_eq!(String::from_utf8(ui.into_output()).unwrap(), "[warning] No Text Found: nothing\n");
}

#[test]
fn refresh_counts() {
    let mut ui = ConsoleUi::new(Vec::new());
    ui.refresh_view();
    ui.refresh_view();
    assert_eq!(ui.refreshes(), 2);
}

// =============================================================
// End to end
// =============================================================

#[test]
fn session_over_console() {
    let src = Element::new("D-src", ElementKind::Dimension)
        .with_text(DimensionText { above: Some("A".into()), ..Default::default() });
    let tgt = Element::new("D-tgt", ElementKind::Dimension)
        .with_text(DimensionText { below: Some("OLD".into()), ..Default::default() });
    let pipe = Element::new("P-1", ElementKind::Pipe);
    let tgt_id = tgt.id;
    let mut doc = doc_with(vec![src, tgt, pipe]);

    let mut p = picker("D-src\nP-1\nD-tgt\n\n", &doc);
    let mut ui = ConsoleUi::new(Vec::new());
    let report = MutationSession::new(&mut doc, &mut p, &mut ui, MatchKind::DimensionText).run();

    assert_eq!(report.termination, Termination::Completed);
    assert_eq!(report.success_count, 1);
    assert_eq!(doc.element(tgt_id).unwrap().text.above.as_deref(), Some("A"));
    assert_eq!(doc.element(tgt_id).unwrap().text.below, None);
    assert_eq!(ui.refreshes(), 1);
    assert!(output_of(p).contains("'P-1' cannot be picked here."));
    assert_eq!(
        String::from_utf8(ui.into_output()).unwrap(),
        "[info] Success: Finished. Successfully copied text to 1 dimension(s).\n"
    );
}
