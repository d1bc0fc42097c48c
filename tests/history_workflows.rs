//! End-to-end undo/redo workflows through the public API.
//!
//! Covers the grouping policy, redo truncation, boundary refusals and the
//! full round trip on both the rope-backed buffer and a plain `String`
//! surface.

use edit_history::{
    AtomicEdit, Direction, EditBuffer, EditHistory, EditSurface, Error, HistoryConfig,
    TextDocument,
};

/// Apply an edit to the surface, then record it.
fn apply(history: &mut EditHistory, doc: &mut TextDocument, edit: AtomicEdit) {
    doc.apply_edit(&edit).expect("edit applies");
    history.record(edit);
}

#[test]
fn test_record_always_collapses_redo_future() {
    let mut history = EditHistory::new();
    let mut doc = TextDocument::new();
    let edits = [
        AtomicEdit::insert(0, "abc"),
        AtomicEdit::delete(2, "c"),
        AtomicEdit::insert(2, "\nxyz"),
        AtomicEdit::replace(0, "ab", "AB"),
    ];
    for (i, edit) in edits.into_iter().enumerate() {
        apply(&mut history, &mut doc, edit);
        assert!(history.can_undo(), "after record {i}");
        assert!(!history.can_redo(), "after record {i}");
        if i == 1 {
            history.undo(&mut doc).unwrap();
            assert!(history.can_redo());
        }
    }
}

#[test]
fn test_pointer_plus_one_undos_exhaust_history() {
    let mut history = EditHistory::new();
    let mut doc = TextDocument::new();
    apply(&mut history, &mut doc, AtomicEdit::insert(0, "one"));
    apply(&mut history, &mut doc, AtomicEdit::insert(3, "\ntwo"));
    apply(&mut history, &mut doc, AtomicEdit::delete(0, "o"));

    let pointer = history.pointer().expect("history has groups");
    for _ in 0..=pointer {
        history.undo(&mut doc).unwrap();
    }
    assert!(!history.can_undo());
    assert!(matches!(
        history.undo(&mut doc),
        Err(Error::NoHistory(Direction::Undo))
    ));
    assert_eq!(doc.to_string(), "");
}

#[test]
fn test_round_trip_restores_exact_text() {
    let mut buffer = EditBuffer::with_text("fn main() {}");
    buffer.set_cursor(11);
    buffer.insert("\n    run();\n");
    buffer.commit();
    buffer.replace_range(3, 7, "start").unwrap();
    let after_g2 = buffer.text();

    buffer.undo().unwrap();
    buffer.undo().unwrap();
    assert_eq!(buffer.text(), "fn main() {}");
    buffer.redo().unwrap();
    buffer.redo().unwrap();
    assert_eq!(buffer.text(), after_g2);
    assert_eq!(after_g2, "fn start() {\n    run();\n}");
}

#[test]
fn test_grouping_policy() {
    let mut history = EditHistory::new();
    let mut doc = TextDocument::new();

    apply(&mut history, &mut doc, AtomicEdit::insert(0, "a"));
    apply(&mut history, &mut doc, AtomicEdit::insert(1, "b"));
    assert_eq!(history.len(), 1, "same-category single-line inserts merge");

    apply(&mut history, &mut doc, AtomicEdit::delete(1, "b"));
    assert_eq!(history.len(), 2, "category change splits");

    history.record_edit(AtomicEdit::delete(0, "a"), "deletion", true);
    doc.apply_edit(&AtomicEdit::delete(0, "a")).unwrap();
    assert_eq!(history.len(), 3, "multi-line edits always split");
}

#[test]
fn test_truncation_after_undo() {
    let mut history = EditHistory::new();
    let mut doc = TextDocument::new();
    apply(&mut history, &mut doc, AtomicEdit::insert(0, "G1"));
    history.commit();
    apply(&mut history, &mut doc, AtomicEdit::insert(2, "G2"));
    history.commit();
    apply(&mut history, &mut doc, AtomicEdit::insert(4, "G3"));
    assert_eq!(history.len(), 3);

    history.undo(&mut doc).unwrap();
    history.undo(&mut doc).unwrap();
    assert_eq!(history.pointer(), Some(0));

    apply(&mut history, &mut doc, AtomicEdit::insert(2, "new"));
    assert_eq!(history.len(), 2);
    assert_eq!(history.groups()[0].edits(), &[AtomicEdit::insert(0, "G1")]);
    assert_eq!(history.groups()[1].edits(), &[AtomicEdit::insert(2, "new")]);
    assert_eq!(doc.to_string(), "G1new");
}

#[test]
fn test_empty_history_boundaries() {
    let mut history = EditHistory::new();
    let mut text = String::new();
    assert!(matches!(
        history.redo(&mut text),
        Err(Error::NoHistory(Direction::Redo))
    ));
    assert!(matches!(
        history.undo(&mut text),
        Err(Error::NoHistory(Direction::Undo))
    ));
}

#[test]
fn test_out_of_band_change_is_non_fatal() {
    let mut history = EditHistory::new();
    let mut doc = TextDocument::new();
    apply(&mut history, &mut doc, AtomicEdit::insert(0, "hello"));

    // Another writer touches the document without telling the history.
    let mut stale = TextDocument::from_str("jello");
    let err = history.undo(&mut stale).unwrap_err();
    assert!(matches!(err, Error::Replay { offset: 0, .. }));
    assert_eq!(stale.to_string(), "jello");

    // The history is intact and still works against the real document.
    assert_eq!(history.pointer(), Some(0));
    history.undo(&mut doc).unwrap();
    assert_eq!(doc.to_string(), "");
}

#[test]
fn test_depth_limit_with_undone_tail() {
    let mut history = EditHistory::with_config(HistoryConfig::new(2));
    let mut doc = TextDocument::new();
    apply(&mut history, &mut doc, AtomicEdit::insert(0, "a"));
    history.commit();
    apply(&mut history, &mut doc, AtomicEdit::insert(1, "b"));
    history.commit();
    apply(&mut history, &mut doc, AtomicEdit::insert(2, "c"));
    assert_eq!(history.len(), 2);
    assert_eq!(history.pointer(), Some(1));

    history.undo(&mut doc).unwrap();
    history.undo(&mut doc).unwrap();
    assert_eq!(doc.to_string(), "a");
    assert!(history.undo(&mut doc).is_err());
}

#[test]
fn test_buffer_cursor_follows_history() {
    let mut buffer = EditBuffer::with_text("hello world");
    buffer.delete_range(5, 11).unwrap();
    assert_eq!(buffer.cursor(), 5);
    buffer.set_cursor(0);

    buffer.undo().unwrap();
    assert_eq!(buffer.text(), "hello world");
    assert_eq!(buffer.cursor(), 11);

    buffer.redo().unwrap();
    assert_eq!(buffer.text(), "hello");
    assert_eq!(buffer.cursor(), 5);
}
