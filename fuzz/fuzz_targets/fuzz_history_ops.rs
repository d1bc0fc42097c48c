//! Fuzz target for the undo/redo state machine.
//!
//! Drives an EditBuffer with arbitrary edit, undo, redo and commit sequences
//! and checks that the history never panics and always round-trips.

#![no_main]

use arbitrary::Arbitrary;
use edit_history::{EditBuffer, HistoryConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Insert { at: u16, text: String },
    Delete { at: u16, len: u8 },
    Replace { at: u16, len: u8, text: String },
    Undo,
    Redo,
    Commit,
}

#[derive(Arbitrary, Debug)]
struct Input {
    max_depth: u8,
    merge: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let config = HistoryConfig::new(usize::from(input.max_depth)).with_merge_edits(input.merge);
    let mut buffer = EditBuffer::with_config(config);

    for op in input.ops.iter().take(500) {
        let len = buffer.document().len_chars();
        match op {
            Op::Insert { at, text } => {
                buffer.set_cursor(usize::from(*at));
                buffer.insert(text);
            }
            Op::Delete { at, len: n } => {
                let start = usize::from(*at).min(len);
                let _ = buffer.delete_range(start, start + usize::from(*n));
            }
            Op::Replace { at, len: n, text } => {
                let start = usize::from(*at).min(len);
                let end = (start + usize::from(*n)).min(len);
                let _ = buffer.replace_range(start, end, text);
            }
            Op::Undo => {
                let _ = buffer.undo();
            }
            Op::Redo => {
                let _ = buffer.redo();
            }
            Op::Commit => buffer.commit(),
        }
        assert!(buffer.cursor() <= buffer.document().len_chars());
    }

    let latest = {
        while buffer.redo().is_ok() {}
        buffer.text()
    };
    while buffer.undo().is_ok() {}
    assert!(!buffer.can_undo());
    while buffer.redo().is_ok() {}
    assert_eq!(buffer.text(), latest);
});
