//! Edit history performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use edit_history::{AtomicEdit, EditBuffer, EditHistory, HistoryConfig};
use std::hint::black_box;

fn history_recording(c: &mut Criterion) {
    c.bench_function("history_record_merged_1k", |b| {
        b.iter(|| {
            let mut history = EditHistory::new();
            for i in 0..1_000 {
                history.record(AtomicEdit::insert(i, "x"));
            }
            black_box(history.len())
        });
    });

    c.bench_function("history_record_groups_1k", |b| {
        b.iter(|| {
            let mut history = EditHistory::with_config(HistoryConfig::unlimited());
            for i in 0..1_000 {
                history.record(AtomicEdit::insert(i, "x"));
                history.commit();
            }
            black_box(history.len())
        });
    });

    c.bench_function("history_record_with_eviction", |b| {
        b.iter(|| {
            let mut history = EditHistory::with_config(HistoryConfig::new(100));
            for i in 0..1_000 {
                history.record(AtomicEdit::insert(i, "x"));
                history.commit();
            }
            black_box(history.len())
        });
    });
}

fn buffer_typing(c: &mut Criterion) {
    c.bench_function("editbuffer_type_1k_chars", |b| {
        b.iter(|| {
            let mut buffer = EditBuffer::new();
            for _ in 0..1_000 {
                buffer.insert(black_box("a"));
            }
            buffer
        });
    });
}

fn undo_redo(c: &mut Criterion) {
    let mut typed = EditBuffer::new();
    for i in 0..500 {
        typed.insert("word ");
        if i % 5 == 0 {
            typed.insert("\n");
        }
    }
    let text = typed.text();

    c.bench_function("editbuffer_undo_redo_all", |b| {
        b.iter_batched(
            || {
                let mut buffer = EditBuffer::with_text("");
                buffer.insert(&text);
                for _ in 0..100 {
                    buffer.insert("x");
                    buffer.commit();
                }
                buffer
            },
            |mut buffer| {
                while buffer.undo().is_ok() {}
                while buffer.redo().is_ok() {}
                buffer
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, history_recording, buffer_typing, undo_redo);
criterion_main!(benches);
