//! Editable text buffer with cursor and grouped undo/redo.
//!
//! [`EditBuffer`] is a minimal editing surface: it owns a [`TextDocument`],
//! applies each user edit to it, and records the resulting atomic edit in its
//! [`EditHistory`].
//!
//! # Examples
//!
//! ```
//! use edit_history::EditBuffer;
//!
//! let mut buf = EditBuffer::new();
//! buf.insert("Hello");
//! buf.insert(" World"); // same group as "Hello"
//! buf.delete_backward().unwrap(); // deletion starts a new group
//! assert_eq!(buf.text(), "Hello Worl");
//!
//! buf.undo().unwrap();
//! assert_eq!(buf.text(), "Hello World");
//! buf.undo().unwrap();
//! assert_eq!(buf.text(), "");
//! assert!(buf.undo().is_err());
//! ```

use crate::config::HistoryConfig;
use crate::document::TextDocument;
use crate::edit::AtomicEdit;
use crate::error::{Error, Result};
use crate::event::HistoryListener;
use crate::history::EditHistory;
use crate::surface::EditSurface;

/// Text buffer with a cursor and undo/redo history.
#[derive(Debug, Default)]
pub struct EditBuffer {
    document: TextDocument,
    cursor: usize,
    history: EditHistory,
}

impl EditBuffer {
    /// Create a new empty edit buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edit buffer with initial text. The initial text is not undoable.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            document: TextDocument::from_str(text),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            history: EditHistory::with_config(config),
            ..Self::default()
        }
    }

    /// Register a listener for history state changes.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: HistoryListener + 'static,
    {
        self.history.set_listener(listener);
    }

    #[must_use]
    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    #[must_use]
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Get the full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.document.to_string()
    }

    /// Replace the entire text, resetting cursor and history.
    pub fn set_text(&mut self, text: &str) {
        self.document.replace_all(text);
        self.cursor = 0;
        self.history.clear();
    }

    /// Cursor as a character offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the document.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.document.len_chars());
    }

    /// Insert text at the cursor.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = self.cursor;
        // The cursor is always within the document.
        if self.apply(AtomicEdit::insert(offset, text)).is_ok() {
            self.cursor = offset + text.chars().count();
        }
    }

    /// Insert text at `offset` and move the cursor after it.
    pub fn insert_at(&mut self, offset: usize, text: &str) -> Result<()> {
        self.check_offset(offset)?;
        self.cursor = offset;
        self.insert(text);
        Ok(())
    }

    /// Delete the character before the cursor. A no-op at the start.
    pub fn delete_backward(&mut self) -> Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.delete_range(self.cursor - 1, self.cursor)
    }

    /// Delete the character after the cursor. A no-op at the end.
    pub fn delete_forward(&mut self) -> Result<()> {
        if self.cursor >= self.document.len_chars() {
            return Ok(());
        }
        self.delete_range(self.cursor, self.cursor + 1)
    }

    /// Delete the characters between `start` and `end`, in either order.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<()> {
        let (start, end) = (start.min(end), start.max(end));
        let removed = self.text_in(start, end)?;
        if removed.is_empty() {
            return Ok(());
        }
        self.apply(AtomicEdit::delete(start, removed))?;
        self.cursor = start;
        Ok(())
    }

    /// Replace the characters between `start` and `end`, in either order,
    /// with `text`.
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) -> Result<()> {
        let (start, end) = (start.min(end), start.max(end));
        let old = self.text_in(start, end)?;
        if old.is_empty() && text.is_empty() {
            return Ok(());
        }
        let edit = AtomicEdit::replace(start, old, text);
        let cursor = edit.end_after_apply();
        self.apply(edit)?;
        self.cursor = cursor;
        Ok(())
    }

    /// Undo the most recent group. The cursor follows the last replayed
    /// edit, which is the inverse of the group's first edit.
    pub fn undo(&mut self) -> Result<()> {
        let group = self.history.undo(&mut self.document)?;
        if let Some(first) = group.edits().first() {
            self.cursor = first.invert().end_after_apply();
        }
        self.clamp_cursor();
        Ok(())
    }

    /// Redo the next undone group. The cursor moves past its last edit.
    pub fn redo(&mut self) -> Result<()> {
        let group = self.history.redo(&mut self.document)?;
        if let Some(last) = group.last() {
            self.cursor = last.end_after_apply();
        }
        self.clamp_cursor();
        Ok(())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Close the current undo group.
    pub fn commit(&mut self) {
        self.history.commit();
    }

    /// Clear the undo/redo history, keeping the text.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn apply(&mut self, edit: AtomicEdit) -> Result<()> {
        self.document.apply_edit(&edit)?;
        self.history.record(edit);
        Ok(())
    }

    /// Text in `start..end`; callers pass `start <= end`.
    fn text_in(&self, start: usize, end: usize) -> Result<String> {
        self.document.slice(start, end).ok_or(Error::OutOfBounds {
            offset: end,
            len: self.document.len_chars(),
        })
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        if offset > self.document.len_chars() {
            return Err(Error::OutOfBounds {
                offset,
                len: self.document.len_chars(),
            });
        }
        Ok(())
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.document.len_chars());
    }
}
