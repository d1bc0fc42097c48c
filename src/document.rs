//! Rope-backed text document using the ropey crate.

use ropey::{Rope, RopeSlice};

use crate::edit::AtomicEdit;
use crate::error::{Error, Result};
use crate::surface::EditSurface;

/// Text document that applies atomic edits, refusing any that no longer
/// match its contents.
#[derive(Clone, Debug, Default)]
pub struct TextDocument {
    rope: Rope,
}

impl TextDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of lines.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Get a line by index.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<RopeSlice<'_>> {
        if idx < self.rope.len_lines() {
            Some(self.rope.line(idx))
        } else {
            None
        }
    }

    /// Text in `start..end` (character offsets), if in bounds.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Option<String> {
        self.rope.get_slice(start..end).map(|s| s.to_string())
    }

    /// Convert char index to line index.
    #[must_use]
    pub fn char_to_line(&self, char_idx: usize) -> usize {
        self.rope.char_to_line(char_idx.min(self.len_chars()))
    }

    /// Replace the entire contents.
    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn check_matches(&self, edit: &AtomicEdit, expected: &str) -> Result<()> {
        let start = edit.offset();
        let end = start + expected.chars().count();
        match self.rope.get_slice(start..end) {
            Some(actual) if actual == expected => Ok(()),
            Some(_) => Err(Error::replay(start, edit.kind(), "text does not match")),
            None => Err(Error::replay(start, edit.kind(), "range past end of document")),
        }
    }
}

impl EditSurface for TextDocument {
    fn apply_edit(&mut self, edit: &AtomicEdit) -> Result<()> {
        match edit {
            AtomicEdit::Insert { offset, text } => {
                if *offset > self.len_chars() {
                    return Err(Error::replay(*offset, edit.kind(), "offset past end of document"));
                }
                self.rope.insert(*offset, text);
            }
            AtomicEdit::Delete { offset, text } => {
                self.check_matches(edit, text)?;
                self.rope.remove(*offset..offset + text.chars().count());
            }
            AtomicEdit::Replace { offset, old, new } => {
                self.check_matches(edit, old)?;
                self.rope.remove(*offset..offset + old.chars().count());
                self.rope.insert(*offset, new);
            }
        }
        Ok(())
    }
}

impl From<&str> for TextDocument {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for TextDocument {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}
