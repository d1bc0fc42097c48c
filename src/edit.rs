//! Atomic edits reported by an editing surface.
//!
//! An [`AtomicEdit`] is the smallest recorded text change. It carries enough
//! text to be replayed literally in either direction, so the history never
//! has to look at the document to undo or redo.

use std::fmt;

/// Category assigned to insertions by [`EditKind::category`].
pub const CATEGORY_ADDITION: &str = "addition";
/// Category assigned to deletions by [`EditKind::category`].
pub const CATEGORY_DELETION: &str = "deletion";
/// Category assigned to replacements by [`EditKind::category`].
pub const CATEGORY_REPLACEMENT: &str = "replacement";

/// Classification of an atomic edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKind {
    Insert,
    Delete,
    Replace,
}

impl EditKind {
    /// Default grouping category for edits of this kind.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Insert => CATEGORY_ADDITION,
            Self::Delete => CATEGORY_DELETION,
            Self::Replace => CATEGORY_REPLACEMENT,
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => f.write_str("insert"),
            Self::Delete => f.write_str("delete"),
            Self::Replace => f.write_str("replace"),
        }
    }
}

/// A single insert, delete or replace at a character offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AtomicEdit {
    Insert { offset: usize, text: String },
    /// `text` is the removed text.
    Delete { offset: usize, text: String },
    Replace {
        offset: usize,
        old: String,
        new: String,
    },
}

impl AtomicEdit {
    /// Insert `text` at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::Insert {
            offset,
            text: text.into(),
        }
    }

    /// Delete `text`, which starts at `offset`.
    pub fn delete(offset: usize, text: impl Into<String>) -> Self {
        Self::Delete {
            offset,
            text: text.into(),
        }
    }

    /// Replace `old`, which starts at `offset`, with `new`.
    pub fn replace(offset: usize, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self::Replace {
            offset,
            old: old.into(),
            new: new.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EditKind {
        match self {
            Self::Insert { .. } => EditKind::Insert,
            Self::Delete { .. } => EditKind::Delete,
            Self::Replace { .. } => EditKind::Replace,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Insert { offset, .. }
            | Self::Delete { offset, .. }
            | Self::Replace { offset, .. } => *offset,
        }
    }

    /// Number of characters the edit touches in the document it applies to.
    ///
    /// For a replace this is the length of the replaced text.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Insert { text, .. } | Self::Delete { text, .. } => text.chars().count(),
            Self::Replace { old, .. } => old.chars().count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Insert { text, .. } | Self::Delete { text, .. } => text.is_empty(),
            Self::Replace { old, new, .. } => old.is_empty() && new.is_empty(),
        }
    }

    /// The text present in the document after the edit is applied.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Insert { text, .. } => text,
            Self::Delete { .. } => "",
            Self::Replace { new, .. } => new,
        }
    }

    /// Character offset just past the edit's resulting text.
    #[must_use]
    pub fn end_after_apply(&self) -> usize {
        self.offset() + self.text().chars().count()
    }

    /// True if any text inserted, removed or changed contains a line break.
    /// Line breaks are the ones the rope counts lines by.
    #[must_use]
    pub fn spans_multiple_lines(&self) -> bool {
        match self {
            Self::Insert { text, .. } | Self::Delete { text, .. } => has_line_break(text),
            Self::Replace { old, new, .. } => has_line_break(old) || has_line_break(new),
        }
    }

    /// The edit that undoes this one.
    #[must_use]
    pub fn invert(&self) -> Self {
        match self {
            Self::Insert { offset, text } => Self::Delete {
                offset: *offset,
                text: text.clone(),
            },
            Self::Delete { offset, text } => Self::Insert {
                offset: *offset,
                text: text.clone(),
            },
            Self::Replace { offset, old, new } => Self::Replace {
                offset: *offset,
                old: new.clone(),
                new: old.clone(),
            },
        }
    }
}

/// Line break characters recognised by ropey.
fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}'])
}
