//! The contract between the history and the surface that owns the text.

use crate::edit::AtomicEdit;
use crate::error::{Error, Result};

/// Something that can apply atomic edits to its text.
///
/// The history decides which edits to replay and in what order; the surface
/// performs the mutation. Implementations must either apply the edit fully
/// or leave the text untouched and return [`Error::Replay`](crate::Error::Replay).
pub trait EditSurface {
    fn apply_edit(&mut self, edit: &AtomicEdit) -> Result<()>;
}

impl<S: EditSurface + ?Sized> EditSurface for &mut S {
    fn apply_edit(&mut self, edit: &AtomicEdit) -> Result<()> {
        (**self).apply_edit(edit)
    }
}

impl EditSurface for String {
    fn apply_edit(&mut self, edit: &AtomicEdit) -> Result<()> {
        let byte_at = |s: &str, offset: usize| {
            if offset == s.chars().count() {
                Some(s.len())
            } else {
                s.char_indices().nth(offset).map(|(idx, _)| idx)
            }
        };
        let start = byte_at(self, edit.offset()).ok_or_else(|| {
            Error::replay(edit.offset(), edit.kind(), "offset past end of text")
        })?;
        let expected = match edit {
            AtomicEdit::Insert { .. } => "",
            AtomicEdit::Delete { text, .. } => text.as_str(),
            AtomicEdit::Replace { old, .. } => old.as_str(),
        };
        if !self[start..].starts_with(expected) {
            return Err(Error::replay(
                edit.offset(),
                edit.kind(),
                "text does not match",
            ));
        }
        self.replace_range(start..start + expected.len(), edit.text());
        Ok(())
    }
}
