//! Compound edits: atomic edits undone and redone as one unit.

use crate::edit::AtomicEdit;

/// A group of atomic edits that form one user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditGroup {
    edits: Vec<AtomicEdit>,
    category: String,
    done: bool,
}

impl EditGroup {
    pub(crate) fn new(first: AtomicEdit, category: &str) -> Self {
        Self {
            edits: vec![first],
            category: category.to_string(),
            done: true,
        }
    }

    /// Append an edit. The caller only merges edits of the group's category.
    pub(crate) fn push(&mut self, edit: AtomicEdit) {
        self.edits.push(edit);
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Atomic edits in insertion order.
    #[must_use]
    pub fn edits(&self) -> &[AtomicEdit] {
        &self.edits
    }

    /// Category shared by the group's edits.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// True while the group is applied to the document.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// The group's last edit, used to place the cursor after a redo.
    #[must_use]
    pub fn last(&self) -> Option<&AtomicEdit> {
        self.edits.last()
    }
}
