//! State change notifications for the hosting UI.
//!
//! A host registers a [`HistoryListener`] with its history and receives a
//! [`HistoryState`] after every change, which is all it needs to enable or
//! disable undo/redo affordances and update their labels.

use bitflags::bitflags;

bitflags! {
    /// What happened during the change that triggered a notification.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HistoryChange: u8 {
        /// A new group was started.
        const RECORDED = 1 << 0;
        /// An edit was appended to the open group.
        const MERGED = 1 << 1;
        const UNDONE = 1 << 2;
        const REDONE = 1 << 3;
        /// Undone groups were discarded by a fresh edit.
        const TRUNCATED = 1 << 4;
        /// Oldest groups were dropped to honor the depth limit.
        const EVICTED = 1 << 5;
        const CLEARED = 1 << 6;
    }
}

/// Snapshot of the history passed to listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryState {
    pub change: HistoryChange,
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_label: Option<String>,
    pub redo_label: Option<String>,
    /// Index of the most recently applied group.
    pub pointer: Option<usize>,
    /// Number of groups held.
    pub len: usize,
}

/// Receives history state changes.
pub trait HistoryListener {
    fn history_changed(&mut self, state: &HistoryState);
}

impl<F> HistoryListener for F
where
    F: FnMut(&HistoryState),
{
    fn history_changed(&mut self, state: &HistoryState) {
        self(state);
    }
}
