//! Linear undo/redo history of compound edits.
//!
//! [`EditHistory`] keeps a sequence of [`EditGroup`]s and a pointer to the
//! most recently applied one. Atomic edits arrive through
//! [`record_edit`](EditHistory::record_edit) and are either appended to the
//! open group or start a new one.
//!
//! # Grouping
//!
//! An incoming edit starts a new group when, checked in order:
//!
//! 1. there is no open group,
//! 2. its category differs from the open group's last category,
//! 3. it spans multiple lines.
//!
//! Otherwise it joins the open group. Undo, redo and
//! [`commit`](EditHistory::commit) seal the open group.
//!
//! # Invariants
//!
//! 1. `applied <= groups.len()`; the pointer is `applied - 1`, or none
//! 2. groups below `applied` are done, the rest are undone
//! 3. only the tail group can be open, and only while it is applied
//! 4. `groups.len() <= max(config.max_depth, 1)` after every record
//!
//! ```text
//! record G1, G2, G3        [G1 G2 G3]  pointer = 2
//! undo x2                  [G1 G2 G3]  pointer = 0
//! record G4                [G1 G4]     pointer = 1   (G2, G3 discarded)
//! ```

use std::fmt;

use tracing::{debug, error, warn};

use crate::config::HistoryConfig;
use crate::edit::AtomicEdit;
use crate::error::{Direction, Error, Result};
use crate::event::{HistoryChange, HistoryListener, HistoryState};
use crate::group::EditGroup;
use crate::surface::EditSurface;

/// Undo/redo history for one editing surface.
#[derive(Default)]
pub struct EditHistory {
    groups: Vec<EditGroup>,
    /// Number of applied groups.
    applied: usize,
    /// Whether the tail group still accepts merges.
    open: bool,
    config: HistoryConfig,
    listener: Option<Box<dyn HistoryListener>>,
}

impl fmt::Debug for EditHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditHistory")
            .field("groups", &self.groups.len())
            .field("pointer", &self.pointer())
            .field("open", &self.open)
            .field("config", &self.config)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl EditHistory {
    /// Create an empty history with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a history that reports every state change to `listener`.
    #[must_use]
    pub fn with_listener<L>(config: HistoryConfig, listener: L) -> Self
    where
        L: HistoryListener + 'static,
    {
        Self {
            config,
            listener: Some(Box::new(listener)),
            ..Self::default()
        }
    }

    /// Replace the state change listener.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: HistoryListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Set the depth limit. An oversized history is pruned on the next record.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.config.max_depth = max_depth;
    }

    // ------------------------------------------------------------------
    // Recording
    // ------------------------------------------------------------------

    /// Record an atomic edit that the surface has already applied.
    ///
    /// Any undone groups are discarded first.
    pub fn record_edit(&mut self, edit: AtomicEdit, category: &str, spans_multiple_lines: bool) {
        let mut change = HistoryChange::empty();

        if self.applied < self.groups.len() {
            let dropped = self.groups.len() - self.applied;
            self.groups.truncate(self.applied);
            self.open = false;
            change |= HistoryChange::TRUNCATED;
            debug!(dropped, "discarded undone groups");
        }

        let merge = self.config.merge_edits
            && self.open
            && !spans_multiple_lines
            && self
                .groups
                .last()
                .is_some_and(|group| group.category() == category);

        if merge {
            if let Some(group) = self.groups.last_mut() {
                group.push(edit);
            }
            change |= HistoryChange::MERGED;
        } else {
            self.groups.push(EditGroup::new(edit, category));
            change |= HistoryChange::RECORDED;
            debug!(category, groups = self.groups.len(), "started edit group");
        }

        self.open = true;
        self.applied = self.groups.len();
        self.enforce_depth(&mut change);
        self.notify(change);
    }

    /// Record an edit, deriving its category from its kind and its
    /// multi-line flag from its text.
    pub fn record(&mut self, edit: AtomicEdit) {
        let category = edit.kind().category();
        let spans = edit.spans_multiple_lines();
        self.record_edit(edit, category, spans);
    }

    /// Seal the open group so the next edit starts a new one.
    pub fn commit(&mut self) {
        self.open = false;
    }

    /// Discard all groups.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.applied = 0;
        self.open = false;
        self.notify(HistoryChange::CLEARED);
    }

    // ------------------------------------------------------------------
    // Undo / redo
    // ------------------------------------------------------------------

    /// Reverse the most recently applied group on `surface`.
    ///
    /// The group's edits are inverted and applied newest first. If the
    /// surface refuses one, the edits already replayed are rolled back and
    /// the history is left unchanged.
    pub fn undo<S>(&mut self, surface: &mut S) -> Result<&EditGroup>
    where
        S: EditSurface + ?Sized,
    {
        let Some(index) = self.pointer() else {
            return Err(Error::NoHistory(Direction::Undo));
        };

        let inverted: Vec<AtomicEdit> = self.groups[index]
            .edits()
            .iter()
            .rev()
            .map(AtomicEdit::invert)
            .collect();
        replay(surface, &inverted)?;

        self.groups[index].set_done(false);
        self.applied -= 1;
        self.open = false;
        debug!(group = index, edits = inverted.len(), "undid edit group");
        self.notify(HistoryChange::UNDONE);

        Ok(&self.groups[index])
    }

    /// Reapply the first undone group on `surface`.
    pub fn redo<S>(&mut self, surface: &mut S) -> Result<&EditGroup>
    where
        S: EditSurface + ?Sized,
    {
        if !self.can_redo() {
            return Err(Error::NoHistory(Direction::Redo));
        }
        let index = self.applied;

        replay(surface, self.groups[index].edits())?;

        self.groups[index].set_done(true);
        self.applied += 1;
        self.open = false;
        debug!(group = index, "redid edit group");
        self.notify(HistoryChange::REDONE);

        Ok(&self.groups[index])
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.applied < self.groups.len()
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Index of the most recently applied group, `None` when fully undone.
    #[must_use]
    pub fn pointer(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// Number of groups, applied or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn groups(&self) -> &[EditGroup] {
        &self.groups
    }

    /// Label for an undo affordance, e.g. `"Undo addition"`.
    #[must_use]
    pub fn undo_label(&self) -> Option<String> {
        self.pointer()
            .map(|index| format!("Undo {}", self.groups[index].category()))
    }

    /// Label for a redo affordance, e.g. `"Redo deletion"`.
    #[must_use]
    pub fn redo_label(&self) -> Option<String> {
        self.groups
            .get(self.applied)
            .map(|group| format!("Redo {}", group.category()))
    }

    /// Current state as seen by listeners.
    #[must_use]
    pub fn state(&self, change: HistoryChange) -> HistoryState {
        HistoryState {
            change,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            undo_label: self.undo_label(),
            redo_label: self.redo_label(),
            pointer: self.pointer(),
            len: self.groups.len(),
        }
    }

    fn enforce_depth(&mut self, change: &mut HistoryChange) {
        let max_depth = self.config.max_depth.max(1);
        if self.groups.len() > max_depth {
            let excess = self.groups.len() - max_depth;
            self.groups.drain(..excess);
            self.applied = self.applied.saturating_sub(excess);
            *change |= HistoryChange::EVICTED;
            debug!(excess, max_depth, "evicted oldest edit groups");
        }
    }

    fn notify(&mut self, change: HistoryChange) {
        if self.listener.is_none() {
            return;
        }
        let state = self.state(change);
        if let Some(listener) = self.listener.as_mut() {
            listener.history_changed(&state);
        }
    }
}

/// Apply `edits` in order, rolling back on the first refusal.
fn replay<S>(surface: &mut S, edits: &[AtomicEdit]) -> Result<()>
where
    S: EditSurface + ?Sized,
{
    for (count, edit) in edits.iter().enumerate() {
        if let Err(err) = surface.apply_edit(edit) {
            warn!(
                offset = edit.offset(),
                kind = %edit.kind(),
                error = %err,
                "surface refused edit, rolling back"
            );
            for applied in edits[..count].iter().rev() {
                if let Err(rollback) = surface.apply_edit(&applied.invert()) {
                    error!(error = %rollback, "rollback failed, surface may be inconsistent");
                    break;
                }
            }
            return Err(err);
        }
    }
    Ok(())
}
