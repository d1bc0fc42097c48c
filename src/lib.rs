//! `edit_history` - Compound-edit undo/redo for text editing surfaces
//!
//! An [`EditHistory`] receives atomic edits from an editing surface, groups
//! them into user-perceived actions, and replays or reverses whole groups on
//! request. [`EditBuffer`] is a ready-made surface backed by a rope.
//!
//! ```
//! use edit_history::{AtomicEdit, EditHistory, EditSurface};
//!
//! let mut text = String::new();
//! let mut history = EditHistory::new();
//!
//! for (offset, ch) in "hi".chars().enumerate() {
//!     let edit = AtomicEdit::insert(offset, ch);
//!     text.apply_edit(&edit).unwrap();
//!     history.record(edit);
//! }
//! assert_eq!(history.len(), 1);
//!
//! history.undo(&mut text).unwrap();
//! assert_eq!(text, "");
//! history.redo(&mut text).unwrap();
//! assert_eq!(text, "hi");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // EditHistory in history, EditGroup in group
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::must_use_candidate)] // Builders already carry must_use where it matters

pub mod buffer;
pub mod config;
pub mod document;
pub mod edit;
pub mod error;
pub mod event;
pub mod group;
pub mod history;
pub mod surface;

// Re-export core types at crate root
pub use buffer::EditBuffer;
pub use config::HistoryConfig;
pub use document::TextDocument;
pub use edit::{AtomicEdit, EditKind};
pub use error::{Direction, Error, Result};
pub use event::{HistoryChange, HistoryListener, HistoryState};
pub use group::EditGroup;
pub use history::EditHistory;
pub use surface::EditSurface;
