//! Invoker State Interface
//!
//! Immutable snapshots of the invoker's document and history, plus the change records
//! delivered to subscribers.
//!
//! # Example
//!
//! ```rust
//! use editor_undo::{Invoker, Operation, StateChangeType};
//! use std::sync::{Arc, Mutex};
//!
//! let mut invoker = Invoker::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let seen_cb = seen.clone();
//! invoker.subscribe(move |change| {
//!     seen_cb.lock().unwrap().push(change.change_type);
//! });
//!
//! invoker.submit(Operation::insert_at(0, "Hello")).unwrap();
//! invoker.undo().unwrap();
//!
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec![StateChangeType::Submitted, StateChangeType::Undone]
//! );
//! assert_eq!(invoker.get_document_state().version, 2);
//! ```

use crate::delta::TextDelta;
use std::sync::Arc;

/// Document state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    /// Total document character count
    pub char_count: usize,
    /// Total document byte count
    pub byte_count: usize,
    /// Whether the document differs from the clean point
    pub is_modified: bool,
    /// Document version number (incremented after each modification)
    pub version: u64,
}

/// Undo/redo stack state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRedoState {
    /// Can undo
    pub can_undo: bool,
    /// Can redo
    pub can_redo: bool,
    /// Undo stack depth
    pub undo_depth: usize,
    /// Redo stack depth
    pub redo_depth: usize,
    /// Whether the history sits at the clean point
    pub is_clean: bool,
}

/// State change type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateChangeType {
    /// A new operation was applied
    Submitted,
    /// An operation was undone
    Undone,
    /// An operation was re-applied
    Redone,
}

/// State change record
#[derive(Debug, Clone)]
pub struct StateChange {
    /// Change type
    pub change_type: StateChangeType,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
    /// Structured text delta of the step.
    pub text_delta: Arc<TextDelta>,
}

/// State change callback function type
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;
