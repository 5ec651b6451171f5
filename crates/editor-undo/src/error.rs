//! Error types for document primitives and history operations.

use crate::operation::{OperationKind, OperationState};
use thiserror::Error;

/// Errors produced while applying or inverting operations.
///
/// `NothingToUndo` / `NothingToRedo` are not errors; see [`crate::HistoryResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A position/length pair falls outside the document.
    #[error("range {start}+{length} is out of bounds for document of {char_count} characters")]
    OutOfRange {
        /// Start character offset.
        start: usize,
        /// Length in characters.
        length: usize,
        /// Document length at the time of the call.
        char_count: usize,
    },

    /// The operation is not in a state that allows the requested action.
    #[error("cannot {action} {kind} operation in state {state}")]
    InvalidState {
        /// Operation kind.
        kind: OperationKind,
        /// Current state of the operation.
        state: OperationState,
        /// The rejected action (`"apply"` or `"undo"`).
        action: &'static str,
    },

    /// An inversion found different text than the operation wrote.
    ///
    /// The document was mutated outside the history protocol; the session is aborted.
    #[error("{kind} undo at {start} expected {expected:?} but found {found:?}")]
    InvariantViolation {
        /// Operation kind.
        kind: OperationKind,
        /// Start character offset of the operation.
        start: usize,
        /// Text the operation wrote.
        expected: String,
        /// Text actually present in the document.
        found: String,
    },

    /// A previous invariant violation aborted this session.
    #[error("session aborted after an invariant violation")]
    SessionAborted,
}

impl EditError {
    /// Whether this error leaves the invoker unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EditError::InvariantViolation { .. } | EditError::SessionAborted
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EditError>;
