//! Undo/redo history.
//!
//! Two LIFO stacks of operations: `undo_stack` holds applied operations, `redo_stack`
//! holds undone ones. Pushing a new operation always clears `redo_stack`, so the
//! history stays linear.

use crate::operation::Operation;

/// Linear undo/redo history
///
/// Read-only outside the crate; operations move between the stacks only through
/// [`crate::Invoker`].
///
/// ```compile_fail
/// use editor_undo::{History, Operation};
///
/// let mut history = History::new();
/// history.push_redo(Operation::insert_at(0, "x"));
/// ```
#[derive(Debug)]
pub struct History {
    undo_stack: Vec<Operation>,
    redo_stack: Vec<Operation>,
    max_undo: usize,
    /// Clean point tracking. Uses `undo_stack.len()` as the saved position in the linear history.
    /// When `redo_stack` is non-empty, `clean_index` may be greater than `undo_stack.len()`.
    clean_index: Option<usize>,
}

impl History {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::with_max_undo(usize::MAX)
    }

    /// Create a history that keeps at most `max_undo` undoable operations.
    ///
    /// When full, pushing evicts the oldest operation. A limit of zero is treated as one.
    pub fn with_max_undo(max_undo: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo: max_undo.max(1),
            clean_index: Some(0),
        }
    }

    /// Maximum undo depth
    pub fn max_undo(&self) -> usize {
        self.max_undo
    }

    /// Can undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Can redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo stack depth
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Redo stack depth
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recent undoable operation
    pub fn peek_undo(&self) -> Option<&Operation> {
        self.undo_stack.last()
    }

    /// Most recent redoable operation
    pub fn peek_redo(&self) -> Option<&Operation> {
        self.redo_stack.last()
    }

    /// Whether the history sits at the clean point
    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.undo_stack.len())
    }

    /// Mark the current position as the clean point
    pub fn mark_clean(&mut self) {
        self.clean_index = Some(self.undo_stack.len());
    }

    fn clear_redo_and_adjust_clean(&mut self) {
        if self.redo_stack.is_empty() {
            return;
        }

        // A clean point inside the redo area becomes unreachable once it is cleared.
        if let Some(clean_index) = self.clean_index
            && clean_index > self.undo_stack.len()
        {
            self.clean_index = None;
        }

        self.redo_stack.clear();
    }

    /// Record a freshly applied operation, discarding everything redoable.
    pub(crate) fn push(&mut self, operation: Operation) {
        self.clear_redo_and_adjust_clean();

        if self.undo_stack.len() >= self.max_undo {
            let evicted = self.undo_stack.remove(0);
            tracing::trace!(kind = %evicted.kind(), "evicted oldest undo entry");
            self.clean_index = match self.clean_index {
                Some(0) | None => None,
                Some(clean_index) => Some(clean_index - 1),
            };
        }

        self.undo_stack.push(operation);
    }

    /// Take the most recent undoable operation.
    pub(crate) fn pop_undo(&mut self) -> Option<Operation> {
        self.undo_stack.pop()
    }

    /// Take the most recent redoable operation.
    pub(crate) fn pop_redo(&mut self) -> Option<Operation> {
        self.redo_stack.pop()
    }

    /// Put an operation back on top of the undo stack without touching `redo_stack`.
    pub(crate) fn restore_undo(&mut self, operation: Operation) {
        self.undo_stack.push(operation);
    }

    /// Put an operation on top of the redo stack.
    pub(crate) fn push_redo(&mut self, operation: Operation) {
        self.redo_stack.push(operation);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
