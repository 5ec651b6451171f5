//! Invoker Layer
//!
//! The [`Invoker`] owns a [`Document`] and its [`History`] and is the only component
//! client code drives directly.
//!
//! # Overview
//!
//! - **Submit**: apply a new [`Operation`], record it, and discard everything redoable
//! - **Undo**: revert the most recent applied operation
//! - **Redo**: re-apply the most recently undone operation
//! - **State**: version tracking, dirty tracking and change notifications
//!
//! An empty stack is not an error: [`Invoker::undo`] and [`Invoker::redo`] report it as
//! [`HistoryResult::NothingToUndo`] / [`HistoryResult::NothingToRedo`].
//!
//! # Example
//!
//! ```rust
//! use editor_undo::{HistoryResult, Invoker, Operation};
//!
//! let mut invoker = Invoker::new();
//!
//! let hello = Operation::insert(invoker.document(), "Hello", None);
//! invoker.submit(hello).unwrap();
//! invoker.submit(Operation::insert_at(5, " World")).unwrap();
//! assert_eq!(invoker.text(), "Hello World");
//!
//! invoker.undo().unwrap();
//! assert_eq!(invoker.text(), "Hello");
//! invoker.undo().unwrap();
//! assert_eq!(invoker.text(), "");
//! assert_eq!(invoker.undo().unwrap(), HistoryResult::NothingToUndo);
//!
//! invoker.redo().unwrap();
//! assert_eq!(invoker.text(), "Hello");
//! ```

use crate::delta::{TextDelta, TextDeltaEdit};
use crate::document::Document;
use crate::error::{EditError, Result};
use crate::history::History;
use crate::operation::{Operation, OperationKind};
use crate::state::{
    DocumentState, StateChange, StateChangeCallback, StateChangeType, UndoRedoState,
};
use std::sync::Arc;

/// Outcome of a successful history call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryResult {
    /// A new operation was applied
    Applied(OperationKind),
    /// The most recent operation was undone
    Undone(OperationKind),
    /// The most recently undone operation was re-applied
    Redone(OperationKind),
    /// The undo stack was empty; nothing changed
    NothingToUndo,
    /// The redo stack was empty; nothing changed
    NothingToRedo,
}

impl HistoryResult {
    /// Whether the call changed the document
    pub fn is_change(&self) -> bool {
        !matches!(
            self,
            HistoryResult::NothingToUndo | HistoryResult::NothingToRedo
        )
    }
}

/// Document + history facade
///
/// All mutating calls take `&mut self`; a host that needs several writers must serialize
/// them around one lock.
pub struct Invoker {
    /// The edited document
    document: Document,
    /// Undo/redo history
    history: History,
    /// State version number
    version: u64,
    /// Set once an invariant violation is observed
    aborted: bool,
    /// Structured delta of the last successful step
    last_text_delta: Option<Arc<TextDelta>>,
    /// State change callback list
    callbacks: Vec<StateChangeCallback>,
}

impl Invoker {
    /// Create an invoker over an empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create an invoker over a document holding `text`
    ///
    /// The initial text is the clean point and cannot be undone.
    pub fn with_text(text: &str) -> Self {
        Self {
            document: Document::from_text(text),
            history: History::new(),
            version: 0,
            aborted: false,
            last_text_delta: None,
            callbacks: Vec::new(),
        }
    }

    /// Limit the undo depth; the oldest operations are evicted beyond it.
    ///
    /// Meant for construction: any history recorded so far is dropped.
    pub fn with_max_undo(mut self, max_undo: usize) -> Self {
        self.history = History::with_max_undo(max_undo);
        self
    }

    /// Apply `operation` and record it.
    ///
    /// On failure the operation is dropped, the document is unchanged and the redo stack
    /// is kept.
    pub fn submit(&mut self, mut operation: Operation) -> Result<HistoryResult> {
        self.ensure_live()?;

        let before_char_count = self.document.char_count();
        let edit = match operation.apply(&mut self.document) {
            Ok(edit) => edit,
            Err(err) => return Err(self.fail(err)),
        };

        let kind = operation.kind();
        self.history.push(operation);
        self.record(StateChangeType::Submitted, kind, before_char_count, edit);
        Ok(HistoryResult::Applied(kind))
    }

    /// Apply several operations in order, stopping at the first failure.
    pub fn submit_all(
        &mut self,
        operations: impl IntoIterator<Item = Operation>,
    ) -> Result<Vec<HistoryResult>> {
        let mut results = Vec::new();

        for operation in operations {
            results.push(self.submit(operation)?);
        }

        Ok(results)
    }

    /// Undo the most recent operation.
    pub fn undo(&mut self) -> Result<HistoryResult> {
        self.ensure_live()?;

        let Some(mut operation) = self.history.pop_undo() else {
            tracing::debug!("nothing to undo");
            return Ok(HistoryResult::NothingToUndo);
        };

        let before_char_count = self.document.char_count();
        match operation.undo(&mut self.document) {
            Ok(edit) => {
                let kind = operation.kind();
                self.history.push_redo(operation);
                self.record(StateChangeType::Undone, kind, before_char_count, edit);
                Ok(HistoryResult::Undone(kind))
            }
            Err(err) => {
                self.history.restore_undo(operation);
                Err(self.fail(err))
            }
        }
    }

    /// Re-apply the most recently undone operation.
    pub fn redo(&mut self) -> Result<HistoryResult> {
        self.ensure_live()?;

        let Some(mut operation) = self.history.pop_redo() else {
            tracing::debug!("nothing to redo");
            return Ok(HistoryResult::NothingToRedo);
        };

        let before_char_count = self.document.char_count();
        match operation.apply(&mut self.document) {
            Ok(edit) => {
                let kind = operation.kind();
                self.history.restore_undo(operation);
                self.record(StateChangeType::Redone, kind, before_char_count, edit);
                Ok(HistoryResult::Redone(kind))
            }
            Err(err) => {
                self.history.push_redo(operation);
                Err(self.fail(err))
            }
        }
    }

    /// The document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access to the document, bypassing the history.
    ///
    /// Edits made here are not recorded; touching text that recorded operations wrote makes
    /// their undo fail with [`EditError::InvariantViolation`].
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Current document text
    pub fn text(&self) -> String {
        self.document.read()
    }

    /// The history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Can undo
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Can redo
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo stack depth
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Redo stack depth
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Operation the next [`undo`](Self::undo) would revert
    pub fn peek_undo(&self) -> Option<&Operation> {
        self.history.peek_undo()
    }

    /// Operation the next [`redo`](Self::redo) would re-apply
    pub fn peek_redo(&self) -> Option<&Operation> {
        self.history.peek_redo()
    }

    /// Whether current state is at clean point (for dirty tracking)
    pub fn is_clean(&self) -> bool {
        self.history.is_clean()
    }

    /// Mark current state as clean point (call after saving)
    pub fn mark_clean(&mut self) {
        self.history.mark_clean();
    }

    /// Whether an invariant violation aborted this session
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// State version, incremented after every successful submit/undo/redo
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Check if state has changed since a version
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version > version
    }

    /// Structured delta of the last successful step, if any.
    pub fn last_text_delta(&self) -> Option<&TextDelta> {
        self.last_text_delta.as_deref()
    }

    /// Take the structured delta of the last successful step, if any.
    pub fn take_last_text_delta(&mut self) -> Option<Arc<TextDelta>> {
        self.last_text_delta.take()
    }

    /// Get document state
    pub fn get_document_state(&self) -> DocumentState {
        DocumentState {
            char_count: self.document.char_count(),
            byte_count: self.document.byte_count(),
            is_modified: !self.history.is_clean(),
            version: self.version,
        }
    }

    /// Get undo/redo state
    pub fn get_undo_redo_state(&self) -> UndoRedoState {
        UndoRedoState {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
            is_clean: self.history.is_clean(),
        }
    }

    /// Subscribe to state change notifications
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn ensure_live(&self) -> Result<()> {
        if self.aborted {
            Err(EditError::SessionAborted)
        } else {
            Ok(())
        }
    }

    fn fail(&mut self, err: EditError) -> EditError {
        if err.is_fatal() {
            self.aborted = true;
            tracing::error!(error = %err, "history is no longer consistent with the document");
        } else {
            tracing::debug!(error = %err, "operation rejected");
        }
        err
    }

    fn record(
        &mut self,
        change_type: StateChangeType,
        kind: OperationKind,
        before_char_count: usize,
        edit: TextDeltaEdit,
    ) {
        let delta = Arc::new(TextDelta {
            before_char_count,
            after_char_count: self.document.char_count(),
            kind,
            edit,
        });
        self.last_text_delta = Some(delta.clone());

        let old_version = self.version;
        self.version += 1;

        let change = StateChange {
            change_type,
            old_version,
            new_version: self.version,
            text_delta: delta,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::new()
    }
}
