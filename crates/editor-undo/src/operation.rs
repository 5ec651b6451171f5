//! Reversible Operations
//!
//! An [`Operation`] is a self-contained, reversible unit of change against a [`Document`].
//! The set of operations is closed: [`InsertText`], [`DeleteText`] and [`UppercaseText`],
//! each implementing the shared [`Reversible`] interface.
//!
//! # State machine
//!
//! ```text
//!             apply()
//! Unapplied ──────────▶ Applied
//!     ▲                    │
//!     └────── undo() ──────┘
//! ```
//!
//! `undo()` on an `Unapplied` operation and `apply()` on an `Applied` one fail with
//! [`EditError::InvalidState`]. Redo is `apply()` again after an undo.
//!
//! Operations never own the document: it is passed in for the duration of each call.

use crate::delta::TextDeltaEdit;
use crate::document::Document;
use crate::error::{EditError, Result};
use std::fmt;

/// Operation kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Text insertion
    Insert,
    /// Range deletion
    Delete,
    /// Range upper-casing
    Uppercase,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Insert => write!(f, "insert"),
            OperationKind::Delete => write!(f, "delete"),
            OperationKind::Uppercase => write!(f, "uppercase"),
        }
    }
}

/// Lifecycle state of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationState {
    /// Constructed, or undone
    #[default]
    Unapplied,
    /// Applied to the document and reversible
    Applied,
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationState::Unapplied => write!(f, "unapplied"),
            OperationState::Applied => write!(f, "applied"),
        }
    }
}

/// Capability shared by every operation kind.
pub trait Reversible {
    /// Apply the change, returning the edit performed.
    fn apply(&mut self, document: &mut Document) -> Result<TextDeltaEdit>;

    /// Revert a previously applied change, returning the edit performed.
    fn undo(&mut self, document: &mut Document) -> Result<TextDeltaEdit>;
}

fn require_state(
    kind: OperationKind,
    state: OperationState,
    expected: OperationState,
    action: &'static str,
) -> Result<()> {
    if state == expected {
        Ok(())
    } else {
        Err(EditError::InvalidState {
            kind,
            state,
            action,
        })
    }
}

/// Reads the range an operation wrote and checks that it is still intact.
fn verify_written(
    document: &Document,
    kind: OperationKind,
    start: usize,
    written: &str,
) -> Result<()> {
    let found = document.slice(start, written.chars().count())?;
    if found == written {
        Ok(())
    } else {
        Err(EditError::InvariantViolation {
            kind,
            start,
            expected: written.to_string(),
            found,
        })
    }
}

/// Insert `text` at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertText {
    start: usize,
    text: String,
    state: OperationState,
}

impl InsertText {
    /// Inserted text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Reversible for InsertText {
    fn apply(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        require_state(
            OperationKind::Insert,
            self.state,
            OperationState::Unapplied,
            "apply",
        )?;
        document.insert(&self.text, self.start)?;
        self.state = OperationState::Applied;
        Ok(TextDeltaEdit::insertion(self.start, self.text.as_str()))
    }

    fn undo(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        require_state(
            OperationKind::Insert,
            self.state,
            OperationState::Applied,
            "undo",
        )?;
        verify_written(document, OperationKind::Insert, self.start, &self.text)?;
        let removed = document.delete(self.start, self.text.chars().count())?;
        self.state = OperationState::Unapplied;
        Ok(TextDeltaEdit::deletion(self.start, removed))
    }
}

/// Delete `length` characters at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteText {
    start: usize,
    length: usize,
    /// Captured on each application.
    deleted_text: Option<String>,
    state: OperationState,
}

impl DeleteText {
    /// Requested deletion length in characters
    pub fn length(&self) -> usize {
        self.length
    }

    /// Text removed by the most recent application
    pub fn deleted_text(&self) -> Option<&str> {
        self.deleted_text.as_deref()
    }
}

impl Reversible for DeleteText {
    fn apply(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        require_state(
            OperationKind::Delete,
            self.state,
            OperationState::Unapplied,
            "apply",
        )?;
        let removed = document.delete(self.start, self.length)?;
        self.deleted_text = Some(removed.clone());
        self.state = OperationState::Applied;
        Ok(TextDeltaEdit::deletion(self.start, removed))
    }

    fn undo(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        require_state(
            OperationKind::Delete,
            self.state,
            OperationState::Applied,
            "undo",
        )?;
        let Some(deleted) = self.deleted_text.as_deref() else {
            return Err(EditError::InvalidState {
                kind: OperationKind::Delete,
                state: self.state,
                action: "undo",
            });
        };
        document.insert(deleted, self.start)?;
        self.state = OperationState::Unapplied;
        Ok(TextDeltaEdit::insertion(self.start, deleted))
    }
}

/// Upper-case `length` characters at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UppercaseText {
    start: usize,
    length: usize,
    /// Text replaced by the most recent application.
    original_text: Option<String>,
    /// Text written by the most recent application; may differ in length from `length`.
    upper_text: Option<String>,
    state: OperationState,
}

impl UppercaseText {
    /// Requested range length in characters
    pub fn length(&self) -> usize {
        self.length
    }

    /// Text replaced by the most recent application
    pub fn original_text(&self) -> Option<&str> {
        self.original_text.as_deref()
    }
}

impl Reversible for UppercaseText {
    fn apply(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        require_state(
            OperationKind::Uppercase,
            self.state,
            OperationState::Unapplied,
            "apply",
        )?;
        let original = document.slice(self.start, self.length)?;
        let upper = original.to_uppercase();
        document.replace(self.start, self.length, &upper)?;
        let edit = TextDeltaEdit {
            start: self.start,
            deleted_text: original.clone(),
            inserted_text: upper.clone(),
        };
        self.original_text = Some(original);
        self.upper_text = Some(upper);
        self.state = OperationState::Applied;
        Ok(edit)
    }

    fn undo(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        require_state(
            OperationKind::Uppercase,
            self.state,
            OperationState::Applied,
            "undo",
        )?;
        let (Some(original), Some(upper)) =
            (self.original_text.as_deref(), self.upper_text.as_deref())
        else {
            return Err(EditError::InvalidState {
                kind: OperationKind::Uppercase,
                state: self.state,
                action: "undo",
            });
        };
        verify_written(document, OperationKind::Uppercase, self.start, upper)?;
        let removed = document.replace(self.start, upper.chars().count(), original)?;
        self.state = OperationState::Unapplied;
        Ok(TextDeltaEdit {
            start: self.start,
            deleted_text: removed,
            inserted_text: original.to_string(),
        })
    }
}

/// A reversible change against a [`Document`].
///
/// # Example
///
/// ```rust
/// use editor_undo::{Document, Operation, OperationState};
///
/// let mut doc = Document::from_text("Hello World");
/// let mut op = Operation::delete(5, 6);
/// op.apply(&mut doc).unwrap();
/// assert_eq!(doc.read(), "Hello");
/// assert_eq!(op.deleted_text(), Some(" World"));
///
/// op.undo(&mut doc).unwrap();
/// assert_eq!(doc.read(), "Hello World");
/// assert_eq!(op.state(), OperationState::Unapplied);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Insert text
    Insert(InsertText),
    /// Delete a range
    Delete(DeleteText),
    /// Upper-case a range
    Uppercase(UppercaseText),
}

impl Operation {
    /// Insert `text` at `start`, or at the end of `document` when `start` is `None`.
    ///
    /// The default position is resolved now, not when the operation is applied.
    pub fn insert(document: &Document, text: impl Into<String>, start: Option<usize>) -> Self {
        Self::insert_at(start.unwrap_or_else(|| document.char_count()), text)
    }

    /// Insert `text` at character offset `start`.
    pub fn insert_at(start: usize, text: impl Into<String>) -> Self {
        Operation::Insert(InsertText {
            start,
            text: text.into(),
            state: OperationState::Unapplied,
        })
    }

    /// Delete `length` characters at `start`.
    pub fn delete(start: usize, length: usize) -> Self {
        Operation::Delete(DeleteText {
            start,
            length,
            deleted_text: None,
            state: OperationState::Unapplied,
        })
    }

    /// Upper-case `length` characters at `start`.
    pub fn uppercase(start: usize, length: usize) -> Self {
        Operation::Uppercase(UppercaseText {
            start,
            length,
            original_text: None,
            upper_text: None,
            state: OperationState::Unapplied,
        })
    }

    /// Operation kind
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Insert(_) => OperationKind::Insert,
            Operation::Delete(_) => OperationKind::Delete,
            Operation::Uppercase(_) => OperationKind::Uppercase,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> OperationState {
        match self {
            Operation::Insert(op) => op.state,
            Operation::Delete(op) => op.state,
            Operation::Uppercase(op) => op.state,
        }
    }

    /// Whether the operation is currently applied
    pub fn is_applied(&self) -> bool {
        self.state() == OperationState::Applied
    }

    /// Start character offset
    pub fn start(&self) -> usize {
        match self {
            Operation::Insert(op) => op.start,
            Operation::Delete(op) => op.start,
            Operation::Uppercase(op) => op.start,
        }
    }

    /// Text captured by a delete operation, once applied
    pub fn deleted_text(&self) -> Option<&str> {
        match self {
            Operation::Delete(op) => op.deleted_text(),
            _ => None,
        }
    }

    /// Text captured by an uppercase operation, once applied
    pub fn original_text(&self) -> Option<&str> {
        match self {
            Operation::Uppercase(op) => op.original_text(),
            _ => None,
        }
    }

    fn as_reversible(&mut self) -> &mut dyn Reversible {
        match self {
            Operation::Insert(op) => op,
            Operation::Delete(op) => op,
            Operation::Uppercase(op) => op,
        }
    }
}

impl Operation {
    /// Apply the operation to `document`.
    pub fn apply(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        let edit = self.as_reversible().apply(document)?;
        tracing::debug!(
            kind = %self.kind(),
            start = edit.start,
            content = %document.read(),
            "applied operation"
        );
        Ok(edit)
    }

    /// Revert the operation on `document`.
    pub fn undo(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        let edit = self.as_reversible().undo(document)?;
        tracing::debug!(
            kind = %self.kind(),
            start = edit.start,
            content = %document.read(),
            "undid operation"
        );
        Ok(edit)
    }
}

impl Reversible for Operation {
    fn apply(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        Operation::apply(self, document)
    }

    fn undo(&mut self, document: &mut Document) -> Result<TextDeltaEdit> {
        Operation::undo(self, document)
    }
}
