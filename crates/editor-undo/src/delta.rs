//! Structured text change deltas.
//!
//! Every apply/undo/redo reports exactly what it did to the document, so consumers
//! (renderers, indexers, tests) can follow changes without diffing old/new text.
//! Offsets are **character offsets** (Unicode scalar values).

use crate::operation::OperationKind;

/// A single text edit expressed in character offsets.
///
/// Semantics:
/// - `start` is a character offset in the document **at the time this edit is applied**.
/// - The deleted range is defined by the length (in `char`s) of `deleted_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDeltaEdit {
    /// Start character offset of the edit.
    pub start: usize,
    /// Exact deleted text (may be empty).
    pub deleted_text: String,
    /// Exact inserted text (may be empty).
    pub inserted_text: String,
}

impl TextDeltaEdit {
    pub(crate) fn insertion(start: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            deleted_text: String::new(),
            inserted_text: text.into(),
        }
    }

    pub(crate) fn deletion(start: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            deleted_text: text.into(),
            inserted_text: String::new(),
        }
    }

    /// Length of `deleted_text` in characters.
    pub fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Exclusive end character offset in the pre-edit document.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.deleted_len())
    }

    /// The edit that reverts this one.
    pub fn inverted(&self) -> Self {
        Self {
            start: self.start,
            deleted_text: self.inserted_text.clone(),
            inserted_text: self.deleted_text.clone(),
        }
    }
}

/// A structured description of one history step (submit, undo or redo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDelta {
    /// Character count before the step.
    pub before_char_count: usize,
    /// Character count after the step.
    pub after_char_count: usize,
    /// Kind of the operation that produced this change.
    pub kind: OperationKind,
    /// The edit that transforms the "before" document into the "after" document.
    pub edit: TextDeltaEdit,
}

impl TextDelta {
    /// Returns `true` if the step did not change any text.
    pub fn is_empty(&self) -> bool {
        self.edit.deleted_text == self.edit.inserted_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_lengths_count_chars() {
        let edit = TextDeltaEdit {
            start: 2,
            deleted_text: "世界".to_string(),
            inserted_text: "abc".to_string(),
        };
        assert_eq!(edit.deleted_len(), 2);
        assert_eq!(edit.inserted_len(), 3);
        assert_eq!(edit.end(), 4);
    }

    #[test]
    fn test_inverted_swaps_texts() {
        let edit = TextDeltaEdit::deletion(5, " World");
        let inverse = edit.inverted();
        assert_eq!(inverse, TextDeltaEdit::insertion(5, " World"));
        assert_eq!(inverse.inverted(), edit);
    }
}
