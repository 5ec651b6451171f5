//! Document Storage Layer
//!
//! A character-addressed text buffer backed by a [`Rope`].
//!
//! All offsets and lengths are counted in characters (Unicode scalar values), never bytes.
//! Every primitive validates its range before touching the rope, so a failed call leaves
//! the content unchanged.

use crate::error::{EditError, Result};
use ropey::Rope;
use std::ops::Range;

/// Mutable text buffer owned by an [`crate::Invoker`].
///
/// # Example
///
/// ```rust
/// use editor_undo::Document;
///
/// let mut doc = Document::from_text("Hello World");
/// let removed = doc.delete(5, 6).unwrap();
/// assert_eq!(removed, " World");
/// assert_eq!(doc.read(), "Hello");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document holding `text`
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Current content as an owned string
    pub fn read(&self) -> String {
        self.rope.to_string()
    }

    /// Total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total byte count (UTF-8)
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Whether the document is empty
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Read `length` characters starting at `start`.
    pub fn slice(&self, start: usize, length: usize) -> Result<String> {
        let range = self.checked_range(start, length)?;
        Ok(self.rope.slice(range).to_string())
    }

    /// Insert `text` at character offset `start` (`start == char_count()` appends).
    pub fn insert(&mut self, text: &str, start: usize) -> Result<()> {
        self.checked_range(start, 0)?;
        self.rope.insert(start, text);
        Ok(())
    }

    /// Remove `length` characters at `start`, returning the removed text.
    pub fn delete(&mut self, start: usize, length: usize) -> Result<String> {
        let range = self.checked_range(start, length)?;
        let removed = self.rope.slice(range.clone()).to_string();
        self.rope.remove(range);
        Ok(removed)
    }

    /// Upper-case `length` characters at `start`, returning the original text.
    ///
    /// Case mapping may change the character count (`ß` becomes `SS`).
    pub fn uppercase(&mut self, start: usize, length: usize) -> Result<String> {
        let original = self.slice(start, length)?;
        let upper = original.to_uppercase();
        self.replace(start, length, &upper)?;
        Ok(original)
    }

    /// Replace `length` characters at `start` with `text`, returning the removed text.
    pub fn replace(&mut self, start: usize, length: usize, text: &str) -> Result<String> {
        let range = self.checked_range(start, length)?;
        let removed = self.rope.slice(range.clone()).to_string();
        self.rope.remove(range);
        self.rope.insert(start, text);
        Ok(removed)
    }

    fn checked_range(&self, start: usize, length: usize) -> Result<Range<usize>> {
        let char_count = self.rope.len_chars();
        match start.checked_add(length) {
            Some(end) if end <= char_count => Ok(start..end),
            _ => Err(EditError::OutOfRange {
                start,
                length,
                char_count,
            }),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
