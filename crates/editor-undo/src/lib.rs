#![warn(missing_docs)]
//! Editor Undo - Headless Command/Invoker Undo-Redo Engine
//!
//! # Overview
//!
//! `editor-undo` applies reversible operations to a text document and keeps a linear
//! undo/redo history of them. It does not render anything; a frontend reads the document
//! text or subscribes to structured change deltas.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Invoker (submit / undo / redo, state)      │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  History (undo stack + redo stack)          │  ← Linear history
//! ├─────────────────────────────────────────────┤
//! │  Operation (Insert / Delete / Uppercase)    │  ← Reversible changes
//! ├─────────────────────────────────────────────┤
//! │  Document (Rope storage)                    │  ← Text storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use editor_undo::{HistoryResult, Invoker, Operation};
//!
//! let mut invoker = Invoker::with_text("Hello World");
//!
//! invoker.submit(Operation::uppercase(0, 5)).unwrap();
//! assert_eq!(invoker.text(), "HELLO World");
//!
//! invoker.submit(Operation::delete(5, 6)).unwrap();
//! assert_eq!(invoker.text(), "HELLO");
//!
//! invoker.undo().unwrap();
//! invoker.undo().unwrap();
//! assert_eq!(invoker.text(), "Hello World");
//!
//! // A new edit discards everything that could have been redone.
//! invoker.submit(Operation::insert_at(11, "!")).unwrap();
//! assert_eq!(invoker.redo().unwrap(), HistoryResult::NothingToRedo);
//! ```
//!
//! # Module Description
//!
//! - [`document`] - Rope-backed text buffer with bounds-checked primitives
//! - [`operation`] - Reversible operations and their state machine
//! - [`history`] - Undo/redo stacks with clean-point tracking
//! - [`invoker`] - The facade that ties document and history together
//! - [`delta`] - Structured description of each change
//! - [`state`] - State snapshots and change notifications
//!
//! # Unicode Support
//!
//! Offsets and lengths are counted in characters (Unicode scalar values). Upper-casing may
//! change the character count (`ß` becomes `SS`); undo restores the exact original text.

pub mod delta;
pub mod document;
pub mod error;
pub mod history;
pub mod invoker;
pub mod operation;
pub mod state;

pub use delta::{TextDelta, TextDeltaEdit};
pub use document::Document;
pub use error::{EditError, Result};
pub use history::History;
pub use invoker::{HistoryResult, Invoker};
pub use operation::{
    DeleteText, InsertText, Operation, OperationKind, OperationState, Reversible, UppercaseText,
};
pub use state::{DocumentState, StateChange, StateChangeCallback, StateChangeType, UndoRedoState};
