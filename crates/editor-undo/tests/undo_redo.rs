use editor_undo::{
    Document, EditError, HistoryResult, Invoker, Operation, OperationKind, OperationState,
};

#[test]
fn test_hello_world_insert_undo_redo() {
    let mut invoker = Invoker::new();

    let hello = Operation::insert(invoker.document(), "Hello", None);
    invoker.submit(hello).unwrap();
    assert_eq!(invoker.text(), "Hello");

    let world = Operation::insert(invoker.document(), " World", Some(5));
    invoker.submit(world).unwrap();
    assert_eq!(invoker.text(), "Hello World");

    invoker.undo().unwrap();
    assert_eq!(invoker.text(), "Hello");
    invoker.undo().unwrap();
    assert_eq!(invoker.text(), "");

    assert_eq!(
        invoker.redo().unwrap(),
        HistoryResult::Redone(OperationKind::Insert)
    );
    assert_eq!(invoker.text(), "Hello");
    assert!(invoker.can_redo());
}

#[test]
fn test_uppercase_and_undo() {
    let mut invoker = Invoker::with_text("Hello World");

    invoker.submit(Operation::uppercase(0, 5)).unwrap();
    assert_eq!(invoker.text(), "HELLO World");
    assert_eq!(invoker.peek_undo().unwrap().original_text(), Some("Hello"));

    assert_eq!(
        invoker.undo().unwrap(),
        HistoryResult::Undone(OperationKind::Uppercase)
    );
    assert_eq!(invoker.text(), "Hello World");
}

#[test]
fn test_delete_captures_text_and_undo_restores() {
    let mut invoker = Invoker::with_text("Hello World");

    invoker.submit(Operation::delete(5, 6)).unwrap();
    assert_eq!(invoker.text(), "Hello");
    assert_eq!(invoker.peek_undo().unwrap().deleted_text(), Some(" World"));

    invoker.undo().unwrap();
    assert_eq!(invoker.text(), "Hello World");
    assert_eq!(invoker.peek_redo().unwrap().deleted_text(), Some(" World"));
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut invoker = Invoker::with_text("keep");
    for _ in 0..3 {
        assert_eq!(invoker.undo().unwrap(), HistoryResult::NothingToUndo);
    }
    assert_eq!(invoker.text(), "keep");
    assert_eq!(invoker.version(), 0);
}

#[test]
fn test_new_edit_clears_redo() {
    let mut invoker = Invoker::new();
    invoker.submit(Operation::insert_at(0, "one")).unwrap();
    invoker.submit(Operation::insert_at(3, " two")).unwrap();
    invoker.undo().unwrap();
    assert!(invoker.can_redo());

    invoker.submit(Operation::insert_at(3, " three")).unwrap();
    assert!(!invoker.can_redo());
    assert_eq!(invoker.redo().unwrap(), HistoryResult::NothingToRedo);
    assert_eq!(invoker.text(), "one three");
}

#[test]
fn test_out_of_range_delete_leaves_document() {
    let mut invoker = Invoker::with_text("hi");

    let err = invoker.submit(Operation::delete(100, 5)).unwrap_err();
    assert_eq!(
        err,
        EditError::OutOfRange {
            start: 100,
            length: 5,
            char_count: 2,
        }
    );
    assert_eq!(invoker.text(), "hi");
    assert!(!invoker.can_undo());
    assert!(!err.is_fatal());
}

#[test]
fn test_out_of_range_insert_and_uppercase() {
    let mut invoker = Invoker::with_text("hi");
    assert!(matches!(
        invoker.submit(Operation::insert_at(3, "x")),
        Err(EditError::OutOfRange { .. })
    ));
    assert!(matches!(
        invoker.submit(Operation::uppercase(1, 2)),
        Err(EditError::OutOfRange { .. })
    ));
    assert_eq!(invoker.text(), "hi");
}

#[test]
fn test_undo_order_is_lifo() {
    let mut invoker = Invoker::new();
    invoker
        .submit_all([
            Operation::insert_at(0, "abc"),
            Operation::uppercase(1, 1),
            Operation::delete(0, 1),
        ])
        .unwrap();
    assert_eq!(invoker.text(), "Bc");

    assert_eq!(
        invoker.undo().unwrap(),
        HistoryResult::Undone(OperationKind::Delete)
    );
    assert_eq!(invoker.text(), "aBc");
    assert_eq!(
        invoker.undo().unwrap(),
        HistoryResult::Undone(OperationKind::Uppercase)
    );
    assert_eq!(invoker.text(), "abc");
    assert_eq!(
        invoker.undo().unwrap(),
        HistoryResult::Undone(OperationKind::Insert)
    );
    assert_eq!(invoker.text(), "");

    assert_eq!(
        invoker.redo().unwrap(),
        HistoryResult::Redone(OperationKind::Insert)
    );
    assert_eq!(
        invoker.redo().unwrap(),
        HistoryResult::Redone(OperationKind::Uppercase)
    );
    assert_eq!(
        invoker.redo().unwrap(),
        HistoryResult::Redone(OperationKind::Delete)
    );
    assert_eq!(invoker.text(), "Bc");
}

#[test]
fn test_starter_text_walkthrough() {
    let mut invoker = Invoker::new();

    let steps = [
        Operation::insert(invoker.document(), "Here is some good starter text!", None),
        Operation::insert_at(13, "very "),
        Operation::delete(22, 8),
        Operation::uppercase(13, 4),
    ];
    invoker.submit_all(steps).unwrap();
    let edited = invoker.text();
    assert_eq!(edited, "Here is some VERY good text!");

    for _ in 0..4 {
        assert!(invoker.undo().unwrap().is_change());
    }
    assert_eq!(invoker.text(), "");

    for _ in 0..4 {
        assert!(invoker.redo().unwrap().is_change());
    }
    assert_eq!(invoker.redo().unwrap(), HistoryResult::NothingToRedo);
    assert_eq!(invoker.text(), edited);
}

#[test]
fn test_multibyte_text_round_trip() {
    let mut invoker = Invoker::with_text("你好世界");
    invoker.submit(Operation::insert_at(2, "，straße，")).unwrap();
    invoker.submit(Operation::uppercase(3, 6)).unwrap();
    assert_eq!(invoker.text(), "你好，STRASSE，世界");
    invoker.submit(Operation::delete(0, 3)).unwrap();
    assert_eq!(invoker.text(), "STRASSE，世界");

    for _ in 0..3 {
        invoker.undo().unwrap();
    }
    assert_eq!(invoker.text(), "你好世界");
    for _ in 0..3 {
        invoker.redo().unwrap();
    }
    assert_eq!(invoker.text(), "STRASSE，世界");
}

#[test]
fn test_max_undo_limits_history() {
    let mut invoker = Invoker::new().with_max_undo(2);
    for ch in ["a", "b", "c"] {
        let op = Operation::insert(invoker.document(), ch, None);
        invoker.submit(op).unwrap();
    }
    assert_eq!(invoker.undo_depth(), 2);

    invoker.undo().unwrap();
    invoker.undo().unwrap();
    assert_eq!(invoker.undo().unwrap(), HistoryResult::NothingToUndo);
    assert_eq!(invoker.text(), "a");
}

#[test]
fn test_foreign_edit_aborts_session() {
    let mut invoker = Invoker::with_text("Hello World");
    invoker.submit(Operation::uppercase(0, 5)).unwrap();
    invoker.document_mut().insert("x", 2).unwrap();

    let err = invoker.undo().unwrap_err();
    assert!(err.is_fatal());
    assert!(invoker.is_aborted());
    assert_eq!(invoker.redo(), Err(EditError::SessionAborted));
    assert_eq!(invoker.text(), "HExLLO World");
}

#[test]
fn test_submit_already_applied_operation_is_rejected() {
    let mut invoker = Invoker::with_text("x");

    let mut scratch = Document::new();
    let mut op = Operation::insert_at(0, "abc");
    op.apply(&mut scratch).unwrap();

    let err = invoker.submit(op).unwrap_err();
    assert_eq!(
        err,
        EditError::InvalidState {
            kind: OperationKind::Insert,
            state: OperationState::Applied,
            action: "apply",
        }
    );
    assert!(!err.is_fatal());
    assert_eq!(invoker.text(), "x");
    assert_eq!(invoker.undo_depth(), 0);
    assert!(!invoker.is_aborted());
}
