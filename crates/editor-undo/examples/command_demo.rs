//! Command/invoker walkthrough
//!
//! Runs a short editing session, then undoes and redoes it.
//! Set `RUST_LOG=editor_undo=debug` to see every apply/undo with the document content.

use editor_undo::{HistoryResult, Invoker, Operation};
use tracing_subscriber::EnvFilter;

fn main() -> editor_undo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut invoker = Invoker::new();
    println!("=== Command interface walkthrough ===\n");

    let starter = Operation::insert(invoker.document(), "Here is some good starter text!", None);
    invoker.submit(starter)?;
    println!("  insert        -> '{}'", invoker.text());

    invoker.submit(Operation::insert_at(13, "very "))?;
    println!("  insert at 13  -> '{}'", invoker.text());

    invoker.submit(Operation::delete(22, 8))?;
    println!("  delete 22..30 -> '{}'", invoker.text());

    invoker.submit(Operation::uppercase(13, 4))?;
    println!("  uppercase     -> '{}'\n", invoker.text());

    for _ in 0..4 {
        let result = invoker.undo()?;
        println!("  {result:?} -> '{}'", invoker.text());
    }

    println!();
    for _ in 0..5 {
        match invoker.redo()? {
            HistoryResult::NothingToRedo => println!("  No commands to redo."),
            result => println!("  {result:?} -> '{}'", invoker.text()),
        }
    }

    println!("\nFinal text: '{}'", invoker.text());
    Ok(())
}
