use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use editor_undo::{Invoker, Operation};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (editor-undo benchmark line)\n"
        ));
    }
    out.pop();
    out
}

fn random_operations(invoker: &Invoker, count: usize, seed: u64) -> Vec<Operation> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Every operation keeps the length unchanged or grows it, so offsets stay valid.
    let len = invoker.document().char_count();
    (0..count)
        .map(|i| {
            let start = rng.gen_range(0..len.saturating_sub(8).max(1));
            if i % 2 == 0 {
                Operation::insert_at(start, "xy")
            } else {
                Operation::uppercase(start, 8)
            }
        })
        .collect()
}

fn bench_typing_in_middle(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("typing_middle/100_inserts", |b| {
        b.iter_batched(
            || Invoker::with_text(&text),
            |mut invoker| {
                let mut offset = invoker.document().char_count() / 2;
                for _ in 0..100 {
                    invoker.submit(Operation::insert_at(offset, "x")).unwrap();
                    offset += 1;
                }
                black_box(invoker.undo_depth());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_undo_redo_cycle(c: &mut Criterion) {
    let text = large_text(10_000);
    c.bench_function("undo_redo/1000_random_ops", |b| {
        b.iter_batched(
            || {
                let mut invoker = Invoker::with_text(&text);
                let ops = random_operations(&invoker, 1_000, 42);
                invoker.submit_all(ops).unwrap();
                invoker
            },
            |mut invoker| {
                while invoker.undo().unwrap().is_change() {}
                while invoker.redo().unwrap().is_change() {}
                black_box(invoker.document().char_count());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_typing_in_middle, bench_undo_redo_cycle);
criterion_main!(benches);
