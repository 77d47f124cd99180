//! Criterion microbenches for layout generation.
//!
//! - `generate`: full tree construction plus the leaf walk, per map size.
//! - `choose_split`: the hot per-node decision in isolation.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roomtree::partition::choose_split;
use roomtree::{Params, PartitionTree, Rect};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for (name, w, h) in [("dungeon_100x80", 100, 80), ("campus_400x300", 400, 300)] {
        group.bench_function(BenchmarkId::new("generate", name), |b| {
            let mut seed = 0u64;
            b.iter_batched(
                || {
                    seed = seed.wrapping_add(1);
                    (
                        PartitionTree::new(Rect::new(0, 0, w, h), Params::default()),
                        StdRng::seed_from_u64(seed),
                    )
                },
                |(mut tree, mut rng)| {
                    let mut rooms = 0usize;
                    tree.generate(&mut rng, |_| rooms += 1);
                    rooms
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function(BenchmarkId::new("choose_split", "24x23"), |b| {
        let params = Params::default();
        let rect = Rect::new(0, 0, 24, 23);
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| choose_split(rect, &params, &mut rng))
    });
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
