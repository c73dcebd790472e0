use criterion::{criterion_group, criterion_main, Criterion};

use ip_enumeration::{CancellationToken, Direction, Sequential, Staggered};

// Pull the first `count` public addresses of a fresh enumeration.
fn drain_sequential(count: usize) -> usize {
    let sweep = Sequential::new(Direction::Forward, None, CancellationToken::new()).unwrap();
    sweep.take(count).count()
}

fn drain_staggered(count: usize) -> usize {
    let sweep = Staggered::new(Direction::Forward, None, CancellationToken::new()).unwrap();
    sweep.take(count).count()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("sequential_first_100k", |b| {
        b.iter(|| drain_sequential(100_000))
    });
    c.bench_function("staggered_first_100k", |b| {
        b.iter(|| drain_staggered(100_000))
    });
    // Starting inside 10.0.0.0/8 exercises the O(1) block jump.
    c.bench_function("sequential_jump_private_block", |b| {
        b.iter(|| {
            let sweep =
                Sequential::new(Direction::Forward, Some("10.0.0.0"), CancellationToken::new())
                    .unwrap();
            sweep.take(1).count()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
