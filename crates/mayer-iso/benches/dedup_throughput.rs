use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use mayer_graph::{all_diagrams, GeneratorOpts};
use mayer_iso::{DedupOpts, GraphOp, IdenticalFree, IsoFree};

fn dedup_bench(c: &mut Criterion) {
    let five = all_diagrams(5, 'f', &GeneratorOpts::default()).unwrap();
    let connected = all_diagrams(
        5,
        'f',
        &GeneratorOpts {
            connected_only: true,
            ..GeneratorOpts::default()
        },
    )
    .unwrap();

    c.bench_function("identical_free_5", |b| {
        let op = IdenticalFree::default();
        b.iter_batched(
            || five.clone(),
            |graphs| black_box(op.apply(graphs).unwrap()),
            BatchSize::LargeInput,
        );
    });

    c.bench_function("identical_free_5_parallel", |b| {
        let op = IdenticalFree::new(DedupOpts {
            parallel_chunk: Some(128),
            ..DedupOpts::default()
        });
        b.iter_batched(
            || five.clone(),
            |graphs| black_box(op.apply(graphs).unwrap()),
            BatchSize::LargeInput,
        );
    });

    c.bench_function("iso_free_5_connected", |b| {
        let op = IsoFree::default();
        b.iter_batched(
            || connected.clone(),
            |graphs| black_box(op.apply(graphs).unwrap()),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, dedup_bench);
criterion_main!(benches);
