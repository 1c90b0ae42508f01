use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fietsat::{demo, AtMostOne, Encoder, Qualification, VariableIndexer};
use rand::{rngs::StdRng, SeedableRng};

pub fn encoding(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2020);
    let shape = demo::Shape {
        drivers: 400,
        routes: 60,
        density: 0.3,
    };
    let instance = demo::staffable(&mut rng, shape).unwrap();
    let indexer = VariableIndexer::build(&instance, Qualification::AtLeast);

    let mut group = c.benchmark_group("encode");
    for &strategy in [AtMostOne::Pairwise, AtMostOne::Sequential, AtMostOne::Auto].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", strategy)),
            &strategy,
            |b, &strategy| b.iter(|| Encoder::new(&indexer, strategy).encode(&instance)),
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = encoding
}
criterion_main!(benches);
