use criterion::{criterion_group, criterion_main, Criterion};
use fietsat::{demo, AtMostOne, Config, Planner, Splr};
use rand::{rngs::StdRng, SeedableRng};

pub fn roster(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    let shape = demo::Shape {
        drivers: 80,
        routes: 12,
        density: 0.4,
    };
    let instance = demo::staffable(&mut rng, shape).unwrap();

    c.bench_function("staffable roster (pairwise) plan", |b| {
        let config = Config::default().with_at_most_one(AtMostOne::Pairwise);
        b.iter(|| Planner::new(config, Splr).plan(&instance).unwrap())
    });
    c.bench_function("staffable roster (sequential) plan", |b| {
        let config = Config::default().with_at_most_one(AtMostOne::Sequential);
        b.iter(|| Planner::new(config, Splr).plan(&instance).unwrap())
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = roster
}
criterion_main!(benches);
