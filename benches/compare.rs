use criterion::{Criterion, black_box, criterion_group, criterion_main};
use neartwo::NearestIndex;
use rand::prelude::*;
use rand::rngs::StdRng;

const NUM_POINTS: usize = 10_000;
const NUM_QUERIES: usize = 1_000;

fn rand_points(rng: &mut StdRng, count: usize) -> Vec<[f64; 2]> {
    (0..count)
        .map(|_| [rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0)])
        .collect()
}

fn benchmark_compare_build(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let uniform = rand_points(&mut rng, NUM_POINTS);

    // Points along a diagonal: heavy axis ties, worst case for the sort
    let mut diagonal = Vec::with_capacity(NUM_POINTS);
    for i in 0..NUM_POINTS {
        let v = (i as f64 / NUM_POINTS as f64) * 1000.0;
        diagonal.push([v, v]);
    }

    let mut group = c.benchmark_group("build");

    group.bench_function("uniform", |b| {
        b.iter(|| NearestIndex::new(black_box(uniform.clone())))
    });

    group.bench_function("diagonal", |b| {
        b.iter(|| NearestIndex::new(black_box(diagonal.clone())))
    });

    group.finish();
}

fn benchmark_compare_query(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let points = rand_points(&mut rng, NUM_POINTS);
    let queries = rand_points(&mut rng, NUM_QUERIES);

    // Indexing time is not part of the query comparison
    let uut = NearestIndex::new(points.clone());

    let mut group = c.benchmark_group("query");

    group.bench_function("kdtree", |b| {
        b.iter(|| {
            for &query in &queries {
                black_box(uut.find_nearest(black_box(query)));
            }
        })
    });

    group.bench_function("linear", |b| {
        b.iter(|| {
            for &query in &queries {
                black_box(NearestIndex::find_nearest_linear(black_box(query), &points));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_compare_build, benchmark_compare_query);
criterion_main!(benches);
