use criterion::{criterion_group, criterion_main, Criterion};
use planar_index::{AxisRect, KdTree2D, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(amount: usize) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..amount)
        .map(|_| Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

fn construct_tree(points: &[Point<f64>]) -> KdTree2D<f64> {
    let mut tree = KdTree2D::new();
    for point in points {
        tree.insert(*point).unwrap();
    }
    tree
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = random_points(10_000);

    c.bench_function("construction (kdtree)", |b| {
        b.iter(|| construct_tree(&points))
    });

    let tree = construct_tree(&points);
    let query = AxisRect::new(0.3, 0.4, 0.5, 0.6).unwrap();

    c.bench_function("range (kdtree)", |b| b.iter(|| tree.range(&query)));

    c.bench_function("range (linear scan)", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|point| query.contains(point))
                .count()
        })
    });

    let target = Point::new(0.123, 0.456);

    c.bench_function("nearest (kdtree)", |b| b.iter(|| tree.nearest(target)));

    c.bench_function("nearest (linear scan)", |b| {
        b.iter(|| {
            points
                .iter()
                .map(|point| point.distance_squared(&target))
                .fold(f64::INFINITY, f64::min)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
