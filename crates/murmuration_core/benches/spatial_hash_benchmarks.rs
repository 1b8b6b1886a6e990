use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec2;
use murmuration_core::space::Space;
use murmuration_core::spatial_hash::SpatialHash;
use murmuration_data::{AgentId, AgentKind};

fn grid_positions() -> Vec<(f64, f64)> {
    (0..1000)
        .map(|i| {
            let x = (i % 100) as f64 * 10.0;
            let y = (i / 100) as f64 * 90.0;
            (x, y)
        })
        .collect()
}

fn bench_spatial_hash_build(c: &mut Criterion) {
    let positions = grid_positions();

    c.bench_function("spatial_hash_insert_1000", |b| {
        b.iter(|| {
            let mut spatial = SpatialHash::new(25.0, 1000.0, 900.0, true);
            for (i, &(x, y)) in positions.iter().enumerate() {
                spatial.insert(AgentId(i as u64), x, y);
            }
            black_box(spatial)
        })
    });
}

fn bench_spatial_hash_query(c: &mut Criterion) {
    let mut spatial = SpatialHash::new(25.0, 1000.0, 900.0, true);
    for (i, &(x, y)) in grid_positions().iter().enumerate() {
        spatial.insert(AgentId(i as u64), x, y);
    }

    c.bench_function("spatial_hash_query_20_radius", |b| {
        let mut results = Vec::new();
        b.iter(|| {
            spatial.query_into(500.0, 450.0, 20.0, &mut results);
            black_box(results.len())
        })
    });

    c.bench_function("spatial_hash_query_wrapped_corner", |b| {
        let mut results = Vec::new();
        b.iter(|| {
            spatial.query_into(2.0, 2.0, 35.0, &mut results);
            black_box(results.len())
        })
    });
}

fn bench_neighbors_grid_vs_linear(c: &mut Criterion) {
    let mut space = Space::new(1000.0, 900.0, true);
    for (i, &(x, y)) in grid_positions().iter().enumerate() {
        space
            .place(AgentId(i as u64), AgentKind::FlockMember, DVec2::new(x, y))
            .ok();
    }
    let probe = DVec2::new(500.0, 450.0);

    c.bench_function("neighbors_within_grid", |b| {
        b.iter(|| black_box(space.neighbors_within(probe, 20.0, false).len()))
    });
    c.bench_function("neighbors_within_linear", |b| {
        b.iter(|| black_box(space.neighbors_within_linear(probe, 20.0, false).len()))
    });
}

criterion_group!(
    benches,
    bench_spatial_hash_build,
    bench_spatial_hash_query,
    bench_neighbors_grid_vs_linear
);
criterion_main!(benches);
