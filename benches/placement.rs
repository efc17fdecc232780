use criterion::{criterion_group, criterion_main, Criterion, black_box};

use glam::{Vec2, Vec3};

use sward::math::Polygon2;
use sward::placement::{PlacementEngine, PlacementRequest};
use sward::{PatchConfig, VegetationPatch};

fn bench_rebuild_5000(c: &mut Criterion) {
    let mut engine = PlacementEngine::new();
    let req = PlacementRequest {
        seed: 1,
        center: Vec2::ZERO,
        outer_radius: 10.0,
        inner_radius: 0.0,
        count: 5000,
        exclusion: None,
    };

    c.bench_function("rebuild_5000", |b| {
        b.iter(|| engine.rebuild(black_box(&req)))
    });
}

fn bench_rebuild_with_pool(c: &mut Criterion) {
    let pool = Polygon2::rect(Vec2::new(-4.0, -2.5), Vec2::new(4.0, 2.5));
    let mut engine = PlacementEngine::new();
    let req = PlacementRequest {
        seed: 1,
        center: Vec2::ZERO,
        outer_radius: 10.0,
        inner_radius: 0.0,
        count: 5000,
        exclusion: Some(&pool),
    };

    c.bench_function("rebuild_5000_pool", |b| {
        b.iter(|| engine.rebuild(black_box(&req)))
    });
}

fn bench_rebuild_exhausted(c: &mut Criterion) {
    let cover = Polygon2::rect(Vec2::splat(-11.0), Vec2::splat(11.0));
    let mut engine = PlacementEngine::new();
    let req = PlacementRequest {
        seed: 1,
        center: Vec2::ZERO,
        outer_radius: 10.0,
        inner_radius: 0.0,
        count: 5000,
        exclusion: Some(&cover),
    };

    c.bench_function("rebuild_5000_exhausted", |b| {
        b.iter(|| engine.rebuild(black_box(&req)))
    });
}

fn bench_visibility(c: &mut Criterion) {
    let mut patch = VegetationPatch::new(PatchConfig::default()).unwrap();
    patch.ensure_built();
    patch.update_frame(Vec3::new(0.0, 1.7, -6.0));
    let points: Vec<Vec3> = patch.instances().iter()
        .map(|i| Vec3::new(i.position.x, 0.3, i.position.y))
        .collect();

    c.bench_function("visibility_per_instance", |b| {
        b.iter(|| {
            let fade = patch.fade();
            points.iter().map(|&p| fade.visibility(black_box(p))).sum::<f32>()
        })
    });
}

criterion_group!(
    benches,
    bench_rebuild_5000,
    bench_rebuild_with_pool,
    bench_rebuild_exhausted,
    bench_visibility,
);
criterion_main!(benches);
