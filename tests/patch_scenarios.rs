//! End-to-end patch behavior through the public API.

use glam::{Vec2, Vec3};

use sward::core::Error;
use sward::math::point_in_polygon;
use sward::render::{CardBatch, RecordingSink};
use sward::{BuildState, PatchConfig, VegetationPatch};

fn scenario_config(seed: u64) -> PatchConfig {
    PatchConfig {
        outer_radius: 10.0,
        inner_radius: 0.0,
        count: 5000,
        seed,
        ..Default::default()
    }
}

fn built(config: PatchConfig) -> VegetationPatch {
    let mut patch = VegetationPatch::new(config).unwrap();
    patch.ensure_built();
    patch
}

#[test]
fn seed_one_fills_disc_reproducibly() {
    let a = built(scenario_config(1));
    assert_eq!(a.placed_count(), 5000);
    for inst in a.instances() {
        let d = inst.position.length();
        assert!(d >= 0.0 && d < 10.0);
    }

    let b = built(scenario_config(1));
    assert_eq!(a.instances().len(), b.instances().len());
    assert!(a.instances().iter().zip(b.instances()).all(|(x, y)| x.bits_eq(y)));

    let c = built(scenario_config(2));
    assert_eq!(c.placed_count(), 5000);
    assert!(!a.instances().iter().zip(c.instances()).all(|(x, y)| x.bits_eq(y)));
}

#[test]
fn pool_footprint_stays_empty() {
    let pool = [
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.5),
    ];
    let mut patch = VegetationPatch::new(scenario_config(1)).unwrap();
    patch.set_exclusion_polygon(Some(&pool));
    patch.ensure_built();
    assert_eq!(patch.placed_count(), 5000);
    for inst in patch.instances() {
        let p = inst.position;
        assert!(!point_in_polygon(p, &pool));
        assert!(p.x.abs() > 0.5 || p.y.abs() > 0.5, "instance at {p:?} inside pool");
    }
}

#[test]
fn moving_patch_with_pool_keeps_invariants() {
    let pool = [
        Vec2::new(2.0, 1.0),
        Vec2::new(7.0, 1.0),
        Vec2::new(7.0, 4.0),
        Vec2::new(2.0, 4.0),
    ];
    let config = PatchConfig { inner_radius: 1.5, ..scenario_config(11) };
    let mut patch = VegetationPatch::new(config).unwrap();
    patch.set_exclusion_polygon(Some(&pool));

    for step in 0..4 {
        let center = Vec2::new(step as f32 * 1.5, 2.0);
        patch.set_center(center);
        assert_eq!(patch.state(), BuildState::Dirty);
        patch.ensure_built();
        assert_eq!(patch.fade().center, center);

        for inst in patch.instances() {
            let d = inst.distance_to(center);
            assert!(d >= 1.5 && d < 10.0);
            assert!(!point_in_polygon(inst.position, &pool));
        }
    }
}

#[test]
fn covered_disc_terminates_with_partial_result() {
    // Leave a 0.2 m slot open: well under 1% of the disc.
    let cover = [
        Vec2::new(-12.0, -12.0),
        Vec2::new(12.0, -12.0),
        Vec2::new(12.0, 12.0),
        Vec2::new(-12.0, 12.0),
        Vec2::new(-12.0, 0.1),
        Vec2::new(0.0, 0.1),
        Vec2::new(0.0, -0.1),
        Vec2::new(-12.0, -0.1),
    ];
    let mut patch = VegetationPatch::new(scenario_config(5)).unwrap();
    patch.set_exclusion_polygon(Some(&cover));
    patch.ensure_built();
    let report = patch.last_report();
    assert!(report.is_partial());
    assert!(report.placed < 5000);
    assert_eq!(report.attempts, 5000 * 12);
    assert_eq!(patch.instances().len(), report.placed);
}

#[test]
fn fade_boundary_matches_sampled_disc() {
    let config = PatchConfig { edge_feather: 3.0, ..scenario_config(3) };
    let mut patch = built(config);
    patch.update_frame(Vec3::new(0.0, 1.5, 0.0));
    let fade = patch.fade();

    let at_feather = Vec3::new(7.0, 0.0, 0.0);
    assert_eq!(fade.edge_fade(at_feather), 1.0);
    assert_eq!(fade.visibility(at_feather), fade.camera_fade(at_feather));

    let at_edge = Vec3::new(0.0, 0.0, 10.0);
    assert_eq!(fade.edge_fade(at_edge), 0.0);

    // Every placed card base sits where the edge fade is still positive.
    for inst in patch.instances() {
        let p = Vec3::new(inst.position.x, 0.0, inst.position.y);
        assert!(fade.edge_fade(p) > 0.0 || inst.position.length() > 9.999);
    }
}

#[test]
fn frame_updates_only_touch_camera() {
    let mut patch = built(scenario_config(1));
    let mut sink = RecordingSink::new();
    patch.sync(&mut sink);
    let uploads = sink.instance_uploads;
    let first = patch.instances()[0];

    for frame in 0..30 {
        patch.update_frame(Vec3::new(frame as f32 * 0.1, 1.7, 0.0));
        patch.ensure_built_and_sync(&mut sink);
    }
    assert_eq!(sink.instance_uploads, uploads);
    assert!(first.bits_eq(&patch.instances()[0]));
    assert_eq!(sink.batch(CardBatch::Crossed).len(), 5000);
    let fade = sink.fade.unwrap();
    assert!((fade.camera_pos[0] - 2.9).abs() < 1e-5);
}

#[test]
fn config_errors_are_fatal() {
    for bad in [
        PatchConfig { outer_radius: 0.0, ..Default::default() },
        PatchConfig { inner_radius: 50.0, ..Default::default() },
        PatchConfig { count: 0, ..Default::default() },
        PatchConfig { fade_near: 40.0, fade_far: 10.0, ..Default::default() },
    ] {
        assert!(matches!(VegetationPatch::new(bad), Err(Error::InvalidConfig(_))));
    }
}

#[test]
fn snapshot_is_stable_across_rebuild() {
    let mut patch = built(scenario_config(1));
    let snap = patch.snapshot();
    patch.set_center(Vec2::new(100.0, 0.0));
    patch.ensure_built();

    assert_eq!(snap.fade.center, [0.0, 0.0]);
    assert!(snap.instances.iter().all(|i| i.position.length() < 10.0));
    assert_eq!(patch.snapshot().fade.center, [100.0, 0.0]);

    let handle = std::thread::spawn(move || snap.instances.len());
    assert_eq!(handle.join().unwrap(), 5000);
}
