//! Mathematical utilities: seeded randomness, polygons and fade curves

pub mod polygon;
pub mod rng;

pub use polygon::{point_in_polygon, Polygon2, MIN_POLYGON_POINTS};
pub use rng::PatchRng;

/// Cubic Hermite step matching WGSL/GLSL `smoothstep`.
///
/// Returns 0 at or below `edge0`, 1 at or above `edge1`. Coincident edges
/// degrade to a hard step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
