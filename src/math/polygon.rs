//! Ground-plane polygons used as exclusion regions.
//!
//! Points are `Vec2(x, z)`. Polygons are assumed simple; containment on
//! self-intersecting input follows even-odd parity and is otherwise unspecified.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Minimum vertex count for a polygon to enclose any area.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Even-odd ray-casting containment test.
///
/// A ray from `p` towards +x is crossed against every edge; odd parity means
/// inside. Slices with fewer than three points contain nothing.
pub fn point_in_polygon(p: Vec2, points: &[Vec2]) -> bool {
    if points.len() < MIN_POLYGON_POINTS {
        return false;
    }

    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) {
            // Horizontal edges never straddle, but keep the divisor away from zero.
            let span = b.y - a.y;
            let span = if span.abs() < f32::MIN_POSITIVE {
                f32::MIN_POSITIVE.copysign(span)
            } else {
                span
            };
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / span;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Validated exclusion polygon with a cached bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Polygon2 {
    points: Vec<Vec2>,
    min: Vec2,
    max: Vec2,
}

impl Polygon2 {
    /// Build a polygon, or `None` when the input cannot bound a region
    /// (fewer than three points or non-finite coordinates).
    pub fn try_new(points: impl Into<Vec<Vec2>>) -> Option<Self> {
        let points = points.into();
        if points.len() < MIN_POLYGON_POINTS || points.iter().any(|p| !p.is_finite()) {
            return None;
        }
        let (min, max) = points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(lo, hi), &p| (lo.min(p), hi.max(p)),
        );
        Some(Self { points, min, max })
    }

    /// Axis-aligned rectangle from two opposite corners.
    pub fn rect(min: Vec2, max: Vec2) -> Self {
        let lo = min.min(max);
        let hi = min.max(max);
        Self {
            points: vec![lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y)],
            min: lo,
            max: hi,
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Bounding box as (min, max).
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.min, self.max)
    }

    /// Unsigned area (shoelace formula).
    pub fn area(&self) -> f32 {
        let n = self.points.len();
        let twice: f32 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() * 0.5
    }

    /// Even-odd containment with a bounding-box early out.
    pub fn contains(&self, p: Vec2) -> bool {
        if p.x < self.min.x || p.x > self.max.x || p.y < self.min.y || p.y > self.max.y {
            return false;
        }
        point_in_polygon(p, &self.points)
    }
}

impl TryFrom<Vec<Vec2>> for Polygon2 {
    type Error = String;

    fn try_from(points: Vec<Vec2>) -> Result<Self, Self::Error> {
        let len = points.len();
        Self::try_new(points)
            .ok_or_else(|| format!("polygon needs {MIN_POLYGON_POINTS}+ finite points, got {len}"))
    }
}

impl From<Polygon2> for Vec<Vec2> {
    fn from(poly: Polygon2) -> Self {
        poly.points
    }
}
