//! Core type aliases and re-exports

pub use glam::{Mat4, Quat, Vec2, Vec3};

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;

/// Lift a ground-plane point `(x, z)` into world space at height 0.
#[inline]
pub fn ground_to_world(p: Vec2) -> Vec3 {
    Vec3::new(p.x, 0.0, p.y)
}

/// Project a world position onto the ground plane, dropping height.
#[inline]
pub fn world_to_ground(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.z)
}
