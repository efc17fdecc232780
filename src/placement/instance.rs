//! Placed vegetation instances.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Height scale sub-range drawn for every accepted instance.
pub const HEIGHT_SCALE_RANGE: (f32, f32) = (0.75, 1.25);

/// One slot of crossed cards. Both cards share position and height scale;
/// the second is rotated a quarter turn from `yaw`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Ground-plane position `(x, z)`.
    pub position: Vec2,
    /// Rotation about +Y in radians, [0, TAU).
    pub yaw: f32,
    pub height_scale: f32,
}

impl Instance {
    pub fn new(position: Vec2, yaw: f32, height_scale: f32) -> Self {
        Self { position, yaw, height_scale }
    }

    /// Ground-plane distance from `center`.
    pub fn distance_to(&self, center: Vec2) -> f32 {
        self.position.distance(center)
    }

    /// Bitwise comparison, for reproducibility checks.
    pub fn bits_eq(&self, other: &Instance) -> bool {
        self.position.x.to_bits() == other.position.x.to_bits()
            && self.position.y.to_bits() == other.position.y.to_bits()
            && self.yaw.to_bits() == other.yaw.to_bits()
            && self.height_scale.to_bits() == other.height_scale.to_bits()
    }
}
