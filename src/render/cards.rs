//! Crossed-card instance transforms.

use std::f32::consts::FRAC_PI_2;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::types::ground_to_world;
use crate::placement::Instance;

/// Which of the two crossed batches a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardBatch {
    /// Card at the instance yaw.
    Primary,
    /// Card at the instance yaw plus a quarter turn.
    Crossed,
}

impl CardBatch {
    pub const ALL: [CardBatch; 2] = [CardBatch::Primary, CardBatch::Crossed];

    /// Extra yaw applied on top of the instance yaw.
    pub fn yaw_offset(self) -> f32 {
        match self {
            CardBatch::Primary => 0.0,
            CardBatch::Crossed => FRAC_PI_2,
        }
    }
}

/// Unscaled card quad size in meters. The quad's pivot is its bottom center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDims {
    pub width: f32,
    pub height: f32,
}

impl Default for CardDims {
    fn default() -> Self {
        Self { width: 0.6, height: 0.5 }
    }
}

/// Model matrix for one card: translate · rotate(Y) · scale.
pub fn card_transform(instance: &Instance, batch: CardBatch, dims: CardDims) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::new(dims.width, dims.height * instance.height_scale, 1.0),
        Quat::from_rotation_y(instance.yaw + batch.yaw_offset()),
        ground_to_world(instance.position),
    )
}

/// Per-instance GPU record (64 bytes, column-major model matrix).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CardInstanceGpu {
    pub model: [[f32; 4]; 4],
}

impl CardInstanceGpu {
    pub fn new(instance: &Instance, batch: CardBatch, dims: CardDims) -> Self {
        Self { model: card_transform(instance, batch, dims).to_cols_array_2d() }
    }
}
