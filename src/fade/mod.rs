//! Dual-fade render model.
//!
//! Visibility of a card fragment is the product of a camera-distance fade and
//! a radial fade toward the patch edge. The CPU functions here and
//! `shaders/card_fade.wgsl` evaluate the same formula; the patch keeps the
//! geometric inputs equal to those of its latest placement.

pub mod params;

pub use params::FadeParams;

use glam::{Vec2, Vec3};

use crate::core::types::world_to_ground;
use crate::math::smoothstep;

/// WGSL source for the per-fragment fade, for hosts that splice it into
/// their card material.
pub const CARD_FADE_WGSL: &str = include_str!("../../shaders/card_fade.wgsl");

/// Texture alpha below which a blade texel is discarded.
pub const DEFAULT_ALPHA_CUTOFF: f32 = 0.5;

/// Live fade inputs. Geometry changes only on rebuild; `camera` changes per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeModel {
    pub center: Vec2,
    pub outer_radius: f32,
    pub edge_feather: f32,
    pub fade_near: f32,
    pub fade_far: f32,
    pub camera: Vec3,
    pub alpha_cutoff: f32,
}

impl FadeModel {
    pub fn new(outer_radius: f32, edge_feather: f32, fade_near: f32, fade_far: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            outer_radius,
            edge_feather,
            fade_near,
            fade_far,
            camera: Vec3::ZERO,
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
        }
    }

    pub fn with_alpha_cutoff(mut self, alpha_cutoff: f32) -> Self {
        self.alpha_cutoff = alpha_cutoff;
        self
    }

    pub fn set_camera(&mut self, camera: Vec3) {
        self.camera = camera;
    }

    pub fn set_patch(&mut self, center: Vec2, outer_radius: f32, edge_feather: f32) {
        self.center = center;
        self.outer_radius = outer_radius;
        self.edge_feather = edge_feather;
    }

    /// Radius inside which the edge fade is exactly 1.
    pub fn edge_inner(&self) -> f32 {
        (self.outer_radius - self.edge_feather).max(0.0)
    }

    /// 1 at or inside `fade_near`, 0 at or beyond `fade_far`.
    pub fn camera_fade(&self, p: Vec3) -> f32 {
        1.0 - smoothstep(self.fade_near, self.fade_far, p.distance(self.camera))
    }

    /// Radial fade on the ground plane; height is ignored.
    pub fn edge_fade(&self, p: Vec3) -> f32 {
        let r = world_to_ground(p).distance(self.center);
        1.0 - smoothstep(self.edge_inner(), self.outer_radius, r)
    }

    /// Combined multiplier in [0, 1].
    pub fn visibility(&self, p: Vec3) -> f32 {
        self.camera_fade(p) * self.edge_fade(p)
    }

    /// Final alpha for a texel: cut out below `alpha_cutoff`, faded otherwise.
    pub fn fragment_alpha(&self, texture_alpha: f32, p: Vec3) -> f32 {
        if texture_alpha < self.alpha_cutoff {
            return 0.0;
        }
        texture_alpha * self.visibility(p)
    }

    /// Pack into the GPU uniform layout.
    pub fn gpu_params(&self) -> FadeParams {
        FadeParams {
            camera_pos: self.camera.to_array(),
            fade_near: self.fade_near,
            center: self.center.to_array(),
            outer_radius: self.outer_radius,
            edge_feather: self.edge_feather,
            fade_far: self.fade_far,
            alpha_cutoff: self.alpha_cutoff,
            _pad: [0.0; 2],
        }
    }
}
