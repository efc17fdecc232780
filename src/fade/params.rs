//! GPU-ready fade uniform (48 bytes, 16-byte aligned).

use bytemuck::{Pod, Zeroable};

/// GPU uniform for card fading. Must match `CardFadeParams` in card_fade.wgsl.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FadeParams {
    pub camera_pos: [f32; 3],
    pub fade_near: f32,
    // -- 16 bytes --
    /// Patch center on the ground plane `(x, z)`.
    pub center: [f32; 2],
    pub outer_radius: f32,
    pub edge_feather: f32,
    // -- 16 bytes --
    pub fade_far: f32,
    pub alpha_cutoff: f32,
    pub _pad: [f32; 2],
    // -- 16 bytes --
    // Total: 48 bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_params_size() {
        assert_eq!(std::mem::size_of::<FadeParams>(), 48);
    }

    #[test]
    fn test_fade_params_alignment() {
        assert_eq!(std::mem::size_of::<FadeParams>() % 16, 0);
    }

    #[test]
    fn test_bytemuck_cast() {
        let p = FadeParams::zeroed();
        let bytes = bytemuck::bytes_of(&p);
        assert_eq!(bytes.len(), 48);
    }

    #[test]
    fn test_field_offsets() {
        assert_eq!(std::mem::offset_of!(FadeParams, center), 16);
        assert_eq!(std::mem::offset_of!(FadeParams, fade_far), 32);
    }
}
