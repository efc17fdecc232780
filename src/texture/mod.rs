//! Procedural blade cutout texture.
//!
//! Draws tapered, slightly curved strokes rising from the bottom edge onto a
//! transparent canvas. Strokes wrap horizontally so the texture tiles along
//! a card's width. Only the statistical look matters; any authored texture
//! with a similar alpha coverage can replace it.

use std::path::Path;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::math::PatchRng;

/// Parameters for `generate_blade_texture`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BladeTextureDesc {
    /// Width and height in texels.
    pub size: u32,
    pub blade_count: u32,
    pub seed: u64,
    /// Linear RGB at the blade root.
    pub base_color: [f32; 3],
    /// Linear RGB at the blade tip.
    pub tip_color: [f32; 3],
}

impl Default for BladeTextureDesc {
    fn default() -> Self {
        Self {
            size: 128,
            blade_count: 48,
            seed: 7,
            base_color: [0.10, 0.28, 0.06],
            tip_color: [0.55, 0.70, 0.25],
        }
    }
}

fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Render the blade pattern. Deterministic for a given `desc`.
pub fn generate_blade_texture(desc: &BladeTextureDesc) -> RgbaImage {
    let size = desc.size.max(1);
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let mut rng = PatchRng::new(desc.seed);
    let s = size as f32;
    let px_scale = s / 64.0;

    for _ in 0..desc.blade_count {
        let root_x = rng.range(0.0, s);
        let height = rng.range(0.4, 0.95) * s;
        let half_width = rng.range(1.0, 3.0) * px_scale;
        let lean = rng.range(-0.25, 0.25) * height;
        let shade = rng.range(0.8, 1.1);

        let rows = height.ceil() as u32;
        for step in 0..rows {
            let t = step as f32 / height;
            if t >= 1.0 {
                break;
            }
            let y = size - 1 - step;
            let cx = root_x + lean * t * t;
            let hw = half_width * (1.0 - t);

            let color: [f32; 3] = std::array::from_fn(|i| {
                let c = desc.base_color[i] + (desc.tip_color[i] - desc.base_color[i]) * t;
                c * shade
            });

            let x0 = (cx - hw - 1.0).floor() as i64;
            let x1 = (cx + hw + 1.0).ceil() as i64;
            for x in x0..=x1 {
                let dx = (x as f32 + 0.5 - cx).abs();
                // one texel of antialiasing outside the core
                let a = (hw + 0.5 - dx).clamp(0.0, 1.0);
                if a <= 0.0 {
                    continue;
                }
                let wx = x.rem_euclid(size as i64) as u32;
                let px = img.get_pixel_mut(wx, y);
                let alpha = to_u8(a);
                if alpha > px.0[3] {
                    *px = Rgba([to_u8(color[0]), to_u8(color[1]), to_u8(color[2]), alpha]);
                }
            }
        }
    }

    log::debug!(
        "Generated {}x{} blade texture ({} blades, coverage {:.2})",
        size, size, desc.blade_count, coverage(&img, 0.5)
    );
    img
}

/// Fraction of texels whose alpha passes `cutoff` (0-1).
pub fn coverage(img: &RgbaImage, cutoff: f32) -> f32 {
    let total = img.width() as usize * img.height() as usize;
    if total == 0 {
        return 0.0;
    }
    let threshold = cutoff.clamp(0.0, 1.0) * 255.0;
    let passing = img.pixels().filter(|p| p.0[3] as f32 >= threshold).count();
    passing as f32 / total as f32
}

/// Generate and write the texture as PNG.
pub fn save_blade_texture(desc: &BladeTextureDesc, path: impl AsRef<Path>) -> Result<()> {
    let img = generate_blade_texture(desc);
    img.save(path.as_ref())?;
    log::info!("Wrote blade texture to {}", path.as_ref().display());
    Ok(())
}
