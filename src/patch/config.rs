//! Patch configuration (user-facing, JSON-loadable).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::fade::DEFAULT_ALPHA_CUTOFF;
use crate::render::CardDims;

/// Geometry, density and fade settings for one vegetation patch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Patch radius in meters. Instances lie strictly inside it.
    pub outer_radius: f32,
    /// Hole radius in meters; 0 fills the whole disc.
    pub inner_radius: f32,
    /// Target number of crossed-card instances.
    pub count: usize,
    /// Placement seed.
    pub seed: u64,
    /// Camera distance at which cards begin fading.
    pub fade_near: f32,
    /// Camera distance at which cards are fully hidden.
    pub fade_far: f32,
    /// Width of the radial band at the patch edge that fades to zero.
    pub edge_feather: f32,
    /// Blade texture alpha below which a texel is discarded.
    pub alpha_cutoff: f32,
    pub card: CardDims,
    /// Move the fade center on `set_center` before the next rebuild.
    pub eager_center_tracking: bool,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            outer_radius: 12.0,
            inner_radius: 0.0,
            count: 4000,
            seed: 1,
            fade_near: 18.0,
            fade_far: 30.0,
            edge_feather: 2.0,
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
            card: CardDims::default(),
            eager_center_tracking: false,
        }
    }
}

impl PatchConfig {
    /// Reject settings no patch can be built from.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
            ("fade_near", self.fade_near),
            ("fade_far", self.fade_far),
            ("edge_feather", self.edge_feather),
            ("alpha_cutoff", self.alpha_cutoff),
            ("card.width", self.card.width),
            ("card.height", self.card.height),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::config(format!("{name} must be finite, got {value}")));
        }

        if self.outer_radius <= 0.0 {
            return Err(Error::config(format!(
                "outer_radius must be positive, got {}", self.outer_radius
            )));
        }
        if self.inner_radius < 0.0 || self.inner_radius >= self.outer_radius {
            return Err(Error::config(format!(
                "inner_radius must be in [0, {}), got {}", self.outer_radius, self.inner_radius
            )));
        }
        if self.count == 0 {
            return Err(Error::config("count must be positive"));
        }
        if self.fade_near >= self.fade_far {
            return Err(Error::config(format!(
                "fade_near ({}) must be below fade_far ({})", self.fade_near, self.fade_far
            )));
        }
        if self.edge_feather < 0.0 {
            return Err(Error::config(format!(
                "edge_feather must be non-negative, got {}", self.edge_feather
            )));
        }
        if self.card.width <= 0.0 || self.card.height <= 0.0 {
            return Err(Error::config("card dimensions must be positive"));
        }

        if self.edge_feather > self.outer_radius {
            log::warn!(
                "edge_feather {} exceeds outer_radius {}; the whole patch will fade radially",
                self.edge_feather, self.outer_radius
            );
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded patch config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
