//! Placement engine: seeded, area-uniform rejection sampling of vegetation
//! instances over a disc or annulus, minus an optional exclusion polygon.
//!
//! Each rebuild reseeds the engine's own generator, so identical requests
//! always produce identical instance sequences. Cost is bounded by
//! `count * RETRY_FACTOR` candidate draws; running out of attempts yields a
//! partial placement rather than an error.

pub mod instance;

pub use instance::{Instance, HEIGHT_SCALE_RANGE};

use glam::Vec2;

use crate::math::{PatchRng, Polygon2};

/// Candidate draws allowed per requested instance.
pub const RETRY_FACTOR: usize = 12;

/// Inputs for one structural rebuild.
#[derive(Clone, Copy, Debug)]
pub struct PlacementRequest<'a> {
    pub seed: u64,
    pub center: Vec2,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub count: usize,
    pub exclusion: Option<&'a Polygon2>,
}

impl PlacementRequest<'_> {
    /// Maximum number of candidates drawn before giving up.
    pub fn attempt_budget(&self) -> usize {
        self.count.saturating_mul(RETRY_FACTOR)
    }
}

/// Result of a rebuild: the accepted instances plus bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct Placement {
    pub instances: Vec<Instance>,
    pub requested: usize,
    /// Candidates drawn, accepted or not.
    pub attempts: usize,
}

impl Placement {
    pub fn placed(&self) -> usize {
        self.instances.len()
    }

    /// True when the attempt budget ran out before `requested` was reached.
    pub fn is_partial(&self) -> bool {
        self.instances.len() < self.requested
    }
}

/// Owns the generator used for placement. Never touches ambient randomness.
#[derive(Clone, Debug)]
pub struct PlacementEngine {
    rng: PatchRng,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self { rng: PatchRng::new(0) }
    }

    /// Resample every instance for `req`.
    ///
    /// Per candidate the draw order is angle then radius; per accepted
    /// instance it is yaw then height scale.
    pub fn rebuild(&mut self, req: &PlacementRequest<'_>) -> Placement {
        self.rng.reseed(req.seed);

        let budget = req.attempt_budget();
        let mut instances = Vec::with_capacity(req.count);
        let mut attempts = 0;

        while attempts < budget && instances.len() < req.count {
            attempts += 1;

            let angle = self.rng.angle();
            // sqrt keeps density uniform per unit area
            let radius = req.outer_radius * self.rng.next_f32().sqrt();
            if radius < req.inner_radius {
                continue;
            }

            let position = req.center + Vec2::new(angle.cos(), angle.sin()) * radius;

            // Re-measure: rounding in cos/sin can push a point across either ring.
            let dist = position.distance(req.center);
            if dist < req.inner_radius || dist >= req.outer_radius {
                continue;
            }

            if req.exclusion.is_some_and(|poly| poly.contains(position)) {
                continue;
            }

            let yaw = self.rng.angle();
            let height_scale = self.rng.range(HEIGHT_SCALE_RANGE.0, HEIGHT_SCALE_RANGE.1);
            instances.push(Instance::new(position, yaw, height_scale));
        }

        let placement = Placement { instances, requested: req.count, attempts };

        if placement.is_partial() {
            log::warn!(
                "Placement budget exhausted: {}/{} instances after {} attempts (seed {})",
                placement.placed(), req.count, attempts, req.seed
            );
        } else {
            log::debug!(
                "Placed {} instances in {} attempts (seed {}, r {:.2}..{:.2})",
                placement.placed(), attempts, req.seed, req.inner_radius, req.outer_radius
            );
        }

        placement
    }
}
