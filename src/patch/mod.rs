//! Vegetation patch: owns placement state and the fade model it feeds.
//!
//! Structural changes (center, exclusion polygon, seed) only mark the patch
//! dirty. `ensure_built` is the single Dirty -> Built transition: it resamples
//! every instance and, in the same call, moves the fade geometry to match, so
//! a caller can never observe instances and fade parameters from different
//! builds. Per-frame camera updates touch the fade model only.

pub mod config;

pub use config::PatchConfig;

use std::sync::Arc;

use glam::{Vec2, Vec3};

use crate::core::Result;
use crate::fade::{FadeModel, FadeParams};
use crate::math::Polygon2;
use crate::placement::{Instance, Placement, PlacementEngine, PlacementRequest};
use crate::render::{CardBatch, CardInstanceGpu, CardSink};

/// Whether the instance set matches the current center/polygon/seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildState {
    #[default]
    Dirty,
    Built,
}

/// Outcome of the most recent rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub placed: usize,
    pub requested: usize,
    pub attempts: usize,
}

impl BuildReport {
    pub fn is_partial(&self) -> bool {
        self.placed < self.requested
    }
}

impl From<&Placement> for BuildReport {
    fn from(p: &Placement) -> Self {
        Self { placed: p.placed(), requested: p.requested, attempts: p.attempts }
    }
}

/// Immutable view of a built patch, cheap to clone across threads.
#[derive(Clone, Debug)]
pub struct PatchSnapshot {
    pub instances: Arc<[Instance]>,
    pub fade: FadeParams,
}

/// A circular field of crossed vegetation cards around a movable center.
pub struct VegetationPatch {
    config: PatchConfig,
    center: Vec2,
    exclusion: Option<Polygon2>,
    state: BuildState,
    engine: PlacementEngine,
    instances: Arc<[Instance]>,
    report: BuildReport,
    fade: FadeModel,
}

impl VegetationPatch {
    /// Validate `config` and create an unbuilt patch centered at the origin.
    pub fn new(config: PatchConfig) -> Result<Self> {
        config.validate()?;
        let fade = FadeModel::new(
            config.outer_radius,
            config.edge_feather,
            config.fade_near,
            config.fade_far,
        )
        .with_alpha_cutoff(config.alpha_cutoff);

        Ok(Self {
            config,
            center: Vec2::ZERO,
            exclusion: None,
            state: BuildState::Dirty,
            engine: PlacementEngine::new(),
            instances: Arc::from(Vec::new()),
            report: BuildReport::default(),
            fade,
        })
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn exclusion(&self) -> Option<&Polygon2> {
        self.exclusion.as_ref()
    }

    /// Instances from the latest build. Empty before the first build.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Instances actually placed by the latest build; may be below `count`.
    pub fn placed_count(&self) -> usize {
        self.report.placed
    }

    pub fn last_report(&self) -> BuildReport {
        self.report
    }

    pub fn fade(&self) -> &FadeModel {
        &self.fade
    }

    /// Replace the exclusion region. `None` or fewer than three points clears it.
    pub fn set_exclusion_polygon(&mut self, points: Option<&[Vec2]>) {
        self.exclusion = points.and_then(|pts| Polygon2::try_new(pts.to_vec()));
        if points.is_some() && self.exclusion.is_none() {
            log::debug!("Exclusion polygon malformed; placing without exclusion");
        }
        self.state = BuildState::Dirty;
    }

    /// Move the patch. Resampling waits for `ensure_built`.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
        if self.config.eager_center_tracking {
            self.fade.center = center;
        }
        self.state = BuildState::Dirty;
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.state = BuildState::Dirty;
    }

    /// Per-frame hook: only the camera-fade input changes.
    pub fn update_frame(&mut self, camera: Vec3) {
        self.fade.set_camera(camera);
    }

    /// Rebuild if and only if dirty. Returns whether a rebuild ran.
    pub fn ensure_built(&mut self) -> bool {
        if self.state == BuildState::Built {
            return false;
        }

        let placement = self.engine.rebuild(&PlacementRequest {
            seed: self.config.seed,
            center: self.center,
            outer_radius: self.config.outer_radius,
            inner_radius: self.config.inner_radius,
            count: self.config.count,
            exclusion: self.exclusion.as_ref(),
        });

        self.report = BuildReport::from(&placement);
        self.instances = placement.instances.into();
        self.fade.set_patch(self.center, self.config.outer_radius, self.config.edge_feather);
        self.state = BuildState::Built;

        log::info!(
            "Vegetation patch built: {}/{} instances at ({:.2}, {:.2}), exclusion {}",
            self.report.placed,
            self.report.requested,
            self.center.x,
            self.center.y,
            if self.exclusion.is_some() { "on" } else { "off" },
        );
        true
    }

    /// GPU records for one batch of the current instance set.
    pub fn card_instances(&self, batch: CardBatch) -> Vec<CardInstanceGpu> {
        self.instances
            .iter()
            .map(|inst| CardInstanceGpu::new(inst, batch, self.config.card))
            .collect()
    }

    /// Push both card batches and the fade uniform to `sink`.
    pub fn sync(&self, sink: &mut impl CardSink) {
        for batch in CardBatch::ALL {
            sink.reserve_slots(batch, self.config.count);
            sink.upload_instances(batch, &self.card_instances(batch));
        }
        sink.upload_fade(&self.fade.gpu_params());
    }

    /// Per-frame upload: fade uniform only.
    pub fn sync_frame(&self, sink: &mut impl CardSink) {
        sink.upload_fade(&self.fade.gpu_params());
    }

    /// Rebuild if dirty and upload the result in one step. Returns whether a
    /// rebuild ran; a clean patch uploads nothing beyond the fade uniform.
    pub fn ensure_built_and_sync(&mut self, sink: &mut impl CardSink) -> bool {
        let rebuilt = self.ensure_built();
        if rebuilt {
            self.sync(sink);
        } else {
            self.sync_frame(sink);
        }
        rebuilt
    }

    pub fn snapshot(&self) -> PatchSnapshot {
        PatchSnapshot {
            instances: Arc::clone(&self.instances),
            fade: self.fade.gpu_params(),
        }
    }
}
