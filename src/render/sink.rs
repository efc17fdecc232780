//! Seam to the host renderer.

use std::collections::HashMap;

use crate::fade::FadeParams;
use super::cards::{CardBatch, CardInstanceGpu};

/// Anything that can draw two crossed-card batches with the dual fade.
///
/// A host implements this over its own instance buffers and material
/// uniforms; sward never issues draw calls itself.
pub trait CardSink {
    /// Make room for `capacity` transform slots in `batch`.
    fn reserve_slots(&mut self, batch: CardBatch, capacity: usize);

    /// Replace the live instances of `batch`.
    fn upload_instances(&mut self, batch: CardBatch, instances: &[CardInstanceGpu]);

    /// Replace the fade uniform used by every card fragment.
    fn upload_fade(&mut self, params: &FadeParams);
}

/// In-memory sink that records the last upload per batch.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub capacity: HashMap<CardBatch, usize>,
    pub batches: HashMap<CardBatch, Vec<CardInstanceGpu>>,
    pub fade: Option<FadeParams>,
    pub instance_uploads: usize,
    pub fade_uploads: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batch(&self, batch: CardBatch) -> &[CardInstanceGpu] {
        self.batches.get(&batch).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl CardSink for RecordingSink {
    fn reserve_slots(&mut self, batch: CardBatch, capacity: usize) {
        self.capacity.insert(batch, capacity);
    }

    fn upload_instances(&mut self, batch: CardBatch, instances: &[CardInstanceGpu]) {
        self.batches.insert(batch, instances.to_vec());
        self.instance_uploads += 1;
    }

    fn upload_fade(&mut self, params: &FadeParams) {
        self.fade = Some(*params);
        self.fade_uploads += 1;
    }
}
