//! Renderer-facing types: crossed-card transforms and the sink trait the
//! host renderer implements.

pub mod cards;
pub mod sink;

pub use cards::{card_transform, CardBatch, CardDims, CardInstanceGpu};
pub use sink::{CardSink, RecordingSink};
