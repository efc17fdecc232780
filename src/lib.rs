//! Sward - procedural vegetation card patches
//!
//! Places crossed-card blade instances over a disc around a movable center,
//! skipping an exclusion polygon, and fades them by camera distance and by
//! proximity to the patch edge.

pub mod core;
pub mod math;
pub mod placement;
pub mod fade;
pub mod render;
pub mod patch;
pub mod texture;

pub use patch::{BuildReport, BuildState, PatchConfig, PatchSnapshot, VegetationPatch};
