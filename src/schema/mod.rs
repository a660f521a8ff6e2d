//! Value types produced and consumed by the generation pipeline.

pub mod addon;
pub mod brief;
pub mod scene;
