//! Generation engine: normalization, classification, composition and assembly.

pub mod addons;
pub mod catalog;
pub mod classify;
pub mod export;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod scenes;
