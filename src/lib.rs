//! Cinematic Brief: deterministic text-to-video prompt generation.
//!
//! Turns a one-line idea into a structured brief (concept, scene breakdown,
//! assembled prompt, optional add-on blocks) using ordered keyword rules and
//! a fixed catalog of scene templates. No randomness, no I/O during generation.

pub mod core;
pub mod schema;

pub use crate::core::pipeline::{generate, BriefEngine};
pub use crate::schema::addon::{AddOnConfig, AddOnKind};
pub use crate::schema::brief::GeneratedOutput;
