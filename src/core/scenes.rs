//! Scene composition: cycle a fixed template catalog to fill a scene count.

use crate::schema::scene::{SceneInstance, SceneTemplate};

pub const MIN_SCENES: usize = 3;
pub const MAX_SCENES: usize = 10;
pub const DEFAULT_SCENE_COUNT: usize = 5;

/// Clamp any requested scene count into `MIN_SCENES..=MAX_SCENES`.
pub fn clamp_scene_count(requested: i64) -> usize {
    requested.clamp(MIN_SCENES as i64, MAX_SCENES as i64) as usize
}

/// Produce `count` scenes; scene `i` (1-based) uses template `(i - 1) % len`.
///
/// An empty catalog yields no scenes. `Catalog` validation rejects empty
/// scene lists, so this only happens with hand-built template slices.
pub fn compose_scenes(templates: &[SceneTemplate], title: &str, count: usize) -> Vec<SceneInstance> {
    if templates.is_empty() {
        return Vec::new();
    }
    (1..=count)
        .map(|index| templates[(index - 1) % templates.len()].instantiate(index, title))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn template(
    setting: &str,
    camera_angle: &str,
    camera_movement: &str,
    actions: &str,
    lighting: &str,
    colors: &str,
    atmosphere: &str,
    important_objects: &str,
) -> SceneTemplate {
    SceneTemplate {
        setting: setting.to_string(),
        camera_angle: camera_angle.to_string(),
        camera_movement: camera_movement.to_string(),
        actions: actions.to_string(),
        lighting: lighting.to_string(),
        colors: colors.to_string(),
        atmosphere: atmosphere.to_string(),
        important_objects: important_objects.to_string(),
    }
}

/// The five built-in scene templates, in cycling order.
pub fn builtin_templates() -> Vec<SceneTemplate> {
    vec![
        template(
            "Exterior — Golden Hour",
            "wide establishing shot",
            "slow forward dolly",
            "subject enters frame with purpose",
            "soft, warm rim light, long shadows",
            "amber, teal accents",
            "dust motes, gentle breeze",
            "distant landmark, path leading in",
        ),
        template(
            "Interior — Quiet Space",
            "medium over-the-shoulder",
            "subtle handheld drift",
            "hands interact with key object",
            "single source window light",
            "neutral base with soft highlights",
            "hushed, intimate",
            "photograph, letter, small relic",
        ),
        template(
            "Mid-Action",
            "tracking low angle",
            "dynamic lateral slide",
            "decisive movement, reveal of scale",
            "contrast with motivated practicals",
            "deep blues, sharp whites",
            "energy, motion blur hints",
            "moving vehicle, doorway, horizon",
        ),
        template(
            "Intimate Close",
            "close-up profile",
            "slow arc to front",
            "micro expressions shift, breath visible",
            "soft key, delicate catchlight",
            "skin tones, gentle desaturation",
            "quiet tension, time slows",
            "eyes, fingertips, fabric texture",
        ),
        template(
            "Climax / Reveal",
            "high wide tilt down",
            "push-in to stillness",
            "revelation held in silence",
            "cool ambient, warm highlight contrast",
            "cool base with warm focal point",
            "air shimmers, particles rise",
            "central symbol, destination, sky",
        ),
    ]
}
