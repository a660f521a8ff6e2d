//! Full text-to-video prompt assembly.
//!
//! Downstream tools parse this text, so section order and line layout are
//! fixed: header, mood/style, guidance, one line per scene, closing notes,
//! with a blank line between sections.

use crate::schema::scene::{SceneInstance, SEPARATOR};

pub const GUIDANCE_LINE: &str =
    "Keep visuals consistent. Short, clear sentences. Focus on what the camera sees.";
pub const CLOSING_LINE: &str =
    "Final notes: consistent subject design, steady motion, no flicker, filmic grain, anamorphic bokeh.";

/// Compress one scene onto a single line.
pub fn scene_line(scene: &SceneInstance) -> String {
    format!(
        "Scene {}: {}. Camera: {}; movement: {}. Action: {}. Lighting: {}. Colors: {}. Atmosphere: {}. Objects: {}.",
        scene.index,
        scene.setting,
        scene.camera_angle,
        scene.camera_movement,
        scene.actions,
        scene.lighting,
        scene.colors,
        scene.atmosphere,
        scene.important_objects,
    )
}

pub fn assemble_prompt(title: &str, mood: &str, style: &str, scenes: &[SceneInstance]) -> String {
    let scene_lines = scenes.iter().map(scene_line).collect::<Vec<_>>().join("\n");

    [
        format!("{}{}cinematic text-to-video prompt", title, SEPARATOR),
        format!("Mood: {}. Style: {}.", mood, style),
        GUIDANCE_LINE.to_string(),
        scene_lines,
        CLOSING_LINE.to_string(),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scenes::{builtin_templates, compose_scenes};

    #[test]
    fn scene_line_layout() {
        let scenes = compose_scenes(&builtin_templates(), "Tide", 3);
        assert_eq!(
            scene_line(&scenes[1]),
            "Scene 2: Tide — Interior — Quiet Space. Camera: medium over-the-shoulder; \
             movement: subtle handheld drift. Action: hands interact with key object. \
             Lighting: single source window light. Colors: neutral base with soft highlights. \
             Atmosphere: hushed, intimate. Objects: photograph, letter, small relic."
        );
    }

    #[test]
    fn sections_in_fixed_order() {
        let scenes = compose_scenes(&builtin_templates(), "Tide", 4);
        let prompt = assemble_prompt("Tide", "warm, hopeful, gentle", "naturalistic", &scenes);
        let sections: Vec<&str> = prompt.split("\n\n").collect();

        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0], "Tide — cinematic text-to-video prompt");
        assert_eq!(sections[1], "Mood: warm, hopeful, gentle. Style: naturalistic.");
        assert_eq!(sections[2], GUIDANCE_LINE);
        assert_eq!(sections[3].lines().count(), 4);
        assert!(sections[3].lines().all(|l| l.starts_with("Scene ")));
        assert_eq!(sections[4], CLOSING_LINE);
    }
}
