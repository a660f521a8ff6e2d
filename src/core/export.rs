//! Plain-text export of a brief, the format consumers paste elsewhere.

use crate::schema::brief::GeneratedOutput;
use crate::schema::scene::SceneInstance;

pub const CONCEPT_HEADER: &str = "1) Video Concept";
pub const BREAKDOWN_HEADER: &str = "2) Scene Breakdown";
pub const PROMPT_HEADER: &str = "3) Full Text-to-Video Prompt";
pub const ADD_ONS_HEADER: &str = "4) Optional Add-ons";

fn scene_block(scene: &SceneInstance) -> String {
    [
        format!("Scene {}:", scene.index),
        format!("- Setting: {}", scene.setting),
        format!("- Camera angle: {}", scene.camera_angle),
        format!("- Camera movement: {}", scene.camera_movement),
        format!("- Character actions: {}", scene.actions),
        format!("- Lighting: {}", scene.lighting),
        format!("- Colors: {}", scene.colors),
        format!("- Atmosphere: {}", scene.atmosphere),
        format!("- Important objects: {}", scene.important_objects),
    ]
    .join("\n")
}

/// Render the four-section export. Sections are separated by a blank line;
/// the add-on section only appears when at least one block exists.
pub fn render_copy_text(output: &GeneratedOutput) -> String {
    let concept = [
        CONCEPT_HEADER.to_string(),
        format!("Title: {}", output.title),
        format!("One-line: {}", output.one_line),
        format!("Mood & emotion: {}", output.mood),
        format!("Style: {}", output.style),
    ]
    .join("\n");

    let breakdown = format!(
        "{}\n{}",
        BREAKDOWN_HEADER,
        output
            .scenes
            .iter()
            .map(scene_block)
            .collect::<Vec<_>>()
            .join("\n\n")
    );

    let prompt = format!("{}\n{}", PROMPT_HEADER, output.full_prompt);

    let mut sections = vec![concept, breakdown, prompt];
    if output.has_add_ons() {
        // BTreeMap order is the fixed presentation order.
        let blocks: Vec<&str> = output.add_ons.values().map(String::as_str).collect();
        sections.push(format!("{}\n{}", ADD_ONS_HEADER, blocks.join("\n\n")));
    }
    sections.join("\n\n")
}
