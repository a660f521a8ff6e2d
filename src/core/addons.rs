//! Optional add-on blocks: voiceover, dialogue, thumbnail, captions and music.
//!
//! Every block is a heading line followed by body lines. Only the title and
//! its slug are substituted; everything else is literal.

use std::collections::BTreeMap;

use crate::core::normalize::NormalizedTopic;
use crate::schema::addon::{AddOnConfig, AddOnKind};

/// Heading line that opens a block.
pub fn heading(kind: AddOnKind) -> &'static str {
    match kind {
        AddOnKind::Voiceover => "Voiceover (calm, intimate, present):",
        AddOnKind::Dialogue => "Dialogue:",
        AddOnKind::Thumbnail => "Thumbnail prompt:",
        AddOnKind::CaptionsTags => "Captions & tags:",
        AddOnKind::Music => "Music & sound mood:",
    }
}

fn body(kind: AddOnKind, topic: &NormalizedTopic) -> Vec<String> {
    match kind {
        AddOnKind::Voiceover => vec![
            format!("{}. I walk into the light. The world holds its breath.", topic.title),
            "Between what was and what will be, I choose to move.".to_string(),
        ],
        AddOnKind::Dialogue => vec![
            r#"A: "Do you hear it?""#.to_string(),
            r#"B: "Only when it's quiet.""#.to_string(),
            r#"A: "Then listen.""#.to_string(),
        ],
        AddOnKind::Thumbnail => vec![format!(
            "{} hero shot, strong silhouette, dominant focal point, shallow depth, soft bloom, \
             high contrast, clean negative space, cinematic color grade",
            topic.title
        )],
        AddOnKind::CaptionsTags => vec![format!(
            "#cinematic #texttovideo #{} #filmlook #shortfilm",
            topic.slug()
        )],
        AddOnKind::Music => vec![
            "Sparse piano, warm pads, low cello; subtle field sounds (wind, fabric, breath)"
                .to_string(),
        ],
    }
}

/// Render a single block.
pub fn compose_block(kind: AddOnKind, topic: &NormalizedTopic) -> String {
    let mut lines = vec![heading(kind).to_string()];
    lines.extend(body(kind, topic));
    lines.join("\n")
}

/// Blocks for every enabled flag and nothing else.
pub fn compose_add_ons(topic: &NormalizedTopic, config: &AddOnConfig) -> BTreeMap<AddOnKind, String> {
    config
        .enabled()
        .map(|kind| (kind, compose_block(kind, topic)))
        .collect()
}
