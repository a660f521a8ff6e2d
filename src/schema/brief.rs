use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::addon::AddOnKind;
use super::scene::SceneInstance;

/// A complete generated brief. Built fresh on every generation call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOutput {
    pub title: String,
    pub one_line: String,
    pub mood: String,
    pub style: String,
    pub scenes: Vec<SceneInstance>,
    pub full_prompt: String,
    /// Only enabled add-ons appear; ordered by `AddOnKind`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub add_ons: BTreeMap<AddOnKind, String>,
}

impl GeneratedOutput {
    pub fn add_on(&self, kind: AddOnKind) -> Option<&str> {
        self.add_ons.get(&kind).map(String::as_str)
    }

    pub fn has_add_ons(&self) -> bool {
        !self.add_ons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_output(add_ons: BTreeMap<AddOnKind, String>) -> GeneratedOutput {
        GeneratedOutput {
            title: "Glass Garden".to_string(),
            one_line: "Glass Garden — a warm journey".to_string(),
            mood: "warm, hopeful, gentle".to_string(),
            style: "cinematic realism, shallow depth, widescreen".to_string(),
            scenes: Vec::new(),
            full_prompt: "prompt".to_string(),
            add_ons,
        }
    }

    #[test]
    fn empty_add_ons_are_omitted_from_json() {
        let json = serde_json::to_value(make_output(BTreeMap::new())).unwrap();
        assert!(json.get("addOns").is_none());
        assert!(json.get("oneLine").is_some());
        assert!(json.get("fullPrompt").is_some());
    }

    #[test]
    fn add_ons_serialize_with_kind_keys() {
        let add_ons = BTreeMap::from([(AddOnKind::CaptionsTags, "Captions & tags:".to_string())]);
        let output = make_output(add_ons);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["addOns"]["captionsTags"], "Captions & tags:");
        assert!(output.has_add_ons());
        assert_eq!(output.add_on(AddOnKind::CaptionsTags), Some("Captions & tags:"));
        assert_eq!(output.add_on(AddOnKind::Music), None);
    }

    #[test]
    fn ron_round_trip() {
        let add_ons = BTreeMap::from([(AddOnKind::Music, "Music & sound mood:".to_string())]);
        let output = make_output(add_ons);
        let serialized = ron::to_string(&output).unwrap();
        let deserialized: GeneratedOutput = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, output);
    }
}
