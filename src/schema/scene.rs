use serde::{Deserialize, Serialize};

/// Joins the title to setting labels, the prompt header and the one-line summary.
pub const SEPARATOR: &str = " — ";

/// A fixed scene blueprint. Every field is a literal; only `setting` is
/// combined with the topic when the template is instanced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneTemplate {
    /// Setting label appended to the topic, e.g. "Exterior — Golden Hour".
    pub setting: String,
    pub camera_angle: String,
    pub camera_movement: String,
    pub actions: String,
    pub lighting: String,
    pub colors: String,
    pub atmosphere: String,
    pub important_objects: String,
}

impl SceneTemplate {
    /// Build a scene instance at a 1-based position for the given display topic.
    pub fn instantiate(&self, index: usize, title: &str) -> SceneInstance {
        SceneInstance {
            index,
            setting: format!("{}{}{}", title, SEPARATOR, self.setting),
            camera_angle: self.camera_angle.clone(),
            camera_movement: self.camera_movement.clone(),
            actions: self.actions.clone(),
            lighting: self.lighting.clone(),
            colors: self.colors.clone(),
            atmosphere: self.atmosphere.clone(),
            important_objects: self.important_objects.clone(),
        }
    }
}

/// One scene of a generated brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneInstance {
    /// 1-based position in the brief, not the catalog index.
    pub index: usize,
    pub setting: String,
    pub camera_angle: String,
    pub camera_movement: String,
    pub actions: String,
    pub lighting: String,
    pub colors: String,
    pub atmosphere: String,
    pub important_objects: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_template() -> SceneTemplate {
        SceneTemplate {
            setting: "Rooftop".to_string(),
            camera_angle: "low angle".to_string(),
            camera_movement: "crane up".to_string(),
            actions: "figure turns".to_string(),
            lighting: "backlight".to_string(),
            colors: "magenta".to_string(),
            atmosphere: "haze".to_string(),
            important_objects: "antenna".to_string(),
        }
    }

    #[test]
    fn instantiate_prefixes_setting_with_title() {
        let scene = make_template().instantiate(3, "Neon Harbor");
        assert_eq!(scene.index, 3);
        assert_eq!(scene.setting, "Neon Harbor — Rooftop");
    }

    #[test]
    fn instantiate_copies_literal_fields() {
        let template = make_template();
        let scene = template.instantiate(1, "Anything");
        assert_eq!(scene.camera_angle, template.camera_angle);
        assert_eq!(scene.camera_movement, template.camera_movement);
        assert_eq!(scene.actions, template.actions);
        assert_eq!(scene.lighting, template.lighting);
        assert_eq!(scene.colors, template.colors);
        assert_eq!(scene.atmosphere, template.atmosphere);
        assert_eq!(scene.important_objects, template.important_objects);
    }

    #[test]
    fn instance_serializes_camel_case() {
        let scene = make_template().instantiate(1, "X");
        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("\"cameraAngle\""));
        assert!(json.contains("\"importantObjects\""));
        assert!(!json.contains("camera_angle"));
    }
}
