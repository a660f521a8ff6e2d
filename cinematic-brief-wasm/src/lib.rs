//! WASM bindings for cinematic-brief, the surface a web form calls on every edit.

use wasm_bindgen::prelude::*;

use cinematic_brief::core::catalog::Catalog;
use cinematic_brief::core::export::render_copy_text;
use cinematic_brief::core::scenes::{DEFAULT_SCENE_COUNT, MAX_SCENES, MIN_SCENES};
use cinematic_brief::{AddOnConfig, AddOnKind, BriefEngine, GeneratedOutput};

// ---------------------------------------------------------------------------
// Embedded catalog, compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const CINEMATIC_CATALOG: &str = include_str!("../../catalog_data/cinematic.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Limits {
    min_scenes: usize,
    max_scenes: usize,
    default_scenes: usize,
}

/// Empty input means no add-ons, matching an untouched form.
fn parse_add_ons(add_ons_json: &str) -> Result<AddOnConfig, JsError> {
    if add_ons_json.trim().is_empty() {
        return Ok(AddOnConfig::default());
    }
    serde_json::from_str(add_ons_json)
        .map_err(|e| JsError::new(&format!("Invalid add-ons JSON: {e}")))
}

// ---------------------------------------------------------------------------
// BriefStudio, the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct BriefStudio {
    engine: BriefEngine,
}

#[wasm_bindgen]
impl BriefStudio {
    /// Create a studio backed by the shipped cinematic catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BriefStudio, JsError> {
        Self::with_catalog(data::CINEMATIC_CATALOG)
    }

    /// Create a studio from a RON catalog string.
    pub fn with_catalog(catalog_ron: &str) -> Result<BriefStudio, JsError> {
        let catalog = Catalog::parse_ron(catalog_ron)
            .map_err(|e| JsError::new(&format!("Catalog parse error: {e}")))?;
        let engine = BriefEngine::builder()
            .with_catalog(catalog)
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;
        Ok(BriefStudio { engine })
    }

    /// Generate a brief as JSON, or the string `null` for an empty topic.
    ///
    /// `add_ons_json` uses the output key names:
    /// ```json
    /// { "voiceover": true, "captionsTags": true }
    /// ```
    pub fn generate(
        &self,
        topic: &str,
        scene_count: i32,
        add_ons_json: &str,
    ) -> Result<String, JsError> {
        let brief = self.brief(topic, scene_count, add_ons_json)?;
        serde_json::to_string(&brief)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// The copy/export text, or `undefined` for an empty topic.
    pub fn copy_text(
        &self,
        topic: &str,
        scene_count: i32,
        add_ons_json: &str,
    ) -> Result<Option<String>, JsError> {
        let brief = self.brief(topic, scene_count, add_ons_json)?;
        Ok(brief.as_ref().map(render_copy_text))
    }

    /// Add-on keys in presentation order. Returns a JSON array.
    pub fn add_on_kinds() -> String {
        let names: Vec<&str> = AddOnKind::ALL.iter().map(|k| k.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Scene count bounds and default for the form. Returns JSON.
    pub fn limits() -> String {
        serde_json::to_string(&Limits {
            min_scenes: MIN_SCENES,
            max_scenes: MAX_SCENES,
            default_scenes: DEFAULT_SCENE_COUNT,
        })
        .unwrap_or_else(|_| "{}".to_string())
    }
}

// Private helpers
impl BriefStudio {
    fn brief(
        &self,
        topic: &str,
        scene_count: i32,
        add_ons_json: &str,
    ) -> Result<Option<GeneratedOutput>, JsError> {
        let add_ons = parse_add_ons(add_ons_json)?;
        Ok(self.engine.generate(topic, i64::from(scene_count), add_ons))
    }
}
