//! The brief pipeline: topic → normalized views → mood, style, scenes →
//! assembled prompt, with add-on blocks merged in.
//!
//! Generation itself never fails. The only fallible step is building an
//! engine from a catalog file.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::addons::compose_add_ons;
use crate::core::catalog::{Catalog, CatalogError};
use crate::core::classify::lead_word;
use crate::core::normalize::NormalizedTopic;
use crate::core::prompt::assemble_prompt;
use crate::core::scenes::{clamp_scene_count, compose_scenes};
use crate::schema::addon::AddOnConfig;
use crate::schema::brief::GeneratedOutput;
use crate::schema::scene::SEPARATOR;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Generate a brief with the built-in catalog.
///
/// Returns `None` when the topic is empty or whitespace only.
pub fn generate(topic: &str, scene_count: i64, add_ons: AddOnConfig) -> Option<GeneratedOutput> {
    BriefEngine::default().generate(topic, scene_count, add_ons)
}

/// A generator bound to one catalog. Holds no per-call state, so a single
/// engine can serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct BriefEngine {
    catalog: Catalog,
}

/// Builder for constructing a `BriefEngine`.
#[derive(Debug, Default)]
pub struct BriefEngineBuilder {
    catalog_path: Option<PathBuf>,
    /// Directly provided catalog (for testing without files).
    catalog: Option<Catalog>,
}

impl BriefEngine {
    pub fn builder() -> BriefEngineBuilder {
        BriefEngineBuilder::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generate(
        &self,
        topic: &str,
        scene_count: i64,
        add_ons: AddOnConfig,
    ) -> Option<GeneratedOutput> {
        let topic = NormalizedTopic::new(topic)?;
        let count = clamp_scene_count(scene_count);

        let mood = self.catalog.moods.classify(&topic.lowered).to_string();
        let style = self.catalog.styles.classify(&topic.lowered).to_string();
        let scenes = compose_scenes(&self.catalog.scenes, &topic.title, count);
        let full_prompt = assemble_prompt(&topic.title, &mood, &style, &scenes);
        let add_ons = compose_add_ons(&topic, &add_ons);

        debug!(
            topic = %topic.lowered,
            %mood,
            %style,
            scenes = scenes.len(),
            add_ons = add_ons.len(),
            "generated brief"
        );

        Some(GeneratedOutput {
            one_line: format!(
                "{}{}a {} journey",
                topic.title,
                SEPARATOR,
                lead_word(&mood)
            ),
            title: topic.title,
            mood,
            style,
            scenes,
            full_prompt,
            add_ons,
        })
    }
}

impl BriefEngineBuilder {
    /// Load the catalog from a RON file at build time.
    pub fn catalog_path(mut self, path: impl AsRef<Path>) -> Self {
        self.catalog_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Provide a catalog directly. Takes precedence over `catalog_path`.
    /// Keywords are normalized at build time, as for loaded catalogs.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> Result<BriefEngine, EngineError> {
        let catalog = match (self.catalog, self.catalog_path) {
            (Some(mut catalog), _) => {
                catalog.normalize();
                catalog.validate()?;
                catalog.warn_shadowed();
                catalog
            }
            (None, Some(path)) => Catalog::load_from_ron(&path)?,
            (None, None) => Catalog::builtin(),
        };
        Ok(BriefEngine { catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::{KeywordRule, RuleSet};
    use crate::schema::addon::AddOnKind;

    #[test]
    fn blank_topic_is_none() {
        assert!(generate("", 5, AddOnConfig::all()).is_none());
        assert!(generate("  \t ", 5, AddOnConfig::all()).is_none());
    }

    #[test]
    fn neon_city_in_rain() {
        let out = generate("lone traveler in neon city during rain", 5, AddOnConfig::default())
            .unwrap();
        assert_eq!(out.title, "Lone Traveler In Neon City During Rain");
        assert_eq!(out.mood, "moody, dramatic, tension");
        assert_eq!(out.style, "film noir, grain, hard contrast");
        assert_eq!(out.one_line, "Lone Traveler In Neon City During Rain — a moody journey");
        assert_eq!(out.scenes.len(), 5);
        assert!(out.add_ons.is_empty());
    }

    #[test]
    fn sunrise_over_ocean_with_music() {
        let config = AddOnConfig::default().with(AddOnKind::Music);
        let out = generate("sunrise over ocean", 3, config).unwrap();
        assert_eq!(out.mood, "warm, hopeful, gentle");
        assert_eq!(out.style, "naturalistic, sweeping, high dynamic range");
        assert_eq!(out.scenes.len(), 3);
        assert_eq!(out.add_ons.len(), 1);
        assert_eq!(
            out.add_on(AddOnKind::Music),
            Some(
                "Music & sound mood:\n\
                 Sparse piano, warm pads, low cello; subtle field sounds (wind, fabric, breath)"
            )
        );
    }

    #[test]
    fn title_cased_input_preserved() {
        let out = generate("City Lights", 5, AddOnConfig::default()).unwrap();
        assert_eq!(out.title, "City Lights");
        assert!(out.full_prompt.starts_with("City Lights — cinematic text-to-video prompt"));
    }

    #[test]
    fn scene_count_clamped() {
        assert_eq!(generate("x", -1, AddOnConfig::default()).unwrap().scenes.len(), 3);
        assert_eq!(generate("x", 42, AddOnConfig::default()).unwrap().scenes.len(), 10);
    }

    #[test]
    fn builder_defaults_to_builtin() {
        let engine = BriefEngine::builder().build().unwrap();
        assert_eq!(engine.catalog(), &Catalog::builtin());
    }

    fn snow_catalog(keywords: &[&str]) -> Catalog {
        let mut catalog = Catalog::builtin();
        catalog.moods = RuleSet {
            rules: vec![KeywordRule::new(keywords, "cold, still")],
            fallback: "plain".to_string(),
        };
        catalog
    }

    #[test]
    fn builder_lowercases_provided_keywords() {
        let engine = BriefEngine::builder()
            .with_catalog(snow_catalog(&["Snow"]))
            .build()
            .unwrap();
        let out = engine.generate("Snow Day", 3, AddOnConfig::default()).unwrap();
        assert_eq!(out.mood, "cold, still");
        assert_eq!(engine.catalog().moods.rules[0].keywords, vec!["snow"]);
    }

    #[test]
    fn builder_rejects_whitespace_keyword() {
        let result = BriefEngine::builder()
            .with_catalog(snow_catalog(&[" "]))
            .build();
        assert!(matches!(
            result,
            Err(EngineError::Catalog(CatalogError::EmptyKeyword { section: "moods", rule: 0 }))
        ));
    }

    #[test]
    fn builder_rejects_invalid_catalog() {
        let mut catalog = Catalog::builtin();
        catalog.scenes.clear();
        let result = BriefEngine::builder().with_catalog(catalog).build();
        assert!(matches!(
            result,
            Err(EngineError::Catalog(CatalogError::EmptySceneCatalog))
        ));
    }
}
