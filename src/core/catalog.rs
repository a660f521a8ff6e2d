//! Rule and template catalog: built-in defaults plus RON loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::classify::{mood_rules, style_rules, RuleSet};
use crate::core::scenes::builtin_templates;
use crate::schema::scene::SceneTemplate;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("catalog has no scene templates")]
    EmptySceneCatalog,
    #[error("{section} rule {rule} has no keywords")]
    EmptyRule { section: &'static str, rule: usize },
    #[error("{section} rule {rule} contains an empty keyword")]
    EmptyKeyword { section: &'static str, rule: usize },
    #[error("{section} has an empty descriptor")]
    EmptyDescriptor { section: &'static str },
}

/// Everything the pipeline needs besides the user's inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub moods: RuleSet,
    pub styles: RuleSet,
    pub scenes: Vec<SceneTemplate>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The literal rules and templates compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            moods: mood_rules(),
            styles: style_rules(),
            scenes: builtin_templates(),
        }
    }

    /// Load a catalog from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Catalog, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading catalog");
        Self::parse_ron(&contents)
    }

    /// Parse a catalog from a RON string. Keywords are normalized before
    /// validation.
    pub fn parse_ron(input: &str) -> Result<Catalog, CatalogError> {
        let mut catalog: Catalog = ron::from_str(input)?;
        catalog.normalize();
        catalog.validate()?;
        catalog.warn_shadowed();
        Ok(catalog)
    }

    /// Trim and lower-case every keyword so it matches the normalized topic.
    pub fn normalize(&mut self) {
        for rules in [&mut self.moods, &mut self.styles] {
            for rule in &mut rules.rules {
                for keyword in &mut rule.keywords {
                    *keyword = keyword.trim().to_lowercase();
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.scenes.is_empty() {
            return Err(CatalogError::EmptySceneCatalog);
        }
        validate_rules("moods", &self.moods)?;
        validate_rules("styles", &self.styles)
    }

    pub(crate) fn warn_shadowed(&self) {
        for (section, rules) in [("moods", &self.moods), ("styles", &self.styles)] {
            for idx in rules.fully_shadowed_rules() {
                warn!(
                    section,
                    rule = idx,
                    descriptor = %rules.rules[idx].descriptor,
                    "rule can never match; every keyword is claimed by an earlier rule"
                );
            }
        }
    }
}

fn validate_rules(section: &'static str, rules: &RuleSet) -> Result<(), CatalogError> {
    if rules.fallback.trim().is_empty() {
        return Err(CatalogError::EmptyDescriptor { section });
    }
    for (idx, rule) in rules.rules.iter().enumerate() {
        if rule.keywords.is_empty() {
            return Err(CatalogError::EmptyRule { section, rule: idx });
        }
        // An empty keyword is contained in every topic.
        if rule.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(CatalogError::EmptyKeyword { section, rule: idx });
        }
        if rule.descriptor.trim().is_empty() {
            return Err(CatalogError::EmptyDescriptor { section });
        }
    }
    Ok(())
}
