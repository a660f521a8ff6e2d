//! Ordered keyword rules for mood and style classification.
//!
//! Rules are evaluated top to bottom against the lower-cased topic and the
//! first rule with any keyword contained in the topic wins. Keyword lists may
//! overlap between rules; the earlier rule always takes priority.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub const DEFAULT_MOOD: &str = "cinematic, emotional, immersive";
pub const DEFAULT_STYLE: &str = "cinematic realism, shallow depth, widescreen";

/// One `(keywords, descriptor)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub descriptor: String,
}

impl KeywordRule {
    pub fn new(keywords: &[&str], descriptor: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            descriptor: descriptor.to_string(),
        }
    }

    /// Substring containment, no word boundaries.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// An ordered rule list with a fallback descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<KeywordRule>,
    pub fallback: String,
}

/// A keyword that can never decide a classification because an earlier
/// rule already claims it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedKeyword {
    pub keyword: String,
    /// Index of the rule the keyword is listed under.
    pub rule: usize,
    /// Index of the earlier rule that wins instead.
    pub shadowed_by: usize,
}

impl RuleSet {
    /// Index of the first rule matching the lower-cased topic.
    pub fn matching_rule(&self, lowered: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(lowered))
    }

    /// Descriptor for a lower-cased topic, or the fallback.
    pub fn classify(&self, lowered: &str) -> &str {
        match self.matching_rule(lowered) {
            Some(idx) => {
                trace!(rule = idx, descriptor = %self.rules[idx].descriptor, "keyword rule matched");
                &self.rules[idx].descriptor
            }
            None => {
                trace!(descriptor = %self.fallback, "no keyword rule matched, using fallback");
                &self.fallback
            }
        }
    }

    /// Keywords listed under a rule whose text is already contained in a
    /// keyword of some earlier rule. Such a keyword always triggers the
    /// earlier rule first.
    pub fn shadowed_keywords(&self) -> Vec<ShadowedKeyword> {
        let mut shadowed = Vec::new();

        for (idx, rule) in self.rules.iter().enumerate() {
            for keyword in &rule.keywords {
                let earlier = self.rules[..idx]
                    .iter()
                    .position(|prev| prev.matches(keyword));
                if let Some(prev) = earlier {
                    shadowed.push(ShadowedKeyword {
                        keyword: keyword.clone(),
                        rule: idx,
                        shadowed_by: prev,
                    });
                }
            }
        }

        shadowed
    }

    /// Rules none of whose keywords can ever win. The rule is dead weight.
    pub fn fully_shadowed_rules(&self) -> Vec<usize> {
        let shadowed = self.shadowed_keywords();
        let mut per_rule: FxHashMap<usize, FxHashSet<&str>> = FxHashMap::default();
        for s in &shadowed {
            per_rule.entry(s.rule).or_default().insert(s.keyword.as_str());
        }

        self.rules
            .iter()
            .enumerate()
            .filter(|(idx, rule)| {
                !rule.keywords.is_empty()
                    && per_rule.get(idx).is_some_and(|set| {
                        rule.keywords.iter().all(|k| set.contains(k.as_str()))
                    })
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Built-in mood rules, highest priority first.
pub fn mood_rules() -> RuleSet {
    RuleSet {
        rules: vec![
            KeywordRule::new(
                &["storm", "war", "night", "neon", "noir", "revenge", "betrayal", "loss"],
                "moody, dramatic, tension",
            ),
            KeywordRule::new(
                &["sunrise", "spring", "child", "smile", "peace", "home", "ocean", "breeze"],
                "warm, hopeful, gentle",
            ),
            KeywordRule::new(
                &["future", "cyber", "city", "neon", "tech", "robot"],
                "cool, futuristic, surreal",
            ),
            KeywordRule::new(
                &["journey", "mountain", "forest", "desert", "wild"],
                "epic, adventurous, cinematic",
            ),
        ],
        fallback: DEFAULT_MOOD.to_string(),
    }
}

/// Built-in style rules, highest priority first.
pub fn style_rules() -> RuleSet {
    RuleSet {
        rules: vec![
            KeywordRule::new(
                &["noir", "detective", "rain", "cigarette", "shadow"],
                "film noir, grain, hard contrast",
            ),
            KeywordRule::new(
                &["vintage", "retro", "70s", "80s"],
                "vintage film, soft bloom, subtle grain",
            ),
            KeywordRule::new(
                &["anime", "manga", "ghibli"],
                "anime-inspired, painterly, soft light",
            ),
            KeywordRule::new(
                &["nature", "wild", "ocean", "forest", "mountain"],
                "naturalistic, sweeping, high dynamic range",
            ),
            KeywordRule::new(
                &["space", "cyber", "neon", "future"],
                "neo-futuristic, neon, reflective surfaces",
            ),
        ],
        fallback: DEFAULT_STYLE.to_string(),
    }
}

/// First word of a mood descriptor: the text before its first comma.
pub fn lead_word(descriptor: &str) -> &str {
    descriptor.split(',').next().unwrap_or(descriptor).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neon_resolves_to_highest_priority_mood() {
        let moods = mood_rules();
        assert_eq!(moods.classify("neon"), "moody, dramatic, tension");
        assert_eq!(moods.matching_rule("a neon tech robot"), Some(0));
    }

    #[test]
    fn mood_rule_order() {
        let moods = mood_rules();
        assert_eq!(moods.classify("sunrise over ocean"), "warm, hopeful, gentle");
        assert_eq!(moods.classify("robot factory"), "cool, futuristic, surreal");
        assert_eq!(moods.classify("desert crossing"), "epic, adventurous, cinematic");
        assert_eq!(moods.classify("a quiet bakery"), DEFAULT_MOOD);
    }

    #[test]
    fn matching_is_substring_not_word() {
        let moods = mood_rules();
        // "warm" contains "war"
        assert_eq!(moods.classify("warm kitchen"), "moody, dramatic, tension");
        // "homeless" contains "home"
        assert_eq!(moods.matching_rule("homeless cat"), Some(1));
    }

    #[test]
    fn style_rule_order() {
        let styles = style_rules();
        assert_eq!(
            styles.classify("lone traveler in neon city during rain"),
            "film noir, grain, hard contrast"
        );
        assert_eq!(styles.classify("retro arcade"), "vintage film, soft bloom, subtle grain");
        assert_eq!(styles.classify("ghibli meadow"), "anime-inspired, painterly, soft light");
        assert_eq!(
            styles.classify("sunrise over ocean"),
            "naturalistic, sweeping, high dynamic range"
        );
        assert_eq!(
            styles.classify("space station"),
            "neo-futuristic, neon, reflective surfaces"
        );
        assert_eq!(styles.classify("birthday party"), DEFAULT_STYLE);
    }

    #[test]
    fn builtin_mood_shadowing_reports_neon() {
        let shadowed = mood_rules().shadowed_keywords();
        assert_eq!(
            shadowed,
            vec![ShadowedKeyword {
                keyword: "neon".to_string(),
                rule: 2,
                shadowed_by: 0,
            }]
        );
        assert!(mood_rules().fully_shadowed_rules().is_empty());
    }

    #[test]
    fn builtin_style_rules_do_not_overlap() {
        let shadowed = style_rules().shadowed_keywords();
        let words: Vec<&str> = shadowed.iter().map(|s| s.keyword.as_str()).collect();
        assert!(words.is_empty(), "unexpected shadowing: {:?}", words);
    }

    #[test]
    fn fully_shadowed_rule_detected() {
        let rules = RuleSet {
            rules: vec![
                KeywordRule::new(&["storm", "night"], "first"),
                KeywordRule::new(&["stormy", "midnight"], "never"),
                KeywordRule::new(&["night", "dawn"], "partial"),
            ],
            fallback: "fallback".to_string(),
        };
        assert_eq!(rules.fully_shadowed_rules(), vec![1]);
        assert_eq!(rules.classify("stormy midnight"), "first");
    }

    #[test]
    fn lead_word_takes_text_before_comma() {
        assert_eq!(lead_word("moody, dramatic, tension"), "moody");
        assert_eq!(lead_word("single"), "single");
        assert_eq!(lead_word(""), "");
    }
}
