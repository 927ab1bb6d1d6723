//! Preference canonicalization against a fixed, shared vocabulary.
//!
//! Free-form preference values from the generator are mapped onto allowed
//! value lists with a configured default per axis. The vocabulary is an
//! explicit configuration value, constructed once and used at both
//! signature time and display time - the two call sites must never drift,
//! or deduplication breaks silently.

use serde::{Deserialize, Serialize};

use crate::domains::recipes::models::{PreferenceSet, RawPreferenceValue, RawPreferences};

/// Allowed values and default for a single preference axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisVocabulary {
    allowed: Vec<String>,
    default_value: String,
}

impl AxisVocabulary {
    /// Build an axis vocabulary from its allowed values.
    ///
    /// `preferred_default` is used as the default when it is a member of
    /// the allowed set (the "no preference" style value); otherwise the
    /// first allowed value becomes the default. Values are normalized to
    /// lower-cased, trimmed form up front.
    pub fn new(allowed: &[&str], preferred_default: &str) -> Self {
        let allowed: Vec<String> = allowed
            .iter()
            .map(|v| v.trim().to_lowercase())
            .collect();
        let preferred = preferred_default.trim().to_lowercase();
        let default_value = if allowed.contains(&preferred) {
            preferred
        } else {
            allowed.first().cloned().unwrap_or_default()
        };
        Self {
            allowed,
            default_value,
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Normalize a single free-form value: lower-case, trim, and replace
    /// anything outside the allowed set with the axis default.
    pub fn resolve_str(&self, raw: &str) -> String {
        let value = raw.trim().to_lowercase();
        if self.allowed.contains(&value) {
            value
        } else {
            self.default_value.clone()
        }
    }

    /// Resolve a raw preference value (string, array, or missing).
    pub fn resolve(&self, raw: &RawPreferenceValue) -> String {
        self.resolve_str(raw.first())
    }
}

/// The shared preference vocabulary: one axis each for cuisine, cooking
/// time, and diet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceVocabulary {
    pub cuisine: AxisVocabulary,
    pub cooking_time: AxisVocabulary,
    pub diet: AxisVocabulary,
}

impl PreferenceVocabulary {
    pub fn new(
        cuisine: AxisVocabulary,
        cooking_time: AxisVocabulary,
        diet: AxisVocabulary,
    ) -> Self {
        Self {
            cuisine,
            cooking_time,
            diet,
        }
    }

    /// The application's single shared vocabulary. Both the engine and any
    /// display surface must use this instance's configuration.
    pub fn standard() -> Self {
        Self::new(
            AxisVocabulary::new(
                &[
                    "german", "italian", "spanish", "mexican", "chinese", "indian", "japanese",
                    "greek", "thai", "fusion",
                ],
                "fusion",
            ),
            AxisVocabulary::new(
                &[
                    "no preference",
                    "under 15 minutes",
                    "under 30 minutes",
                    "under 45 minutes",
                    "under 60 minutes",
                ],
                "no preference",
            ),
            AxisVocabulary::new(
                &[
                    "no preference",
                    "vegetarian",
                    "vegan",
                    "pescatarian",
                    "gluten free",
                    "lactose free",
                    "keto",
                ],
                "no preference",
            ),
        )
    }

    /// Map free-form preferences onto the canonical triple.
    ///
    /// Pure and deterministic for identical inputs and identical vocabulary
    /// configuration.
    pub fn canonicalize(&self, raw: &RawPreferences) -> PreferenceSet {
        PreferenceSet {
            cooking_time: self.cooking_time.resolve(&raw.cooking_time),
            cuisine: self.cuisine.resolve(&raw.cuisine),
            diet_preferences: self.diet.resolve(&raw.diet_preferences),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_value_is_kept_lowercased() {
        let axis = AxisVocabulary::new(&["german", "italian", "fusion"], "fusion");
        assert_eq!(axis.resolve_str("  Italian "), "italian");
    }

    #[test]
    fn unknown_value_falls_back_to_default() {
        let axis = AxisVocabulary::new(&["german", "italian", "fusion"], "fusion");
        assert_eq!(axis.resolve_str("FRENCH"), "fusion");
    }

    #[test]
    fn preferred_default_must_be_a_member() {
        // "any" is not in the list, so the first value wins
        let axis = AxisVocabulary::new(&["german", "italian"], "any");
        assert_eq!(axis.default_value(), "german");
    }

    #[test]
    fn array_value_uses_first_element() {
        let axis = AxisVocabulary::new(&["vegan", "keto"], "vegan");
        let raw = RawPreferenceValue::Many(vec!["Keto".to_string(), "vegan".to_string()]);
        assert_eq!(axis.resolve(&raw), "keto");
    }

    #[test]
    fn missing_value_resolves_to_default() {
        let axis = AxisVocabulary::new(&["vegan", "keto"], "vegan");
        assert_eq!(axis.resolve(&RawPreferenceValue::Missing), "vegan");
    }

    #[test]
    fn canonicalize_fills_all_axes() {
        let vocabulary = PreferenceVocabulary::standard();
        let raw = RawPreferences {
            cuisine: "THAI ".into(),
            ..Default::default()
        };
        let prefs = vocabulary.canonicalize(&raw);
        assert_eq!(prefs.cuisine, "thai");
        assert_eq!(prefs.cooking_time, "no preference");
        assert_eq!(prefs.diet_preferences, "no preference");
    }

    #[test]
    fn canonicalize_is_deterministic() {
        let vocabulary = PreferenceVocabulary::standard();
        let raw = RawPreferences {
            cuisine: "Mexican".into(),
            cooking_time: "Under 30 Minutes".into(),
            diet_preferences: "VEGAN".into(),
        };
        assert_eq!(vocabulary.canonicalize(&raw), vocabulary.canonicalize(&raw));
    }
}
