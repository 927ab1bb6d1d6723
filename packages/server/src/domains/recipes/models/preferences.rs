use serde::{Deserialize, Serialize};

/// Canonical preference triple stored on every recipe.
///
/// Values are always members of the shared [`PreferenceVocabulary`]
/// (see `domains::recipes::vocabulary`); free-form input never lands here.
///
/// [`PreferenceVocabulary`]: crate::domains::recipes::vocabulary::PreferenceVocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    pub cooking_time: String,
    pub cuisine: String,
    pub diet_preferences: String,
}

/// A free-form preference value as it arrives from the generator or client.
///
/// Upstream payloads are inconsistent: an axis may carry a single string,
/// an array of strings (only the first element counts), or nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPreferenceValue {
    One(String),
    Many(Vec<String>),
    Missing,
}

impl Default for RawPreferenceValue {
    fn default() -> Self {
        Self::Missing
    }
}

impl RawPreferenceValue {
    /// The single value this raw input stands for: the string itself, the
    /// first array element, or the empty string when absent.
    pub fn first(&self) -> &str {
        match self {
            Self::One(value) => value,
            Self::Many(values) => values.first().map(String::as_str).unwrap_or(""),
            Self::Missing => "",
        }
    }
}

impl From<&str> for RawPreferenceValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

/// Uncanonicalized preference triple on an incoming recipe draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPreferences {
    #[serde(default)]
    pub cooking_time: RawPreferenceValue,
    #[serde(default)]
    pub cuisine: RawPreferenceValue,
    #[serde(default)]
    pub diet_preferences: RawPreferenceValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_value_deserializes_string_array_and_null() {
        let one: RawPreferenceValue = serde_json::from_str("\"italian\"").unwrap();
        assert_eq!(one.first(), "italian");

        let many: RawPreferenceValue = serde_json::from_str("[\"vegan\", \"keto\"]").unwrap();
        assert_eq!(many.first(), "vegan");

        let missing: RawPreferenceValue = serde_json::from_str("null").unwrap();
        assert_eq!(missing.first(), "");
    }

    #[test]
    fn missing_axis_defaults_to_empty() {
        let raw: RawPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(raw.cuisine.first(), "");
        assert_eq!(raw.cooking_time.first(), "");
        assert_eq!(raw.diet_preferences.first(), "");
    }

    #[test]
    fn empty_array_counts_as_empty() {
        let empty: RawPreferenceValue = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.first(), "");
    }
}
