use serde::{Deserialize, Serialize};

/// Measurement unit for an ingredient serving.
///
/// Upstream generators do not always supply both fields; missing values
/// default to empty strings rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
}

/// A single ingredient line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Non-negative amount; missing values default to 0.
    #[serde(default)]
    pub serving_size: f64,
    #[serde(default)]
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(name: &str, serving_size: f64, unit_abbreviation: &str) -> Self {
        Self {
            name: name.to_string(),
            serving_size,
            unit: Unit {
                name: String::new(),
                abbreviation: unit_abbreviation.to_string(),
            },
        }
    }
}

/// The two ordered ingredient lists carried by every recipe: what the user
/// supplied and what the generator added on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLists {
    #[serde(default)]
    pub your_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub extra_ingredients: Vec<Ingredient>,
}

impl IngredientLists {
    /// Iterate over both lists in order (user-supplied first).
    pub fn iter_all(&self) -> impl Iterator<Item = &Ingredient> {
        self.your_ingredients
            .iter()
            .chain(self.extra_ingredients.iter())
    }
}
