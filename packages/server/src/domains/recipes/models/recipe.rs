use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::RecipeId;
use crate::domains::recipes::models::{IngredientLists, PreferenceSet, RawPreferences};
use crate::domains::recipes::signature::compute_signature;
use crate::domains::recipes::vocabulary::PreferenceVocabulary;

/// Nutritional breakdown as reported by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInformation {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub proteins: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub carbs: f64,
}

/// A single preparation step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Direction {
    pub order: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Whether this step involves actual cooking (vs. prep).
    #[serde(default)]
    pub cook: bool,
}

/// A persisted cookbook record.
///
/// Content fields are immutable once created; only `likes` mutates
/// post-creation, and only through the store's atomic increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub cooking_time_text: String,
    pub cooking_time_minutes: Option<i32>,
    pub cooks_amount: i32,
    pub nutritional_information: NutritionalInformation,
    pub preferences: PreferenceSet,
    pub ingredients: IngredientLists,
    pub directions: Vec<Direction>,
    pub recipe_signature: String,
    /// Global like counter; never negative in any value handed to callers.
    pub likes: i64,
    pub is_seed_recipe: bool,
    pub created_at: DateTime<Utc>,
}

/// A freshly generated recipe before it has been reconciled against the
/// cookbook: no store identity yet, preferences still free-form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(default)]
    pub id: Option<RecipeId>,
    pub title: String,
    #[serde(default)]
    pub cooking_time_text: String,
    #[serde(default)]
    pub cooking_time_minutes: Option<i32>,
    pub cooks_amount: i32,
    #[serde(default)]
    pub nutritional_information: NutritionalInformation,
    #[serde(default)]
    pub preferences: RawPreferences,
    #[serde(default)]
    pub ingredients: IngredientLists,
    #[serde(default)]
    pub directions: Vec<Direction>,
    #[serde(default)]
    pub likes: Option<i64>,
}

impl RecipeDraft {
    /// Deterministic content signature for this draft.
    ///
    /// Pure function of the semantic content; never depends on `id` or
    /// `likes`. Recomputing is always safe - identical content yields an
    /// identical signature.
    pub fn signature(&self, vocabulary: &PreferenceVocabulary) -> String {
        compute_signature(self, vocabulary)
    }
}

/// Payload for creating a new cookbook record. Carries no id; the store
/// assigns one, along with the creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub cooking_time_text: String,
    pub cooking_time_minutes: Option<i32>,
    pub cooks_amount: i32,
    pub nutritional_information: NutritionalInformation,
    pub preferences: PreferenceSet,
    pub ingredients: IngredientLists,
    pub directions: Vec<Direction>,
    pub recipe_signature: String,
    pub likes: i64,
    pub is_seed_recipe: bool,
}

impl NewRecipe {
    /// Build a create payload from a draft.
    ///
    /// `preferences` must already be canonicalized and `signature` computed
    /// over that same canonical form.
    pub fn from_draft(
        draft: &RecipeDraft,
        signature: String,
        preferences: PreferenceSet,
        likes: i64,
        is_seed_recipe: bool,
    ) -> Self {
        Self {
            title: draft.title.clone(),
            cooking_time_text: draft.cooking_time_text.clone(),
            cooking_time_minutes: draft.cooking_time_minutes,
            cooks_amount: draft.cooks_amount,
            nutritional_information: draft.nutritional_information.clone(),
            preferences,
            ingredients: draft.ingredients.clone(),
            directions: draft.directions.clone(),
            recipe_signature: signature,
            likes,
            is_seed_recipe,
        }
    }
}

impl Recipe {
    /// Overlay stored identity onto an incoming duplicate submission.
    ///
    /// Field provenance is explicit:
    /// - content fields (`title`, timings, `cooks_amount`, nutrition,
    ///   `ingredients`, `directions`) come from the incoming `draft`;
    /// - `preferences` is the canonical form of the draft's preferences;
    /// - `id`, `recipe_signature`, `likes` (missing treated as 0, never
    ///   negative), `is_seed_recipe`, and `created_at` come from `existing`.
    ///
    /// The stored record itself is untouched; first writer's content wins
    /// permanently for a signature.
    pub fn adopt_existing(
        draft: &RecipeDraft,
        preferences: PreferenceSet,
        existing: &Recipe,
    ) -> Self {
        Self {
            id: existing.id,
            title: draft.title.clone(),
            cooking_time_text: draft.cooking_time_text.clone(),
            cooking_time_minutes: draft.cooking_time_minutes,
            cooks_amount: draft.cooks_amount,
            nutritional_information: draft.nutritional_information.clone(),
            preferences,
            ingredients: draft.ingredients.clone(),
            directions: draft.directions.clone(),
            recipe_signature: existing.recipe_signature.clone(),
            likes: existing.likes.max(0),
            is_seed_recipe: existing.is_seed_recipe,
            created_at: existing.created_at,
        }
    }

    /// The record as returned right after a fresh create: draft content plus
    /// the store-assigned `id` and the computed `signature`.
    pub fn newly_persisted(
        draft: &RecipeDraft,
        preferences: PreferenceSet,
        id: RecipeId,
        signature: String,
        likes: i64,
        is_seed_recipe: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            cooking_time_text: draft.cooking_time_text.clone(),
            cooking_time_minutes: draft.cooking_time_minutes,
            cooks_amount: draft.cooks_amount,
            nutritional_information: draft.nutritional_information.clone(),
            preferences,
            ingredients: draft.ingredients.clone(),
            directions: draft.directions.clone(),
            recipe_signature: signature,
            likes,
            is_seed_recipe,
            created_at,
        }
    }
}
