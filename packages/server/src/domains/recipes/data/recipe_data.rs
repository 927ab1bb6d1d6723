use serde::{Deserialize, Serialize};

use crate::domains::recipes::models::{
    Direction, IngredientLists, NutritionalInformation, PreferenceSet, Recipe,
};

/// API representation of a cookbook record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeData {
    pub id: String,
    pub title: String,
    pub cooking_time_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time_minutes: Option<i32>,
    pub cooks_amount: i32,
    pub nutritional_information: NutritionalInformation,
    pub preferences: PreferenceSet,
    pub ingredients: IngredientLists,
    pub directions: Vec<Direction>,
    pub recipe_signature: String,
    pub likes: i64,
    pub is_seed_recipe: bool,

    // Timestamps
    pub created_at: String,
}

impl From<Recipe> for RecipeData {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            title: recipe.title,
            cooking_time_text: recipe.cooking_time_text,
            cooking_time_minutes: recipe.cooking_time_minutes,
            cooks_amount: recipe.cooks_amount,
            nutritional_information: recipe.nutritional_information,
            preferences: recipe.preferences,
            ingredients: recipe.ingredients,
            directions: recipe.directions,
            recipe_signature: recipe.recipe_signature,
            likes: recipe.likes.max(0),
            is_seed_recipe: recipe.is_seed_recipe,
            created_at: recipe.created_at.to_rfc3339(),
        }
    }
}
