//! Shared helpers for engine tests.

use cookbook_core::domains::recipes::models::{
    Ingredient, IngredientLists, RawPreferences, RecipeDraft,
};

/// A draft with the given title and ingredients in `yourIngredients`.
pub fn draft(title: &str, cooks_amount: i32, ingredients: Vec<Ingredient>) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        cooks_amount,
        ingredients: IngredientLists {
            your_ingredients: ingredients,
            extra_ingredients: vec![],
        },
        ..Default::default()
    }
}

pub fn tomato_pasta() -> RecipeDraft {
    draft(
        "Tomato Pasta",
        2,
        vec![
            Ingredient::new("tomato", 200.0, "g"),
            Ingredient::new("pasta", 150.0, "g"),
        ],
    )
}

pub fn with_preferences(mut recipe: RecipeDraft, cuisine: &str, diet: &str) -> RecipeDraft {
    recipe.preferences = RawPreferences {
        cuisine: cuisine.into(),
        diet_preferences: diet.into(),
        ..Default::default()
    };
    recipe
}
