//! Read-side operations over the cookbook.

use anyhow::Result;

use crate::common::RecipeId;
use crate::domains::recipes::models::Recipe;
use crate::domains::recipes::store::RecipeStore;
use crate::domains::recipes::vocabulary::PreferenceVocabulary;

pub async fn get_recipe_by_id(store: &dyn RecipeStore, id: RecipeId) -> Result<Option<Recipe>> {
    store.get_by_id(id).await
}

/// List the cookbook, optionally filtered by cuisine.
///
/// The filter runs through the same vocabulary as canonicalization -
/// stored cuisine values are always canonical, so a free-form filter value
/// must be resolved before querying.
pub async fn load_cookbook(
    store: &dyn RecipeStore,
    vocabulary: &PreferenceVocabulary,
    cuisine: Option<&str>,
) -> Result<Vec<Recipe>> {
    match cuisine {
        Some(raw) => {
            let canonical = vocabulary.cuisine.resolve_str(raw);
            store.list_by_cuisine(&canonical).await
        }
        None => store.list_all().await,
    }
}

pub async fn load_seed_recipes(store: &dyn RecipeStore) -> Result<Vec<Recipe>> {
    store.list_seed_recipes().await
}
