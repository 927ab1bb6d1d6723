//! JSON handlers for the recipe engine's exposed operations.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::RecipeId;
use crate::domains::recipes::actions::{
    ensure_recipe_in_cookbook, get_recipe_by_id, load_cookbook, load_seed_recipes,
    sync_generated_recipes, update_likes_for_recipe, EnsureOptions,
};
use crate::domains::recipes::data::RecipeData;
use crate::domains::recipes::models::RecipeDraft;
use crate::server::app::AppState;
use crate::server::error::ApiError;

// ============================================================================
// Request/response shapes
// ============================================================================

/// Batch delivered by the generation-result handler after the AI webhook
/// returns.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    pub recipes: Vec<RecipeDraft>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsureRequest {
    pub recipe: RecipeDraft,
    #[serde(default)]
    pub is_seed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesRequest {
    pub recipe: RecipeDraft,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesResponse {
    pub id: Option<String>,
    /// Advisory count for optimistic display; re-read the record for truth.
    pub likes: i64,
}

#[derive(Debug, Deserialize)]
pub struct CookbookQuery {
    pub cuisine: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn sync_recipes_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SyncRequest>,
) -> Result<Json<Vec<RecipeData>>, ApiError> {
    let recipes =
        sync_generated_recipes(state.store.as_ref(), &state.vocabulary, &request.recipes).await?;
    Ok(Json(recipes.into_iter().map(RecipeData::from).collect()))
}

pub async fn ensure_recipe_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<EnsureRequest>,
) -> Result<Json<RecipeData>, ApiError> {
    let recipe = ensure_recipe_in_cookbook(
        state.store.as_ref(),
        &state.vocabulary,
        &request.recipe,
        EnsureOptions {
            is_seed: request.is_seed,
        },
    )
    .await?;
    Ok(Json(RecipeData::from(recipe)))
}

pub async fn update_likes_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<LikesRequest>,
) -> Result<Json<LikesResponse>, ApiError> {
    let mut draft = request.recipe;
    let likes = update_likes_for_recipe(
        state.store.as_ref(),
        &state.vocabulary,
        &mut draft,
        request.is_favorite,
    )
    .await?;
    Ok(Json(LikesResponse {
        id: draft.id.map(|id| id.to_string()),
        likes,
    }))
}

pub async fn recipe_by_id_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeData>, ApiError> {
    let id = RecipeId::parse(&id)
        .map_err(|_| ApiError::MalformedPayload(format!("invalid recipe id: {}", id)))?;
    let recipe = get_recipe_by_id(state.store.as_ref(), id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(RecipeData::from(recipe)))
}

pub async fn cookbook_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<CookbookQuery>,
) -> Result<Json<Vec<RecipeData>>, ApiError> {
    let recipes = load_cookbook(
        state.store.as_ref(),
        &state.vocabulary,
        query.cuisine.as_deref(),
    )
    .await?;
    Ok(Json(recipes.into_iter().map(RecipeData::from).collect()))
}

pub async fn seed_recipes_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<RecipeData>>, ApiError> {
    let recipes = load_seed_recipes(state.store.as_ref()).await?;
    Ok(Json(recipes.into_iter().map(RecipeData::from).collect()))
}
