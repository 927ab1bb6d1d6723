//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::recipes::store::RecipeStore;
use crate::domains::recipes::vocabulary::PreferenceVocabulary;
use crate::server::routes::{
    cookbook_handler, ensure_recipe_handler, health_handler, recipe_by_id_handler,
    seed_recipes_handler, sync_recipes_handler, update_likes_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub vocabulary: Arc<PreferenceVocabulary>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>, vocabulary: PreferenceVocabulary) -> Self {
        Self {
            store,
            vocabulary: Arc::new(vocabulary),
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/recipes/sync", post(sync_recipes_handler))
        .route("/api/recipes/ensure", post(ensure_recipe_handler))
        .route("/api/recipes/likes", post(update_likes_handler))
        .route("/api/recipes/seed", get(seed_recipes_handler))
        .route("/api/recipes/:id", get(recipe_by_id_handler))
        .route("/api/cookbook", get(cookbook_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
