//! Postgres store adapter.
//!
//! Atomic increments are delegated to a single `UPDATE ... SET likes =
//! likes + $2`; the engine never round-trips the authoritative counter.
//! Reads clamp `likes` at 0.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::RecipeId;
use crate::domains::recipes::models::{
    Direction, IngredientLists, NewRecipe, NutritionalInformation, PreferenceSet, Recipe,
};
use crate::domains::recipes::store::RecipeStore;

pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape at the database boundary; JSON columns unwrap into the domain
/// model on the way out.
#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: RecipeId,
    title: String,
    cooking_time_text: String,
    cooking_time_minutes: Option<i32>,
    cooks_amount: i32,
    nutritional_information: Json<NutritionalInformation>,
    preferences: Json<PreferenceSet>,
    ingredients: Json<IngredientLists>,
    directions: Json<Vec<Direction>>,
    recipe_signature: String,
    likes: i64,
    is_seed_recipe: bool,
    created_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            cooking_time_text: row.cooking_time_text,
            cooking_time_minutes: row.cooking_time_minutes,
            cooks_amount: row.cooks_amount,
            nutritional_information: row.nutritional_information.0,
            preferences: row.preferences.0,
            ingredients: row.ingredients.0,
            directions: row.directions.0,
            recipe_signature: row.recipe_signature,
            likes: row.likes.max(0),
            is_seed_recipe: row.is_seed_recipe,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn find_by_signature(&self, signature: &str) -> Result<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>(
            "SELECT * FROM recipes
             WHERE recipe_signature = $1
             ORDER BY created_at ASC
             LIMIT 1",
        )
        .bind(signature)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Recipe::from))
    }

    async fn create(&self, payload: NewRecipe) -> Result<RecipeId> {
        let id = sqlx::query_scalar::<_, RecipeId>(
            "INSERT INTO recipes (
                title, cooking_time_text, cooking_time_minutes, cooks_amount,
                nutritional_information, preferences, ingredients, directions,
                recipe_signature, likes, is_seed_recipe
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING id",
        )
        .bind(&payload.title)
        .bind(&payload.cooking_time_text)
        .bind(payload.cooking_time_minutes)
        .bind(payload.cooks_amount)
        .bind(Json(&payload.nutritional_information))
        .bind(Json(&payload.preferences))
        .bind(Json(&payload.ingredients))
        .bind(Json(&payload.directions))
        .bind(&payload.recipe_signature)
        .bind(payload.likes)
        .bind(payload.is_seed_recipe)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>("SELECT * FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Recipe::from))
    }

    async fn list_by_cuisine(&self, cuisine: &str) -> Result<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            "SELECT * FROM recipes
             WHERE preferences->>'cuisine' = $1
             ORDER BY created_at DESC",
        )
        .bind(cuisine)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn list_seed_recipes(&self) -> Result<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            "SELECT * FROM recipes
             WHERE is_seed_recipe
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<Recipe>> {
        let rows =
            sqlx::query_as::<_, RecipeRow>("SELECT * FROM recipes ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn increment_likes(&self, id: RecipeId, delta: i64) -> Result<()> {
        sqlx::query("UPDATE recipes SET likes = likes + $2 WHERE id = $1")
            .bind(id)
            .bind(delta)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
