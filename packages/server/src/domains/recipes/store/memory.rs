//! In-memory store adapter for tests and local development.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use crate::common::RecipeId;
use crate::domains::recipes::models::{NewRecipe, Recipe};
use crate::domains::recipes::store::RecipeStore;

/// Vec-backed store. Insertion order is the store order, so
/// `find_by_signature` returns the oldest record for a signature, matching
/// the Postgres adapter.
#[derive(Clone, Default)]
pub struct MemoryRecipeStore {
    records: Arc<Mutex<Vec<Recipe>>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records (duplicates included).
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The raw (unclamped) like counter, for asserting on increments.
    pub fn raw_likes(&self, id: RecipeId) -> Option<i64> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.likes)
    }

    fn read_view(record: &Recipe) -> Recipe {
        let mut copy = record.clone();
        copy.likes = copy.likes.max(0);
        copy
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn find_by_signature(&self, signature: &str) -> Result<Option<Recipe>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.recipe_signature == signature)
            .map(Self::read_view))
    }

    async fn create(&self, payload: NewRecipe) -> Result<RecipeId> {
        let id = RecipeId::new();
        let record = Recipe {
            id,
            title: payload.title,
            cooking_time_text: payload.cooking_time_text,
            cooking_time_minutes: payload.cooking_time_minutes,
            cooks_amount: payload.cooks_amount,
            nutritional_information: payload.nutritional_information,
            preferences: payload.preferences,
            ingredients: payload.ingredients,
            directions: payload.directions,
            recipe_signature: payload.recipe_signature,
            likes: payload.likes,
            is_seed_recipe: payload.is_seed_recipe,
            created_at: Utc::now(),
        };
        self.records.lock().unwrap().push(record);
        Ok(id)
    }

    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.id == id).map(Self::read_view))
    }

    async fn list_by_cuisine(&self, cuisine: &str) -> Result<Vec<Recipe>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.preferences.cuisine == cuisine)
            .map(Self::read_view)
            .collect())
    }

    async fn list_seed_recipes(&self) -> Result<Vec<Recipe>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.is_seed_recipe)
            .map(Self::read_view)
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Recipe>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().map(Self::read_view).collect())
    }

    async fn increment_likes(&self, id: RecipeId, delta: i64) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            // Raw counter may go negative; reads clamp.
            record.likes += delta;
        }
        Ok(())
    }
}
