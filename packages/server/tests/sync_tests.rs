//! Upsert coordination tests against the in-memory store.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use common::{draft, tomato_pasta};
use cookbook_core::common::RecipeId;
use cookbook_core::domains::recipes::actions::{
    ensure_recipe_in_cookbook, sync_generated_recipes, EnsureOptions,
};
use cookbook_core::domains::recipes::models::{Ingredient, NewRecipe, Recipe};
use cookbook_core::domains::recipes::store::{MemoryRecipeStore, RecipeStore};
use cookbook_core::domains::recipes::vocabulary::PreferenceVocabulary;

#[tokio::test]
async fn first_ensure_creates_a_record() {
    let store = MemoryRecipeStore::new();
    let vocabulary = PreferenceVocabulary::standard();

    let recipe = ensure_recipe_in_cookbook(
        &store,
        &vocabulary,
        &tomato_pasta(),
        EnsureOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(recipe.likes, 0);
    assert!(!recipe.is_seed_recipe);
    assert_eq!(recipe.preferences.cuisine, "fusion");

    let stored = store.get_by_id(recipe.id).await.unwrap().unwrap();
    assert_eq!(stored.recipe_signature, recipe.recipe_signature);
}

#[tokio::test]
async fn ensure_is_idempotent() {
    let store = MemoryRecipeStore::new();
    let vocabulary = PreferenceVocabulary::standard();

    let first = ensure_recipe_in_cookbook(
        &store,
        &vocabulary,
        &tomato_pasta(),
        EnsureOptions::default(),
    )
    .await
    .unwrap();
    let second = ensure_recipe_in_cookbook(
        &store,
        &vocabulary,
        &tomato_pasta(),
        EnsureOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.recipe_signature, second.recipe_signature);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn duplicate_submission_content_is_discarded() {
    let store = MemoryRecipeStore::new();
    let vocabulary = PreferenceVocabulary::standard();

    ensure_recipe_in_cookbook(
        &store,
        &vocabulary,
        &tomato_pasta(),
        EnsureOptions::default(),
    )
    .await
    .unwrap();

    // Same content modulo casing/whitespace, so the same signature
    let mut restyled = tomato_pasta();
    restyled.title = "  TOMATO pasta ".to_string();

    let merged =
        ensure_recipe_in_cookbook(&store, &vocabulary, &restyled, EnsureOptions::default())
            .await
            .unwrap();

    // Caller sees its own content with the stored identity overlaid
    assert_eq!(merged.title, "  TOMATO pasta ");

    // The stored record keeps the first writer's content forever
    let stored = store.get_by_id(merged.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Tomato Pasta");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn existing_likes_survive_a_duplicate_submission() {
    let store = MemoryRecipeStore::new();
    let vocabulary = PreferenceVocabulary::standard();

    let first = ensure_recipe_in_cookbook(
        &store,
        &vocabulary,
        &tomato_pasta(),
        EnsureOptions::default(),
    )
    .await
    .unwrap();
    store.increment_likes(first.id, 5).await.unwrap();

    let second = ensure_recipe_in_cookbook(
        &store,
        &vocabulary,
        &tomato_pasta(),
        EnsureOptions::default(),
    )
    .await
    .unwrap();
    assert_eq!(second.likes, 5);
}

#[tokio::test]
async fn seed_flag_is_persisted() {
    let store = MemoryRecipeStore::new();
    let vocabulary = PreferenceVocabulary::standard();

    let recipe = ensure_recipe_in_cookbook(
        &store,
        &vocabulary,
        &tomato_pasta(),
        EnsureOptions { is_seed: true },
    )
    .await
    .unwrap();

    assert!(recipe.is_seed_recipe);
    let seeds = store.list_seed_recipes().await.unwrap();
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].id, recipe.id);
}

#[tokio::test]
async fn batch_with_duplicates_shares_ids() {
    // Scenario: items 1 and 3 are content-duplicates, item 2 is distinct
    let store = MemoryRecipeStore::new();
    let vocabulary = PreferenceVocabulary::standard();

    let batch = vec![
        tomato_pasta(),
        draft("Green Curry", 4, vec![Ingredient::new("rice", 300.0, "g")]),
        tomato_pasta(),
    ];

    let synced = sync_generated_recipes(&store, &vocabulary, &batch).await.unwrap();

    assert_eq!(synced.len(), 3);
    assert_eq!(synced[0].id, synced[2].id);
    assert_ne!(synced[0].id, synced[1].id);
    assert_eq!(store.len(), 2);

    // Results come back in input order
    assert_eq!(synced[0].title, "Tomato Pasta");
    assert_eq!(synced[1].title, "Green Curry");
}

/// Store wrapper that fails `create` once, on demand.
struct FlakyStore {
    inner: MemoryRecipeStore,
    fail_next_create: AtomicBool,
}

#[async_trait]
impl RecipeStore for FlakyStore {
    async fn find_by_signature(&self, signature: &str) -> Result<Option<Recipe>> {
        self.inner.find_by_signature(signature).await
    }

    async fn create(&self, payload: NewRecipe) -> Result<RecipeId> {
        if self.fail_next_create.swap(false, Ordering::SeqCst) {
            anyhow::bail!("store unavailable");
        }
        self.inner.create(payload).await
    }

    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>> {
        self.inner.get_by_id(id).await
    }

    async fn list_by_cuisine(&self, cuisine: &str) -> Result<Vec<Recipe>> {
        self.inner.list_by_cuisine(cuisine).await
    }

    async fn list_seed_recipes(&self) -> Result<Vec<Recipe>> {
        self.inner.list_seed_recipes().await
    }

    async fn list_all(&self) -> Result<Vec<Recipe>> {
        self.inner.list_all().await
    }

    async fn increment_likes(&self, id: RecipeId, delta: i64) -> Result<()> {
        self.inner.increment_likes(id, delta).await
    }
}

#[tokio::test]
async fn batch_failure_leaves_earlier_items_persisted() {
    let vocabulary = PreferenceVocabulary::standard();
    let memory = MemoryRecipeStore::new();
    let store = FlakyStore {
        inner: memory.clone(),
        fail_next_create: AtomicBool::new(false),
    };

    // Item 1 succeeds, item 2's create fails, item 3 is never attempted
    let batch = vec![
        tomato_pasta(),
        draft("Green Curry", 4, vec![Ingredient::new("rice", 300.0, "g")]),
        draft("Miso Soup", 1, vec![Ingredient::new("tofu", 100.0, "g")]),
    ];

    // Arm the failure after the first create by pre-syncing item 1
    sync_generated_recipes(&store, &vocabulary, &batch[..1]).await.unwrap();
    store.fail_next_create.store(true, Ordering::SeqCst);

    let result = sync_generated_recipes(&store, &vocabulary, &batch).await;
    assert!(result.is_err());

    // Item 1 was already persisted; neither later item landed
    assert_eq!(memory.len(), 1);
}
