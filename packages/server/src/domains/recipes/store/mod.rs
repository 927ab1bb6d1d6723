//! Storage boundary for the cookbook.
//!
//! The engine is storage-agnostic: any backend providing these primitives
//! satisfies it. `PgRecipeStore` is the production adapter;
//! `MemoryRecipeStore` backs tests and local development.

use anyhow::Result;
use async_trait::async_trait;

use crate::common::RecipeId;
use crate::domains::recipes::models::{NewRecipe, Recipe};

pub mod memory;
pub mod postgres;

pub use memory::MemoryRecipeStore;
pub use postgres::PgRecipeStore;

/// Minimal persistent-collection operations required by the engine.
///
/// `likes` values handed back by any method are clamped at 0; the raw
/// stored counter may transiently disagree under concurrent decrements.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Equality lookup on the signature. If multiple records share a
    /// signature (possible under the lookup-then-create race), the first
    /// in store order is returned.
    async fn find_by_signature(&self, signature: &str) -> Result<Option<Recipe>>;

    /// Create a new record and return its store-assigned id. The store
    /// also sets `created_at`.
    async fn create(&self, payload: NewRecipe) -> Result<RecipeId>;

    async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>>;

    /// Recipes whose canonical cuisine equals `cuisine`.
    async fn list_by_cuisine(&self, cuisine: &str) -> Result<Vec<Recipe>>;

    /// Curated seed recipes only.
    async fn list_seed_recipes(&self) -> Result<Vec<Recipe>>;

    /// The whole cookbook, in store order.
    async fn list_all(&self) -> Result<Vec<Recipe>>;

    /// Apply a signed delta to the like counter with server-side
    /// read-modify-write atomicity. The engine never reads-then-writes
    /// the authoritative counter itself.
    async fn increment_likes(&self, id: RecipeId, delta: i64) -> Result<()>;
}
