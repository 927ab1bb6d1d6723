//! Upsert coordination: "ensure this recipe exists exactly once".
//!
//! Lookup-then-create is not transactional. Two concurrent ensure calls
//! for the same new signature can both observe "not found" and both
//! create a record. This is a known, accepted race (see DESIGN.md);
//! sequential batch processing only prevents duplicates within one batch.

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::domains::recipes::models::{NewRecipe, Recipe, RecipeDraft};
use crate::domains::recipes::store::RecipeStore;
use crate::domains::recipes::vocabulary::PreferenceVocabulary;

/// Options for [`ensure_recipe_in_cookbook`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnsureOptions {
    /// Mark the record as curated seed content on first persist.
    pub is_seed: bool,
}

/// Reconcile one recipe against the cookbook.
///
/// Computes the draft's signature and looks it up. If a record already
/// exists, the incoming content is returned overlaid with the stored
/// identity (`id`, signature, likes) and the stored content stays
/// untouched - the first successful writer's content wins permanently.
/// Otherwise a new record is created.
///
/// Store failures propagate unhandled; the caller decides about retries.
pub async fn ensure_recipe_in_cookbook(
    store: &dyn RecipeStore,
    vocabulary: &PreferenceVocabulary,
    draft: &RecipeDraft,
    opts: EnsureOptions,
) -> Result<Recipe> {
    let signature = draft.signature(vocabulary);
    let preferences = vocabulary.canonicalize(&draft.preferences);

    if let Some(existing) = store.find_by_signature(&signature).await? {
        info!(
            recipe_id = %existing.id,
            title = %draft.title,
            "Recipe already in cookbook, reusing stored record"
        );
        return Ok(Recipe::adopt_existing(draft, preferences, &existing));
    }

    let likes = draft.likes.unwrap_or(0).max(0);
    let payload = NewRecipe::from_draft(
        draft,
        signature.clone(),
        preferences.clone(),
        likes,
        opts.is_seed,
    );
    let id = store.create(payload).await?;

    info!(
        recipe_id = %id,
        title = %draft.title,
        is_seed = opts.is_seed,
        "Recipe added to cookbook"
    );

    // created_at here is advisory; the store's timestamp is authoritative
    // on the next read.
    Ok(Recipe::newly_persisted(
        draft,
        preferences,
        id,
        signature,
        likes,
        opts.is_seed,
        Utc::now(),
    ))
}

/// Reconcile a freshly generated batch, strictly sequentially and in input
/// order.
///
/// If item *k* fails, items before it are already persisted and items
/// after it are not attempted; the error propagates as-is.
pub async fn sync_generated_recipes(
    store: &dyn RecipeStore,
    vocabulary: &PreferenceVocabulary,
    drafts: &[RecipeDraft],
) -> Result<Vec<Recipe>> {
    let mut synced = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let recipe =
            ensure_recipe_in_cookbook(store, vocabulary, draft, EnsureOptions::default()).await?;
        synced.push(recipe);
    }

    info!(count = synced.len(), "Synced generated recipes");
    Ok(synced)
}
