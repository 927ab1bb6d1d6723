//! Favorite-toggle semantics over the global like counter.
//!
//! Favorite state itself ("did this user like it") is client-local, keyed
//! by signature, and never stored here; this engine only maintains the
//! aggregate counter.

use anyhow::Result;
use tracing::info;

use crate::domains::recipes::models::{NewRecipe, RecipeDraft};
use crate::domains::recipes::store::RecipeStore;
use crate::domains::recipes::vocabulary::PreferenceVocabulary;

/// Apply a favorite toggle to the recipe's backing record.
///
/// Locates the record by content signature. When none exists yet, one is
/// created with an initial count of 1 for a like and 0 for an unlike (an
/// unlike of a never-seen recipe persists it rather than erroring), and
/// the new id is assigned onto `draft` so the caller's in-memory object
/// stays consistent. When a record exists, the signed delta goes through
/// the store's atomic increment.
///
/// The returned count is advisory (`max(stored + delta, 0)`), for
/// optimistic display only; it can diverge from the server's true
/// post-increment value under concurrent togglers near zero. Reconcile by
/// re-reading the record on next load, never by persisting this value.
pub async fn update_likes_for_recipe(
    store: &dyn RecipeStore,
    vocabulary: &PreferenceVocabulary,
    draft: &mut RecipeDraft,
    is_favorite: bool,
) -> Result<i64> {
    let signature = draft.signature(vocabulary);
    let delta: i64 = if is_favorite { 1 } else { -1 };

    if let Some(existing) = store.find_by_signature(&signature).await? {
        store.increment_likes(existing.id, delta).await?;

        let advisory = (existing.likes + delta).max(0);
        info!(
            recipe_id = %existing.id,
            delta,
            advisory_likes = advisory,
            "Applied like delta"
        );
        return Ok(advisory);
    }

    let initial_likes: i64 = if is_favorite { 1 } else { 0 };
    let preferences = vocabulary.canonicalize(&draft.preferences);
    let payload = NewRecipe::from_draft(draft, signature, preferences, initial_likes, false);
    let id = store.create(payload).await?;
    draft.id = Some(id);

    info!(
        recipe_id = %id,
        likes = initial_likes,
        "Recipe not in cookbook yet, created from like toggle"
    );
    Ok(initial_likes)
}
