//! Deterministic content signatures for recipes.
//!
//! The signature is the recipe's content-addressed identity: a SHA-256
//! digest over a canonical preimage built from the semantic fields only.
//! Identical logical content yields an identical signature regardless of
//! ingredient ordering, field casing, or benign whitespace, across runs,
//! platforms, and locales. The signature never depends on `id`, `likes`,
//! `created_at`, or `is_seed_recipe`.

use sha2::{Digest, Sha256};

use crate::domains::recipes::models::{Ingredient, RecipeDraft};
use crate::domains::recipes::vocabulary::PreferenceVocabulary;

/// Compute the content signature for a draft.
pub fn compute_signature(draft: &RecipeDraft, vocabulary: &PreferenceVocabulary) -> String {
    let preimage = signature_preimage(draft, vocabulary);
    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Build the canonical preimage the signature is computed over.
///
/// Fixed-order `||` join of title, the three canonical preference values,
/// the cooks amount, and the sorted ingredient key.
pub fn signature_preimage(draft: &RecipeDraft, vocabulary: &PreferenceVocabulary) -> String {
    let preferences = vocabulary.canonicalize(&draft.preferences);

    [
        draft.title.trim().to_lowercase(),
        preferences.cuisine,
        preferences.cooking_time,
        preferences.diet_preferences,
        draft.cooks_amount.to_string(),
        ingredient_key(draft),
    ]
    .join("||")
}

/// One fragment per ingredient across both lists, lexicographically sorted
/// so source ordering never affects the result, joined with `;`.
fn ingredient_key(draft: &RecipeDraft) -> String {
    let mut fragments: Vec<String> = draft
        .ingredients
        .iter_all()
        .map(ingredient_fragment)
        .collect();
    fragments.sort();
    fragments.join(";")
}

/// `"{name}|{serving}|{unit}"` with the name lower-cased and trimmed, the
/// serving size defaulted to 0 when missing or negative, and the unit taken
/// from the abbreviation, falling back to the unit name, else empty.
fn ingredient_fragment(ingredient: &Ingredient) -> String {
    let name = ingredient.name.trim().to_lowercase();

    let serving = if ingredient.serving_size.is_finite() && ingredient.serving_size > 0.0 {
        ingredient.serving_size
    } else {
        0.0
    };

    let abbreviation = ingredient.unit.abbreviation.trim();
    let unit = if !abbreviation.is_empty() {
        abbreviation.to_lowercase()
    } else {
        ingredient.unit.name.trim().to_lowercase()
    };

    format!("{}|{}|{}", name, serving, unit)
}
