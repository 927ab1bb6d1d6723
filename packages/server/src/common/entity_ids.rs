//! Typed ID definitions for domain entities.
//!
//! Type aliases over [`Id`] give compile-time type safety for ID usage
//! throughout the application.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Recipe entities (persisted cookbook records).
pub struct Recipe;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Recipe entities.
pub type RecipeId = Id<Recipe>;
