//! Typed UUID wrappers for compile-time type safety.
//!
//! `Id<T>` wraps a `uuid::Uuid` with a phantom entity marker so IDs of
//! different entities cannot be mixed up at compile time.
//!
//! # Example
//!
//! ```rust
//! use cookbook_core::common::id::Id;
//!
//! struct Recipe;
//! type RecipeId = Id<Recipe>;
//!
//! let a = RecipeId::new();
//! let b = RecipeId::new();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// A typed wrapper around `Uuid`.
///
/// The type parameter `T` is the entity type this ID belongs to. IDs with
/// different `T` parameters are incompatible at compile time.
#[repr(transparent)]
pub struct Id<T>(Uuid, PhantomData<fn() -> T>);

impl<T> Id<T> {
    /// Creates a new random (v4) ID.
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4(), PhantomData)
    }

    /// Creates an `Id` from a raw `Uuid` (database loads, deserialization).
    #[inline]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    /// Returns the inner `Uuid`.
    #[inline]
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Returns a reference to the inner `Uuid`.
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parses an `Id` from a string (API path/query inputs).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?, PhantomData))
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> From<Uuid> for Id<T> {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

// ============================================================================
// sqlx support
// ============================================================================

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};

impl<T> Type<Postgres> for Id<T> {
    fn type_info() -> PgTypeInfo {
        <Uuid as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <Uuid as Type<Postgres>>::compatible(ty)
    }
}

impl<T> Encode<'_, Postgres> for Id<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <Uuid as Encode<Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<T> Decode<'_, Postgres> for Id<T> {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        <Uuid as Decode<Postgres>>::decode(value).map(Self::from_uuid)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Recipe;

    type RecipeId = Id<Recipe>;

    #[test]
    fn new_creates_unique_ids() {
        let id1 = RecipeId::new();
        let id2 = RecipeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn parse_round_trips_through_display() {
        let id = RecipeId::new();
        let parsed = RecipeId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_invalid_input() {
        assert!(RecipeId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let id = RecipeId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: RecipeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
