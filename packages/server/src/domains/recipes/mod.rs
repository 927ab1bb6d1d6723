//! Recipe identity & synchronization.
//!
//! A freshly generated recipe arrives without a key. Identity is derived
//! from content: preferences are canonicalized against a shared vocabulary,
//! a deterministic signature is computed over the semantic fields, and the
//! recipe is reconciled against the cookbook store so duplicates collapse
//! onto a single record. The global likes counter on that record is
//! maintained through the store's atomic increment.

pub mod actions;
pub mod data;
pub mod models;
pub mod signature;
pub mod store;
pub mod vocabulary;

pub use models::*;
pub use vocabulary::{AxisVocabulary, PreferenceVocabulary};
