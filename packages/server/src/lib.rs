// Cookbook AI - API Core
//
// Backend for the AI recipe generator. Generated recipes have no natural
// primary key, so identity is derived from content: the engine under
// domains/recipes canonicalizes preferences, computes a deterministic
// content signature, and reconciles each recipe against the shared
// cookbook store so that semantically identical recipes collapse onto a
// single stored record with one global likes counter.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
