//! Core `adapters` crate for abstracting profile persistence.
//!
//! This crate defines the `ProfileStore` trait, which outlines the storage
//! operations the profile service relies on, together with the domain models
//! shared between the store implementations and the HTTP layer. The backend
//! provides the PostgreSQL implementation; an in-memory one lives here.

pub mod errors;
pub mod memory;
pub mod models;

use async_trait::async_trait;

pub use errors::StoreError;
pub use memory::InMemoryStore;
pub use models::{NewProfile, Profile, ProfileField};

/// Storage backend for profiles.
///
/// Implementations own the canonical copy of every profile. Records are
/// written once and never updated, so callers need no locking.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Persists `profile` under `id` in a single atomic insert.
    async fn insert_profile(&self, id: &str, profile: &NewProfile) -> Result<(), StoreError>;

    /// Looks up a profile by identifier, returning `StoreError::NotFound` if absent.
    async fn find_profile(&self, id: &str) -> Result<Profile, StoreError>;
}
