//! In-memory `ProfileStore` implementation.
//!
//! Selected with the `memory://` store URL and used by the backend tests.
//! Contents are lost when the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::{NewProfile, Profile};
use crate::ProfileStore;

#[derive(Default)]
pub struct InMemoryStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn insert_profile(&self, id: &str, profile: &NewProfile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(id) {
            // Mirrors the primary key violation a database would report.
            return Err(StoreError::Unavailable(format!("duplicate profile id {id}")));
        }
        profiles.insert(id.to_string(), Profile::from_new(id, profile.clone()));
        debug!("stored profile {id} in memory");
        Ok(())
    }

    async fn find_profile(&self, id: &str) -> Result<Profile, StoreError> {
        self.profiles
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileField;

    fn sample() -> NewProfile {
        NewProfile {
            name: "Jane Doe".into(),
            fields: vec![
                ProfileField::new("website", "https://jane.example"),
                ProfileField::new("phone", "555-1234"),
            ],
        }
    }

    #[tokio::test]
    async fn insert_then_find_preserves_contents() {
        let store = InMemoryStore::new();
        store.insert_profile("abc", &sample()).await.unwrap();

        let profile = store.find_profile("abc").await.unwrap();
        assert_eq!(profile.id, "abc");
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.fields, sample().fields);
    }

    #[tokio::test]
    async fn find_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.find_profile("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected_without_overwriting() {
        let store = InMemoryStore::new();
        store.insert_profile("abc", &sample()).await.unwrap();

        let other = NewProfile {
            name: "Someone Else".into(),
            fields: vec![],
        };
        assert!(store.insert_profile("abc", &other).await.is_err());
        assert_eq!(store.find_profile("abc").await.unwrap().name, "Jane Doe");
        assert_eq!(store.len().await, 1);
    }
}
