//! Creation, lookup and vCard export of profiles.
//!
//! The service holds no state of its own beyond a handle to the store, so it
//! is cheap to clone into every request.

use std::sync::Arc;

use adapters::{NewProfile, Profile, ProfileStore, StoreError};
use tracing::info;

use super::id::generate_profile_id;
use super::vcard::{self, VCard};

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Stores `profile` verbatim under a freshly generated identifier.
    ///
    /// Store failures are returned as-is; nothing is retried.
    pub async fn create_profile(&self, profile: NewProfile) -> Result<String, StoreError> {
        let id = generate_profile_id();
        self.store.insert_profile(&id, &profile).await?;
        info!("created profile {id} with {} fields", profile.fields.len());
        Ok(id)
    }

    pub async fn get_profile(&self, id: &str) -> Result<Profile, StoreError> {
        self.store.find_profile(id).await
    }

    pub async fn generate_vcard(&self, id: &str) -> Result<VCard, StoreError> {
        let profile = self.store.find_profile(id).await?;
        Ok(vcard::render(&profile))
    }
}
