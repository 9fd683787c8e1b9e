//! Custom error types specific to the `adapters` crate.
//!
//! Every store implementation reports failures through `StoreError`, so the
//! service layer only has to distinguish a missing profile from a store that
//! could not be reached or queried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile {0} not found")]
    NotFound(String),
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}
