//! Module for core business logic services.
//!
//! This module encapsulates the profile service, which orchestrates identifier
//! generation, the profile store and vCard rendering for the API handlers.

pub mod id;
pub mod profile_service;
pub mod vcard;

pub use profile_service::ProfileService;
