//! Module for the profile API.
//!
//! Creation, lookup and vCard download of profiles over HTTP.

pub mod handlers;
pub mod routes;
