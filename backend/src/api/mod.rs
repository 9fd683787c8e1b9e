//! Central module for organizing the application's main API endpoints.
//!
//! All profile endpoints are mounted under `/api`; the shared request
//! state and the JSON extractor live alongside them.

pub mod json;
pub mod profile;

use axum::{routing::get, Router};

use crate::middleware;
use crate::services::ProfileService;

#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileService,
}

pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(root_handler))
        .nest("/api", profile::routes::profile_router())
        .with_state(state);

    middleware::apply(router)
}

async fn root_handler() -> &'static str {
    "Profile card service"
}
