//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the activity API and the browser front-end under a single Axum
//! router. The front-end is plain static files served at `/static`; `/`
//! redirects to its index page.

pub mod activities;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: API routes + static front-end.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(redirect_root_to_index))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{name}/signup", post(activities::signup))
        .route("/activities/{name}/participants/{email}", delete(activities::unregister))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn redirect_root_to_index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
