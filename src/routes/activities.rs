//! Activity listing and signup routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::directory::{self, DirectoryError};
use crate::state::{AppState, Directory};

#[derive(Deserialize)]
pub struct SignupQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Request-boundary error, rendered as `{"detail": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("Missing email query parameter")]
    MissingEmail,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Directory(DirectoryError::ActivityNotFound) => StatusCode::NOT_FOUND,
            Self::Directory(DirectoryError::AlreadySignedUp | DirectoryError::NotSignedUp) => StatusCode::BAD_REQUEST,
            Self::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// `GET /activities` — every activity keyed by name.
pub async fn list_activities(State(state): State<AppState>) -> Json<Directory> {
    Json(directory::list_activities(&state).await)
}

/// `POST /activities/:name/signup?email=` — add a student to a roster.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = query.email.ok_or(ApiError::MissingEmail)?;

    let message = directory::signup(&state, &name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

/// `DELETE /activities/:name/participants/:email` — remove a student from a roster.
pub async fn unregister(
    State(state): State<AppState>,
    Path((name, email)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = directory::unregister(&state, &name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
