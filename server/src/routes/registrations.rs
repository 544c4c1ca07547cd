//! Registration API routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use schema::{RegisterAck, Registration, RegistrationForm};

use crate::services::registration::{self, RegistrationError};
use crate::state::AppState;

/// `POST /api/register`: validate and store a new registration.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegistrationForm>,
) -> Result<(StatusCode, Json<RegisterAck>), Response> {
    let stored = registration::create_registration(&state.pool, &body)
        .await
        .map_err(registration_error_response)?;

    tracing::info!(id = stored.id, track = stored.interested_track.as_str(), "registration stored");
    Ok((
        StatusCode::CREATED,
        Json(RegisterAck { message: "Registration successful".to_owned(), id: stored.id }),
    ))
}

/// `GET /api/registrations`: list all stored registrations.
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Registration>>, Response> {
    let rows = registration::list_registrations(&state.pool)
        .await
        .map_err(registration_error_response)?;

    Ok(Json(rows))
}

/// Map service failures onto HTTP responses. Validation failures carry their
/// field-keyed messages, a duplicate email carries its message, anything
/// else is an opaque 500.
pub(crate) fn registration_error_response(err: RegistrationError) -> Response {
    match err {
        RegistrationError::Invalid(errors) => {
            (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "errors": errors }))).into_response()
        }
        RegistrationError::DuplicateEmail => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "message": "Email already registered" })),
        )
            .into_response(),
        RegistrationError::Database(err) => {
            tracing::error!(error = %err, "registration database failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "registrations_test.rs"]
mod tests;
