//! Registration service: validation, insert, and listing.
//!
//! DESIGN
//! ======
//! The full submission pipeline runs here: normalize, validate with the
//! shared schema rules, then insert. Clients validate with the same rules
//! before posting, so a rejection from this module means the caller bypassed
//! the form (or the payloads disagree on an edge case, which the shared
//! crate exists to prevent).
//!
//! ERROR HANDLING
//! ==============
//! Duplicate emails surface as a dedicated variant rather than a generic
//! database error; the unique index on `registrations.email` is the source
//! of truth, so concurrent submissions of the same address cannot race past
//! the check.

use chrono::{DateTime, Utc};
use schema::{FieldErrors, Registration, RegistrationForm, Track, validate_registration};
use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("invalid registration: {0:?}")]
    Invalid(FieldErrors),
    #[error("email already registered")]
    DuplicateEmail,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Normalize, validate, and store a submitted registration.
///
/// Returns the stored record with its server-assigned `id` and
/// `created_at`.
///
/// # Errors
///
/// Returns `Invalid` with field-keyed messages if validation fails,
/// `DuplicateEmail` if the email already has a registration, and a database
/// error for any other insert failure.
pub async fn create_registration(
    pool: &PgPool,
    form: &RegistrationForm,
) -> Result<Registration, RegistrationError> {
    let form = form.normalized();
    validate_registration(&form).map_err(RegistrationError::Invalid)?;

    let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
        "INSERT INTO registrations (name, email, company, department, role, interested_track, newsletter)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id, created_at",
    )
    .bind(&form.name)
    .bind(&form.email)
    .bind(&form.company)
    .bind(&form.department)
    .bind(&form.role)
    .bind(form.interested_track.as_str())
    .bind(form.newsletter)
    .fetch_one(pool)
    .await
    .map_err(classify_insert_error)?;

    Ok(Registration {
        id,
        name: form.name,
        email: form.email,
        company: form.company,
        department: form.department,
        role: form.role,
        interested_track: form.interested_track,
        newsletter: form.newsletter,
        created_at,
    })
}

/// List all stored registrations in insertion order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_registrations(pool: &PgPool) -> Result<Vec<Registration>, RegistrationError> {
    let rows = sqlx::query_as::<
        _,
        (i64, String, String, String, String, String, String, bool, DateTime<Utc>),
    >(
        "SELECT id, name, email, company, department, role, interested_track, newsletter, created_at
         FROM registrations
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(id, name, email, company, department, role, track, newsletter, created_at)| {
                Registration {
                    id,
                    name,
                    email,
                    company,
                    department,
                    role,
                    interested_track: Track::parse(&track),
                    newsletter,
                    created_at,
                }
            },
        )
        .collect())
}

fn classify_insert_error(err: sqlx::Error) -> RegistrationError {
    if err.as_database_error().is_some_and(|db| db.is_unique_violation()) {
        RegistrationError::DuplicateEmail
    } else {
        RegistrationError::Database(err)
    }
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
