//! Shared registration contract used by both `server` and `client`.
//!
//! This crate owns the data model that crosses the HTTP boundary: the
//! submission payload, the stored record, the track enum, and the validation
//! pipeline producing field-keyed error messages. Both sides run the same
//! rules, so a payload that passes locally is exactly the payload the server
//! accepts.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Field name mapped to the first human-readable violation message.
///
/// `BTreeMap` keeps iteration (and serialized output) in field-name order,
/// so error rendering is deterministic.
pub type FieldErrors = BTreeMap<String, String>;

// =============================================================================
// TRACK
// =============================================================================

/// Conference track a participant registers interest in.
///
/// `Unknown` is both the serde catch-all and the `Default`: stored records
/// with an unrecognized value still deserialize instead of failing the whole
/// listing, and an absent selection is representable without an `Option`.
/// `Unknown` never passes validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    /// AI & Machine Learning.
    AiMl,
    /// Software Engineering.
    SoftwareEngineering,
    /// DevOps & Cloud.
    DevopsCloud,
    /// All tracks.
    All,
    /// Catch-all for unrecognized wire values.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Track {
    /// The four selectable tracks, in form display order.
    pub const SELECTABLE: [Self; 4] =
        [Self::AiMl, Self::SoftwareEngineering, Self::DevopsCloud, Self::All];

    /// Kebab-case wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AiMl => "ai-ml",
            Self::SoftwareEngineering => "software-engineering",
            Self::DevopsCloud => "devops-cloud",
            Self::All => "all",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire value; anything unrecognized maps to `Unknown`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "ai-ml" => Self::AiMl,
            "software-engineering" => Self::SoftwareEngineering,
            "devops-cloud" => Self::DevopsCloud,
            "all" => Self::All,
            _ => Self::Unknown,
        }
    }

    /// Display name used in form options and landing copy.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AiMl => "AI & Machine Learning",
            Self::SoftwareEngineering => "Software Engineering",
            Self::DevopsCloud => "DevOps & Cloud",
            Self::All => "All Tracks",
            Self::Unknown => "Other",
        }
    }
}

// =============================================================================
// REGISTRATION FORM
// =============================================================================

/// Submission payload for `POST /api/register`.
///
/// Callers run [`RegistrationForm::normalized`] before
/// [`validate_registration`]; the length and email rules apply to the
/// trimmed values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationForm {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email must be less than 255 characters")
    )]
    pub email: String,
    #[validate(length(min = 2, max = 100, message = "Company must be between 2 and 100 characters"))]
    pub company: String,
    #[validate(
        length(min = 2, max = 100, message = "Department must be between 2 and 100 characters")
    )]
    pub department: String,
    #[validate(length(min = 2, max = 100, message = "Role must be between 2 and 100 characters"))]
    pub role: String,
    /// Selected track. Absent on the wire means [`Track::Unknown`], which
    /// never validates.
    #[serde(default)]
    #[validate(custom(function = track_selected, message = "Please select a track"))]
    pub interested_track: Track,
    /// Newsletter opt-in, never required.
    #[serde(default)]
    pub newsletter: bool,
    /// Terms acceptance. Must be `true` to submit; gate only, not persisted.
    #[serde(default)]
    #[validate(custom(function = terms_accepted, message = "You must accept the terms and conditions"))]
    pub terms: bool,
}

impl RegistrationForm {
    /// Copy of the form with every text field trimmed.
    ///
    /// Trimming runs before validation, so padded-but-valid input is
    /// accepted and stored without the padding.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            company: self.company.trim().to_owned(),
            department: self.department.trim().to_owned(),
            role: self.role.trim().to_owned(),
            interested_track: self.interested_track,
            newsletter: self.newsletter,
            terms: self.terms,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn track_selected(track: &Track) -> Result<(), ValidationError> {
    if *track == Track::Unknown {
        return Err(ValidationError::new("track_selected"));
    }
    Ok(())
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn terms_accepted(accepted: &bool) -> Result<(), ValidationError> {
    if *accepted {
        Ok(())
    } else {
        Err(ValidationError::new("terms_accepted"))
    }
}

/// Validate a normalized form, reporting every failing field at once.
///
/// # Errors
///
/// Returns field name -> message for each violated rule. Only the first
/// message per field is kept; rules run in declaration order.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), FieldErrors> {
    form.validate().map_err(|errors| flatten(&errors))
}

fn flatten(errors: &validator::ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, failures) in errors.field_errors() {
        let message = failures
            .iter()
            .find_map(|failure| failure.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| format!("{field} is invalid"));
        fields.insert(field.to_string(), message);
    }
    fields
}

// =============================================================================
// STORED RECORD
// =============================================================================

/// A stored registration as returned by `GET /api/registrations`.
///
/// `terms` is a submission gate, not data, so it is absent here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Server-assigned sequential id.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub department: String,
    pub role: String,
    pub interested_track: Track,
    pub newsletter: bool,
    /// Server-assigned creation time, RFC 3339 on the wire.
    pub created_at: DateTime<Utc>,
}

/// Success body of `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAck {
    /// Human-readable confirmation line.
    pub message: String,
    /// Id of the stored record.
    pub id: i64,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
