//! Registration form state and submission state machine.
//!
//! DESIGN
//! ======
//! `try_begin_submit` is the single gate onto the wire: it normalizes,
//! validates, and only then hands back a payload while flipping the phase to
//! `Submitting`. Re-entry while `Submitting` or after `Success` returns
//! `None`, which is the double-submit guard.

use schema::{FieldErrors, RegistrationForm, Track, validate_registration};

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

/// Lifecycle of one submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Form fields are editable; submit is armed.
    #[default]
    Editing,
    /// A request is in flight; further submits are no-ops.
    Submitting,
    /// Terminal: the registration was stored.
    Success,
}

/// Reactive form state for the register page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub department: String,
    pub role: String,
    /// `None` until the user picks an option.
    pub interested_track: Option<Track>,
    pub newsletter: bool,
    pub terms: bool,
    /// Messages from the last failed validation, keyed by field.
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
}

impl RegisterFormState {
    /// Wire payload built from the current fields. An unselected track maps
    /// to `Track::Unknown`, which validation rejects.
    #[must_use]
    pub fn payload(&self) -> RegistrationForm {
        RegistrationForm {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            department: self.department.clone(),
            role: self.role.clone(),
            interested_track: self.interested_track.unwrap_or_default(),
            newsletter: self.newsletter,
            terms: self.terms,
        }
    }

    /// Attempt to start a submission.
    ///
    /// From `Editing`: validates the normalized payload. On failure the
    /// field errors are stored and the phase stays `Editing`; on success
    /// errors clear, the phase moves to `Submitting`, and the payload to
    /// POST is returned. From any other phase this is a no-op.
    pub fn try_begin_submit(&mut self) -> Option<RegistrationForm> {
        if self.phase != SubmitPhase::Editing {
            return None;
        }
        let payload = self.payload().normalized();
        match validate_registration(&payload) {
            Ok(()) => {
                self.errors.clear();
                self.phase = SubmitPhase::Submitting;
                Some(payload)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// The in-flight request succeeded; `Success` is terminal.
    pub fn finish_success(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Success;
        }
    }

    /// The in-flight request failed; back to `Editing` for a retry.
    pub fn finish_failure(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Editing;
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Error message for one field, if the last validation flagged it.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.get(field).cloned()
    }

    /// Value attribute for the track `<select>`; empty when nothing is
    /// selected so the placeholder option stays active.
    #[must_use]
    pub fn track_value(&self) -> String {
        self.interested_track.map(|t| t.as_str().to_owned()).unwrap_or_default()
    }

    /// Store a `<select>` change; an empty value clears the selection.
    pub fn set_track(&mut self, value: &str) {
        self.interested_track = if value.is_empty() { None } else { Some(Track::parse(value)) };
    }
}
