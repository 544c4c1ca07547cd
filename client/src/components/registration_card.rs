//! Card for one stored registration on the admin dashboard.
//!
//! DESIGN
//! ======
//! Mirrors the dashboard listing layout: identity on the left, track badge
//! plus submission metadata on the right. Display-only, no interactivity.

use leptos::prelude::*;
use schema::Registration;

use crate::components::track_badge::TrackBadge;
use crate::util::date::locale_date;

#[cfg(test)]
#[path = "registration_card_test.rs"]
mod registration_card_test;

/// Affiliation line combining company, department, and role.
#[must_use]
pub fn affiliation_line(registration: &Registration) -> String {
    format!(
        "{} • {} • {}",
        registration.company, registration.department, registration.role
    )
}

#[component]
pub fn RegistrationCard(registration: Registration) -> impl IntoView {
    let affiliation = affiliation_line(&registration);
    let submitted = locale_date(&registration.created_at);
    let track = registration.interested_track;
    let newsletter = registration.newsletter;

    view! {
        <div class="registration-card">
            <div class="registration-card__identity">
                <h3 class="registration-card__name">{registration.name}</h3>
                <p class="registration-card__email">{registration.email}</p>
                <p class="registration-card__affiliation">{affiliation}</p>
            </div>
            <div class="registration-card__meta">
                <TrackBadge track=track />
                <Show when=move || newsletter>
                    <span class="badge badge--secondary">"Newsletter"</span>
                </Show>
                <span class="registration-card__date">{submitted}</span>
            </div>
        </div>
    }
}
