//! Admin dashboard listing stored registrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full listing once on mount and renders one of four phases:
//! loading, empty, error, populated. A failed fetch renders the error
//! notice, never the empty state.

use leptos::prelude::*;

use crate::components::registration_card::RegistrationCard;
use crate::state::admin::{AdminState, ListPhase};

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// Panel heading with the number of loaded registrations.
#[must_use]
pub fn count_label(count: usize) -> String {
    format!("Registrations ({count})")
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let admin = RwSignal::new(AdminState::default());

    #[cfg(feature = "hydrate")]
    {
        let toasts =
            expect_context::<RwSignal<crate::components::toast::ToastQueue>>();
        Effect::new(move || {
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_registrations().await;
                if let Err(e) = &outcome {
                    log::error!("failed to load registrations: {e}");
                    crate::components::toast::push_toast(
                        toasts,
                        crate::components::toast::ToastKind::Error,
                        "Error",
                        "Failed to load registrations",
                    );
                }
                admin.update(|state| state.resolve_fetch(outcome));
            });
        });
    }

    view! {
        <div class="admin-page">
            <header class="admin-header">
                <a class="admin-header__back" href="/">
                    "Back to Home"
                </a>
                <div>
                    <h1 class="admin-header__title">"Admin Dashboard"</h1>
                    <p class="admin-header__subtitle">"View all registrations"</p>
                </div>
            </header>

            <section class="admin-panel">
                <h2 class="admin-panel__title">{move || count_label(admin.get().count())}</h2>
                <p class="admin-panel__subtitle">"All registered participants for DevMeet 2025"</p>

                {move || match admin.get().phase {
                    ListPhase::Loading => {
                        view! { <p class="admin-panel__notice">"Loading registrations..."</p> }
                            .into_any()
                    }
                    ListPhase::Empty => {
                        view! {
                            <p class="admin-panel__notice admin-panel__notice--muted">
                                "No registrations found"
                            </p>
                        }
                            .into_any()
                    }
                    ListPhase::Error => {
                        view! {
                            <p class="admin-panel__notice admin-panel__notice--error">
                                "Failed to load registrations"
                            </p>
                        }
                            .into_any()
                    }
                    ListPhase::Populated => {
                        view! {
                            <div class="admin-panel__cards">
                                {admin
                                    .get()
                                    .registrations
                                    .into_iter()
                                    .map(|registration| {
                                        view! { <RegistrationCard registration=registration /> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
