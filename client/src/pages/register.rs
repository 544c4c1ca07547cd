//! Registration page: the form, its submission flow, and the success view.
//!
//! SYSTEM CONTEXT
//! ==============
//! All field values live in one `RegisterFormState` signal. Submission runs
//! the shared validation pipeline before any network call happens, so the
//! server never sees a payload the client already knows is invalid.

use leptos::prelude::*;
use schema::Track;

use crate::components::toast::ToastQueue;
use crate::state::register::{RegisterFormState, SubmitPhase};

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

/// Submit button label for the current phase.
#[must_use]
pub fn submit_label(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Submitting => "Registering...",
        SubmitPhase::Editing | SubmitPhase::Success => "Complete Registration",
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterFormState::default());
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        form.update(|state| payload = state.try_begin_submit());
        let Some(payload) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_registration(&payload).await {
                Ok(_) => {
                    form.update(RegisterFormState::finish_success);
                    crate::components::toast::push_toast(
                        toasts,
                        crate::components::toast::ToastKind::Success,
                        "Registration Successful!",
                        "We've sent a confirmation email to your address.",
                    );
                }
                Err(e) => {
                    log::error!("registration failed: {e}");
                    form.update(RegisterFormState::finish_failure);
                    crate::components::toast::push_toast(
                        toasts,
                        crate::components::toast::ToastKind::Error,
                        "Registration Failed",
                        "Something went wrong. Please try again.",
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, toasts);
    });

    view! {
        <div class="register-page">
            <header class="register-header">
                <a class="register-header__back" href="/">
                    "Back"
                </a>
                <span class="register-header__title">"DevMeet 2025 Registration"</span>
            </header>

            <Show
                when=move || form.get().phase == SubmitPhase::Success
                fallback=move || view! { <RegistrationFormCard form=form on_submit=on_submit /> }
            >
                <div class="register-success">
                    <span class="register-success__icon" aria-hidden="true">
                        "✓"
                    </span>
                    <h2>"Registration Complete!"</h2>
                    <p class="register-success__note">
                        "Thank you for registering for DevMeet 2025. We've sent a confirmation email with all the details."
                    </p>
                    <a class="btn" href="/">
                        "Back to Home"
                    </a>
                </div>
            </Show>
        </div>
    }
}

/// The form card: field rows, per-field errors, consents, and submit.
#[component]
fn RegistrationFormCard(
    form: RwSignal<RegisterFormState>,
    on_submit: Callback<leptos::ev::SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="register-card">
            <h1 class="register-card__title">"Join DevMeet 2025"</h1>
            <p class="register-card__subtitle">
                "Fill out the form below to secure your spot at the most innovative tech meetup of the year."
            </p>
            <form class="register-form" on:submit=move |ev| on_submit.run(ev)>
                <div class="register-form__row">
                    <div class="register-field">
                        <label class="register-field__label" for="name">
                            "Full Name *"
                        </label>
                        <input
                            id="name"
                            class="register-field__input"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|s| s.name = event_target_value(&ev))
                        />
                        {field_error_view(form, "name")}
                    </div>
                    <div class="register-field">
                        <label class="register-field__label" for="email">
                            "Email Address *"
                        </label>
                        <input
                            id="email"
                            class="register-field__input"
                            type="email"
                            placeholder="john@company.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|s| s.email = event_target_value(&ev))
                        />
                        {field_error_view(form, "email")}
                    </div>
                </div>

                <div class="register-form__row">
                    <div class="register-field">
                        <label class="register-field__label" for="company">
                            "Company *"
                        </label>
                        <input
                            id="company"
                            class="register-field__input"
                            type="text"
                            placeholder="TechCorp Inc."
                            prop:value=move || form.get().company
                            on:input=move |ev| form.update(|s| s.company = event_target_value(&ev))
                        />
                        {field_error_view(form, "company")}
                    </div>
                    <div class="register-field">
                        <label class="register-field__label" for="department">
                            "Department *"
                        </label>
                        <input
                            id="department"
                            class="register-field__input"
                            type="text"
                            placeholder="Engineering"
                            prop:value=move || form.get().department
                            on:input=move |ev| form.update(|s| s.department = event_target_value(&ev))
                        />
                        {field_error_view(form, "department")}
                    </div>
                </div>

                <div class="register-field">
                    <label class="register-field__label" for="role">
                        "Job Role *"
                    </label>
                    <input
                        id="role"
                        class="register-field__input"
                        type="text"
                        placeholder="Software Engineer"
                        prop:value=move || form.get().role
                        on:input=move |ev| form.update(|s| s.role = event_target_value(&ev))
                    />
                    {field_error_view(form, "role")}
                </div>

                <div class="register-field">
                    <label class="register-field__label" for="interested-track">
                        "Interested Track *"
                    </label>
                    <select
                        id="interested-track"
                        class="register-field__input"
                        prop:value=move || form.get().track_value()
                        on:change=move |ev| form.update(|s| s.set_track(&event_target_value(&ev)))
                    >
                        <option value="">"Select a track"</option>
                        {Track::SELECTABLE
                            .into_iter()
                            .map(|track| {
                                view! { <option value=track.as_str()>{track.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    {field_error_view(form, "interested_track")}
                </div>

                <div class="register-form__consents">
                    <label class="register-consent">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().newsletter
                            on:change=move |ev| {
                                form.update(|s| s.newsletter = event_target_checked(&ev));
                            }
                        />
                        <span>"Subscribe to our newsletter for future tech events and updates"</span>
                    </label>
                    <label class="register-consent">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().terms
                            on:change=move |ev| {
                                form.update(|s| s.terms = event_target_checked(&ev));
                            }
                        />
                        <span>"I agree to the terms and conditions and privacy policy *"</span>
                    </label>
                    {field_error_view(form, "terms")}
                </div>

                <button
                    class="btn btn--primary register-form__submit"
                    type="submit"
                    disabled=move || form.get().is_submitting()
                >
                    {move || submit_label(form.get().phase)}
                </button>
            </form>
        </div>
    }
}

/// Reactive error line under a field; renders nothing while the field is
/// clean.
fn field_error_view(form: RwSignal<RegisterFormState>, field: &'static str) -> impl IntoView {
    move || {
        form.get()
            .field_error(field)
            .map(|msg| view! { <p class="register-field__error">{msg}</p> })
    }
}
