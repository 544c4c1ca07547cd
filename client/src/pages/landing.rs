//! Landing page with event facts and track highlights.

use leptos::prelude::*;
use schema::Track;

use crate::components::track_badge::track_category;

#[component]
pub fn LandingPage() -> impl IntoView {
    let tracks = Track::SELECTABLE
        .into_iter()
        .filter(|track| *track != Track::All)
        .map(|track| {
            view! {
                <div class="landing-track">
                    <span
                        class=format!(
                            "landing-track__dot landing-track__dot--{}",
                            track_category(track),
                        )
                        aria-hidden="true"
                    ></span>
                    <h3 class="landing-track__title">{track.label()}</h3>
                    <p class="landing-track__blurb">
                        "Deep dive into cutting-edge topics with industry experts"
                    </p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="landing-page">
            <header class="landing-header">
                <div>
                    <h1 class="landing-header__title">"DevMeet 2025"</h1>
                    <p class="landing-header__tagline">"Innovate • Connect • Inspire"</p>
                </div>
                <a class="btn btn--primary" href="/register">
                    "Register Now"
                </a>
            </header>

            <section class="landing-hero">
                <span class="badge badge--secondary">"Limited Seats Available"</span>
                <h2 class="landing-hero__title">"DevMeet 2025"</h2>
                <p class="landing-hero__pitch">
                    "Join the most innovative tech meetup of the year. Learn from industry leaders, network with peers, and shape the future of technology."
                </p>
                <div class="landing-facts">
                    <div class="landing-fact">
                        <h3>"Date"</h3>
                        <p>"December 12, 2025"</p>
                    </div>
                    <div class="landing-fact">
                        <h3>"Time"</h3>
                        <p>"9:00 AM - 6:00 PM"</p>
                    </div>
                    <div class="landing-fact">
                        <h3>"Venue"</h3>
                        <p>"Tech Convention Center"</p>
                    </div>
                </div>
                <a class="btn btn--primary landing-hero__cta" href="/register">
                    "Reserve Your Spot"
                </a>
            </section>

            <section class="landing-tracks">
                <h2>"Event Tracks"</h2>
                <p class="landing-tracks__subtitle">"Choose your learning path"</p>
                <div class="landing-tracks__grid">{tracks}</div>
            </section>

            <section class="landing-cta">
                <h2>"Ready to Join Us?"</h2>
                <p>
                    "Don't miss this opportunity to connect with fellow tech enthusiasts and learn from industry leaders."
                </p>
                <a class="btn btn--primary" href="/register">
                    "Register for DevMeet 2025"
                </a>
            </section>

            <footer class="landing-footer">
                <span>"DevMeet 2025"</span>
            </footer>
        </div>
    }
}
