//! Colored badge for a registration's conference track.

use leptos::prelude::*;
use schema::Track;

#[cfg(test)]
#[path = "track_badge_test.rs"]
mod track_badge_test;

/// Color category for a track, used as the badge's BEM modifier.
#[must_use]
pub fn track_category(track: Track) -> &'static str {
    match track {
        Track::AiMl => "purple",
        Track::SoftwareEngineering => "blue",
        Track::DevopsCloud => "green",
        Track::All => "orange",
        Track::Unknown => "gray",
    }
}

/// Uppercased badge text derived from the track's wire value.
#[must_use]
pub fn track_badge_label(track: Track) -> String {
    match track {
        Track::Unknown => "OTHER".to_owned(),
        _ => track.as_str().replace('-', " ").to_uppercase(),
    }
}

#[component]
pub fn TrackBadge(track: Track) -> impl IntoView {
    view! {
        <span class=format!(
            "badge badge--{}",
            track_category(track),
        )>{track_badge_label(track)}</span>
    }
}
