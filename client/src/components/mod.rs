//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome while reading shared state from Leptos
//! context providers; the pure helpers beside them keep styling decisions
//! testable off the browser.

pub mod registration_card;
pub mod toast;
pub mod track_badge;
