use super::*;

fn filled_state() -> RegisterFormState {
    RegisterFormState {
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        company: "Test Company".to_owned(),
        department: "Engineering".to_owned(),
        role: "Developer".to_owned(),
        interested_track: Some(Track::SoftwareEngineering),
        newsletter: false,
        terms: true,
        errors: FieldErrors::new(),
        phase: SubmitPhase::Editing,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_editing_with_no_errors() {
    let state = RegisterFormState::default();
    assert_eq!(state.phase, SubmitPhase::Editing);
    assert!(state.errors.is_empty());
    assert!(state.interested_track.is_none());
    assert!(!state.newsletter);
    assert!(!state.terms);
}

// =============================================================
// Payload mapping
// =============================================================

#[test]
fn payload_carries_fields_verbatim() {
    let payload = filled_state().payload();
    assert_eq!(payload.name, "John Doe");
    assert_eq!(payload.email, "john@example.com");
    assert_eq!(payload.interested_track, Track::SoftwareEngineering);
    assert!(payload.terms);
}

#[test]
fn payload_maps_unselected_track_to_unknown() {
    let mut state = filled_state();
    state.interested_track = None;
    assert_eq!(state.payload().interested_track, Track::Unknown);
}

// =============================================================
// try_begin_submit
// =============================================================

#[test]
fn valid_submit_yields_normalized_payload_and_moves_to_submitting() {
    let mut state = filled_state();
    state.name = "  John Doe  ".to_owned();

    let payload = state.try_begin_submit().expect("valid form must yield payload");
    assert_eq!(payload.name, "John Doe");
    assert_eq!(state.phase, SubmitPhase::Submitting);
    assert!(state.errors.is_empty());
    assert!(state.is_submitting());
}

#[test]
fn invalid_submit_stores_field_errors_and_stays_editing() {
    let mut state = filled_state();
    state.email = "nope".to_owned();
    state.terms = false;

    assert!(state.try_begin_submit().is_none());
    assert_eq!(state.phase, SubmitPhase::Editing);
    assert_eq!(state.field_error("email").as_deref(), Some("Invalid email address"));
    assert_eq!(
        state.field_error("terms").as_deref(),
        Some("You must accept the terms and conditions")
    );
    assert!(state.field_error("name").is_none());
}

#[test]
fn unselected_track_blocks_submission() {
    let mut state = filled_state();
    state.interested_track = None;

    assert!(state.try_begin_submit().is_none());
    assert_eq!(state.field_error("interested_track").as_deref(), Some("Please select a track"));
}

#[test]
fn submit_while_submitting_is_a_no_op() {
    let mut state = filled_state();
    state.try_begin_submit().expect("first submit");
    assert!(state.try_begin_submit().is_none());
    assert_eq!(state.phase, SubmitPhase::Submitting);
}

#[test]
fn corrected_resubmit_clears_previous_errors() {
    let mut state = filled_state();
    state.terms = false;
    assert!(state.try_begin_submit().is_none());
    assert!(!state.errors.is_empty());

    state.terms = true;
    assert!(state.try_begin_submit().is_some());
    assert!(state.errors.is_empty());
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn success_is_terminal() {
    let mut state = filled_state();
    state.try_begin_submit().expect("submit");
    state.finish_success();
    assert_eq!(state.phase, SubmitPhase::Success);

    assert!(state.try_begin_submit().is_none());
    state.finish_failure();
    assert_eq!(state.phase, SubmitPhase::Success);
}

#[test]
fn failure_returns_to_editing_for_retry() {
    let mut state = filled_state();
    state.try_begin_submit().expect("submit");
    state.finish_failure();
    assert_eq!(state.phase, SubmitPhase::Editing);

    assert!(state.try_begin_submit().is_some());
}

#[test]
fn finish_success_outside_submitting_is_ignored() {
    let mut state = filled_state();
    state.finish_success();
    assert_eq!(state.phase, SubmitPhase::Editing);
}

// =============================================================
// Track select helpers
// =============================================================

#[test]
fn track_value_mirrors_selection() {
    let mut state = filled_state();
    assert_eq!(state.track_value(), "software-engineering");
    state.interested_track = None;
    assert_eq!(state.track_value(), "");
}

#[test]
fn set_track_parses_and_clears() {
    let mut state = filled_state();
    state.set_track("ai-ml");
    assert_eq!(state.interested_track, Some(Track::AiMl));
    state.set_track("");
    assert_eq!(state.interested_track, None);
}
