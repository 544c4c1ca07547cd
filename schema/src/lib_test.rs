use super::*;

use chrono::TimeZone;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        company: "Test Company".to_owned(),
        department: "Engineering".to_owned(),
        role: "Developer".to_owned(),
        interested_track: Track::SoftwareEngineering,
        newsletter: false,
        terms: true,
    }
}

#[test]
fn track_wire_values_round_trip() {
    for track in Track::SELECTABLE {
        let encoded = serde_json::to_value(track).expect("serialize track");
        assert_eq!(encoded, serde_json::Value::String(track.as_str().to_owned()));
        let decoded: Track = serde_json::from_value(encoded).expect("deserialize track");
        assert_eq!(decoded, track);
    }
}

#[test]
fn unrecognized_track_deserializes_to_unknown() {
    let decoded: Track =
        serde_json::from_value(serde_json::json!("quantum-computing")).expect("deserialize");
    assert_eq!(decoded, Track::Unknown);
}

#[test]
fn track_parse_matches_wire_values() {
    for track in Track::SELECTABLE {
        assert_eq!(Track::parse(track.as_str()), track);
    }
    assert_eq!(Track::parse("garbage"), Track::Unknown);
    assert_eq!(Track::parse(""), Track::Unknown);
}

#[test]
fn track_labels_match_display_copy() {
    assert_eq!(Track::AiMl.label(), "AI & Machine Learning");
    assert_eq!(Track::SoftwareEngineering.label(), "Software Engineering");
    assert_eq!(Track::DevopsCloud.label(), "DevOps & Cloud");
    assert_eq!(Track::All.label(), "All Tracks");
    assert_eq!(Track::Unknown.label(), "Other");
}

#[test]
fn canonical_form_validates_and_serializes_exactly() {
    let form = valid_form().normalized();
    assert_eq!(validate_registration(&form), Ok(()));

    let encoded = serde_json::to_value(&form).expect("serialize form");
    assert_eq!(
        encoded,
        serde_json::json!({
            "name": "John Doe",
            "email": "john@example.com",
            "company": "Test Company",
            "department": "Engineering",
            "role": "Developer",
            "interested_track": "software-engineering",
            "newsletter": false,
            "terms": true,
        })
    );
}

#[test]
fn empty_form_reports_every_failing_field_at_once() {
    let form = RegistrationForm {
        name: String::new(),
        email: String::new(),
        company: String::new(),
        department: String::new(),
        role: String::new(),
        interested_track: Track::Unknown,
        newsletter: false,
        terms: false,
    };

    let errors = validate_registration(&form).expect_err("empty form must fail");
    let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
    assert_eq!(
        fields,
        ["company", "department", "email", "interested_track", "name", "role", "terms"]
    );
    assert_eq!(errors["name"], "Name must be between 2 and 100 characters");
    assert_eq!(errors["email"], "Invalid email address");
    assert_eq!(errors["interested_track"], "Please select a track");
    assert_eq!(errors["terms"], "You must accept the terms and conditions");
}

#[test]
fn invalid_email_blocks_with_email_message() {
    let mut form = valid_form();
    form.email = "not-an-email".to_owned();

    let errors = validate_registration(&form).expect_err("bad email must fail");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["email"], "Invalid email address");
}

#[test]
fn overlong_email_blocks_with_length_message() {
    // Longest well-formed address validator accepts: 64-char local part and a
    // 255-char domain, which still exceeds the schema's 255-char cap.
    let label = "a".repeat(63);
    let mut form = valid_form();
    form.email = format!("user@{label}.{label}.{label}.{label}");

    let errors = validate_registration(&form).expect_err("overlong email must fail");
    assert_eq!(errors["email"], "Email must be less than 255 characters");
}

#[test]
fn unaccepted_terms_block_independently_of_other_fields() {
    let mut form = valid_form();
    form.terms = false;

    let errors = validate_registration(&form).expect_err("terms gate must fail");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["terms"], "You must accept the terms and conditions");
}

#[test]
fn unselected_track_blocks_with_track_message() {
    let mut form = valid_form();
    form.interested_track = Track::Unknown;

    let errors = validate_registration(&form).expect_err("missing track must fail");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["interested_track"], "Please select a track");
}

#[test]
fn multiple_violations_surface_together() {
    let mut form = valid_form();
    form.name = "J".to_owned();
    form.email = "nope".to_owned();
    form.terms = false;

    let errors = validate_registration(&form).expect_err("three fields must fail");
    let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
    assert_eq!(fields, ["email", "name", "terms"]);
}

#[test]
fn normalization_trims_before_validation() {
    let mut form = valid_form();
    form.name = "  John Doe  ".to_owned();
    form.email = " john@example.com ".to_owned();
    form.company = "\tTest Company\n".to_owned();

    let normalized = form.normalized();
    assert_eq!(normalized.name, "John Doe");
    assert_eq!(normalized.email, "john@example.com");
    assert_eq!(normalized.company, "Test Company");
    assert_eq!(validate_registration(&normalized), Ok(()));
}

#[test]
fn whitespace_only_fields_fail_after_trim() {
    let mut form = valid_form();
    form.department = "       ".to_owned();

    let normalized = form.normalized();
    let errors = validate_registration(&normalized).expect_err("blank department must fail");
    assert_eq!(errors["department"], "Department must be between 2 and 100 characters");
}

#[test]
fn form_deserializes_with_absent_optional_fields() {
    let form: RegistrationForm = serde_json::from_value(serde_json::json!({
        "name": "John Doe",
        "email": "john@example.com",
        "company": "Test Company",
        "department": "Engineering",
        "role": "Developer",
    }))
    .expect("deserialize partial form");

    assert_eq!(form.interested_track, Track::Unknown);
    assert!(!form.newsletter);
    assert!(!form.terms);
    assert!(validate_registration(&form).is_err());
}

#[test]
fn stored_record_round_trips_with_rfc3339_timestamp() {
    let record: Registration = serde_json::from_str(
        r#"{
            "id": 1,
            "name": "John Doe",
            "email": "john@example.com",
            "company": "Test Company",
            "department": "Engineering",
            "role": "Developer",
            "interested_track": "ai-ml",
            "newsletter": true,
            "created_at": "2025-06-01T09:30:00Z"
        }"#,
    )
    .expect("deserialize stored record");

    assert_eq!(record.id, 1);
    assert_eq!(record.interested_track, Track::AiMl);
    assert_eq!(
        record.created_at,
        chrono::Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
    );

    let encoded = serde_json::to_string(&record).expect("serialize stored record");
    let decoded: Registration = serde_json::from_str(&encoded).expect("round trip");
    assert_eq!(decoded, record);
}

#[test]
fn register_ack_carries_message_and_id() {
    let ack: RegisterAck =
        serde_json::from_value(serde_json::json!({ "message": "Registration successful", "id": 7 }))
            .expect("deserialize ack");
    assert_eq!(ack.message, "Registration successful");
    assert_eq!(ack.id, 7);
}
