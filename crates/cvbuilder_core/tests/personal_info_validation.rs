use cvbuilder_core::{validate_personal_info, PersonalInfo};

fn valid_info() -> PersonalInfo {
    PersonalInfo {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0958".to_string(),
        location: "London".to_string(),
        summary: "Mathematician and first programmer.".to_string(),
    }
}

#[test]
fn valid_candidate_passes_and_keeps_fields() {
    let candidate = valid_info();
    let valid = validate_personal_info(candidate.clone()).expect("candidate should be valid");
    assert_eq!(valid.get(), &candidate);
}

#[test]
fn every_violated_field_is_reported_in_one_pass() {
    let candidate = PersonalInfo {
        full_name: "Ada".to_string(),
        email: "not-an-email".to_string(),
        phone: "call me".to_string(),
        location: "X".to_string(),
        summary: "too short".to_string(),
    };

    let errors = validate_personal_info(candidate).expect_err("all fields should fail");
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(
        fields,
        vec!["email", "fullName", "location", "phone", "summary"]
    );
}

#[test]
fn full_name_boundary_is_five_characters() {
    let mut candidate = valid_info();
    candidate.full_name = "Lumen".to_string();
    assert!(validate_personal_info(candidate.clone()).is_ok());

    candidate.full_name = "Lume".to_string();
    let errors = validate_personal_info(candidate).expect_err("4 chars should fail");
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["fullName"]);
}

#[test]
fn full_name_upper_boundary_is_150_characters() {
    let mut candidate = valid_info();
    candidate.full_name = "n".repeat(150);
    assert!(validate_personal_info(candidate.clone()).is_ok());

    candidate.full_name = "n".repeat(151);
    assert!(validate_personal_info(candidate).is_err());
}

#[test]
fn summary_boundary_is_twenty_characters() {
    let mut candidate = valid_info();
    candidate.summary = "s".repeat(20);
    assert!(validate_personal_info(candidate.clone()).is_ok());

    candidate.summary = "s".repeat(19);
    let errors = validate_personal_info(candidate).expect_err("19 chars should fail");
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["summary"]);
}

#[test]
fn email_over_100_characters_fails_on_length() {
    let mut candidate = valid_info();
    candidate.email = format!("{}@example.com", "a".repeat(95));

    let errors = validate_personal_info(candidate).expect_err("long email should fail");
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
    assert!(errors.messages_for("email")[0].contains("at most 100"));
}

#[test]
fn empty_phone_is_treated_as_not_provided() {
    let mut candidate = valid_info();
    candidate.phone = String::new();
    assert!(validate_personal_info(candidate).is_ok());
}

#[test]
fn non_empty_phone_must_match_pattern() {
    let mut candidate = valid_info();
    candidate.phone = "612-345-678".to_string();
    assert!(validate_personal_info(candidate.clone()).is_ok());

    candidate.phone = "+34 612 ABC".to_string();
    let errors = validate_personal_info(candidate).expect_err("letters should fail");
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["phone"]);
}

#[test]
fn location_lower_boundary_is_two_characters() {
    let mut candidate = valid_info();
    candidate.location = "NY".to_string();
    assert!(validate_personal_info(candidate.clone()).is_ok());

    candidate.location = "N".to_string();
    assert!(validate_personal_info(candidate).is_err());
}

#[test]
fn length_limits_count_characters_not_bytes() {
    let mut candidate = valid_info();
    // 5 accented characters are more than 5 bytes but exactly 5 chars.
    candidate.full_name = "Ñañez".to_string();
    assert!(validate_personal_info(candidate).is_ok());
}
