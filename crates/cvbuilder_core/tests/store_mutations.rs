use cvbuilder_core::{
    validate_education, validate_experience, validate_personal_info, CvStore, Education,
    Experience, PersonalInfo, StoreEvent, ValidEducation, ValidExperience, ValidPersonalInfo,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

fn personal_info(name: &str) -> ValidPersonalInfo {
    validate_personal_info(PersonalInfo {
        full_name: name.to_string(),
        email: "ada@example.com".to_string(),
        phone: String::new(),
        location: "London".to_string(),
        summary: "Mathematician and first programmer.".to_string(),
    })
    .expect("fixture should be valid")
}

fn experience(company: &str) -> ValidExperience {
    validate_experience(Experience::new(
        company,
        "Engineer",
        "2021-03",
        "2023-06",
        "",
    ))
    .expect("fixture should be valid")
}

fn education(institution: &str) -> ValidEducation {
    validate_education(Education::new(institution, "BSc", "", "2020"))
        .expect("fixture should be valid")
}

#[test]
fn update_personal_info_replaces_wholesale() {
    let mut store = CvStore::new();

    store.update_personal_info(personal_info("Ada Lovelace"));
    store.update_personal_info(personal_info("Grace Hopper"));

    assert_eq!(store.data().personal_info.full_name, "Grace Hopper");
    assert!(store.data().personal_info.is_complete());
}

#[test]
fn reset_personal_info_restores_defaults() {
    let mut store = CvStore::new();
    store.update_personal_info(personal_info("Ada Lovelace"));

    store.reset_personal_info();

    assert_eq!(store.data().personal_info, PersonalInfo::default());
}

#[test]
fn add_experience_is_append_only_and_order_preserving() {
    let mut store = CvStore::new();

    let first = store.add_experience(experience("Initech"));
    let second = store.add_experience(experience("Globex"));

    let companies: Vec<&str> = store
        .data()
        .experiences
        .iter()
        .map(|entry| entry.company.as_str())
        .collect();
    assert_eq!(companies, vec!["Initech", "Globex"]);
    assert_eq!(store.data().experiences[0].id, first);
    assert_eq!(store.data().experiences[1].id, second);
}

#[test]
fn delete_experience_is_idempotent() {
    let mut store = CvStore::new();
    let id = store.add_experience(experience("Initech"));

    assert!(store.delete_experience(id));
    assert_eq!(store.data().experiences.len(), 0);

    // Double-pressed delete: second call is a silent no-op.
    assert!(!store.delete_experience(id));
    assert_eq!(store.data().experiences.len(), 0);
}

#[test]
fn delete_with_unknown_id_is_a_silent_no_op() {
    let mut store = CvStore::new();
    store.add_experience(experience("Initech"));

    assert!(!store.delete_experience(Uuid::new_v4()));
    assert_eq!(store.data().experiences.len(), 1);
}

#[test]
fn subscribers_observe_events_in_mutation_order() {
    let mut store = CvStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(Box::new(move |event, _data| {
        sink.lock().unwrap().push(*event);
    }));

    store.update_personal_info(personal_info("Ada Lovelace"));
    let exp_id = store.add_experience(experience("Initech"));
    let edu_id = store.add_education(education("MIT"));
    store.delete_experience(exp_id);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            StoreEvent::PersonalInfoUpdated,
            StoreEvent::ExperienceAdded(exp_id),
            StoreEvent::EducationAdded(edu_id),
            StoreEvent::ExperienceRemoved(exp_id),
        ]
    );
}

#[test]
fn failed_delete_emits_no_event() {
    let mut store = CvStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(Box::new(move |event, _data| {
        sink.lock().unwrap().push(*event);
    }));

    store.delete_experience(Uuid::new_v4());
    store.delete_education(Uuid::new_v4());

    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn subscribers_see_the_post_mutation_aggregate() {
    let mut store = CvStore::new();
    let observed_len = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&observed_len);
    store.subscribe(Box::new(move |_event, data| {
        *sink.lock().unwrap() = data.education.len();
    }));

    store.add_education(education("MIT"));

    assert_eq!(*observed_len.lock().unwrap(), 1);
}

#[test]
fn unsubscribed_listeners_observe_nothing() {
    let mut store = CvStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(Box::new(move |event, _data| {
        sink.lock().unwrap().push(*event);
    }));

    assert!(store.unsubscribe(subscription));
    assert!(!store.unsubscribe(subscription));

    store.add_education(education("MIT"));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn education_round_trip_matches_home_screen_expectations() {
    let mut store = CvStore::new();
    assert_eq!(store.data().education.len(), 0);

    let id = store.add_education(
        validate_education(Education::new("MIT", "BSc", "", "2020"))
            .expect("fixture should be valid"),
    );
    assert_eq!(store.data().education.len(), 1);
    assert_eq!(store.data().education_entry(id).unwrap().degree, "BSc");

    assert!(store.delete_education(id));
    assert_eq!(store.data().education.len(), 0);

    assert!(!store.delete_education(id));
    assert_eq!(store.data().education.len(), 0);
}
