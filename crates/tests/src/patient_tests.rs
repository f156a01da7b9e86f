use crate::common::{test_backend, TEST_TOKEN};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, NewPatientRequest};

#[tokio::test]
async fn search_matches_on_national_id() {
    let backend = test_backend().await;

    let found = backend
        .search_patients(TEST_TOKEN, "29001010100123")
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Omar Farouk");
}

#[tokio::test]
async fn search_query_survives_url_encoding() {
    let backend = test_backend().await;

    // the space must be percent-encoded on the wire and decoded back
    let found = backend.search_patients(TEST_TOKEN, "Omar F").await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "p1");
}

#[tokio::test]
async fn search_with_no_match_returns_empty() {
    let backend = test_backend().await;

    let found = backend
        .search_patients(TEST_TOKEN, "no such patient")
        .await
        .unwrap();

    assert!(found.is_empty());
}

#[tokio::test]
async fn create_patient_returns_the_new_lookup_record() {
    let backend = test_backend().await;
    let req = NewPatientRequest {
        name: "Sara Ibrahim".into(),
        national_id: "29905050500789".into(),
        phone: "+20 100 555 0033".into(),
        date_of_birth: chrono::NaiveDate::from_ymd_opt(1999, 5, 5),
        notes: None,
    };

    let patient = backend.create_patient(TEST_TOKEN, &req).await.unwrap();

    assert_eq!(patient.id, "p9");
    assert_eq!(patient.name, "Sara Ibrahim");
}

#[tokio::test]
async fn duplicate_national_id_is_a_conflict() {
    let backend = test_backend().await;
    let req = NewPatientRequest {
        name: "Omar Farouk".into(),
        national_id: "29001010100123".into(),
        phone: "+20 100 555 0001".into(),
        date_of_birth: None,
        notes: None,
    };

    let err = backend.create_patient(TEST_TOKEN, &req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "National ID already registered");
}

#[tokio::test]
async fn visits_decode_with_dates() {
    let backend = test_backend().await;

    let visits = backend.list_visits(TEST_TOKEN, "p1").await.unwrap();

    assert_eq!(visits.len(), 2);
    assert_eq!(
        visits[0].date,
        chrono::NaiveDate::from_ymd_opt(2026, 7, 2).unwrap()
    );
    assert_eq!(visits[0].doctor_name, "Dr. Adel Samir");
}

#[tokio::test]
async fn own_medical_record_is_scoped_by_the_session() {
    let backend = test_backend().await;

    let visits = backend.list_my_visits(TEST_TOKEN).await.unwrap();

    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0].diagnosis, "Hypertension check");
    assert_eq!(visits[0].doctor_name, "Dr. Hala Tawfik");
}

#[tokio::test]
async fn medical_record_requires_a_live_session() {
    let backend = test_backend().await;

    let err = backend.list_my_visits("tok-stale").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn patient_without_history_has_no_visits() {
    let backend = test_backend().await;

    let visits = backend.list_visits(TEST_TOKEN, "p2").await.unwrap();

    assert!(visits.is_empty());
}
