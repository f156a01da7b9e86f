use crate::common::{test_backend, unreachable_backend, EXPLODING_TOKEN, TEST_TOKEN};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, AppointmentStatus, NewAppointmentRequest};

#[tokio::test]
async fn doctors_list_covers_every_specialty() {
    let backend = test_backend().await;

    let doctors = backend.list_doctors(TEST_TOKEN, None).await.unwrap();

    assert_eq!(doctors.len(), 3);
}

#[tokio::test]
async fn doctors_filter_by_specialty() {
    let backend = test_backend().await;

    let ent = backend.list_doctors(TEST_TOKEN, Some("ENT")).await.unwrap();

    assert_eq!(ent.len(), 2);
    assert!(ent.iter().all(|d| d.specialty == "ENT"));
}

#[tokio::test]
async fn created_appointment_starts_pending() {
    let backend = test_backend().await;
    let req = NewAppointmentRequest {
        patient_id: "p1".into(),
        specialty: "ENT".into(),
        doctor_id: "d1".into(),
        date: chrono::NaiveDate::from_ymd_opt(2026, 9, 20).unwrap(),
        time: chrono::NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
        complaint: Some("Recurring headaches".into()),
        notes: None,
    };

    let appt = backend.create_appointment(TEST_TOKEN, &req).await.unwrap();

    assert_eq!(appt.status, AppointmentStatus::Pending);
    assert_eq!(appt.date, req.date);
    assert_eq!(appt.time, req.time);
}

#[tokio::test]
async fn appointment_list_decodes_dates_and_status() {
    let backend = test_backend().await;

    let list = backend.list_appointments(TEST_TOKEN).await.unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].status, AppointmentStatus::Completed);
    assert_eq!(
        list[1].date,
        chrono::NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()
    );
}

#[tokio::test]
async fn appointment_list_failure_is_an_error_not_an_empty_list() {
    let backend = test_backend().await;

    let err = backend.list_appointments(EXPLODING_TOKEN).await.unwrap_err();

    // the page shows this message with a retry, never a silent blank state
    assert_eq!(err.kind, AppErrorKind::BadGateway);
    assert_eq!(
        err.message,
        "The service is temporarily unavailable. Please try again later."
    );
}

#[tokio::test]
async fn doctor_list_failure_is_an_error_not_an_empty_list() {
    let backend = unreachable_backend();

    let err = backend.list_doctors(TEST_TOKEN, None).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadGateway);
}

#[tokio::test]
async fn upcoming_split_is_inclusive_of_the_boundary() {
    let backend = test_backend().await;

    let list = backend.list_appointments(TEST_TOKEN).await.unwrap();
    let boundary = list[1].date.and_time(list[1].time);

    assert!(list[1].is_upcoming(boundary));
    assert!(!list[0].is_upcoming(boundary));
}
