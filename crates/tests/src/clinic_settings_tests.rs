use crate::common::{test_backend, unreachable_backend, EXPLODING_TOKEN, TEST_TOKEN};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, SubscriptionPlan, UpdateClinicRequest};

fn settings_payload() -> UpdateClinicRequest {
    UpdateClinicRequest {
        name: "Nile Valley Clinic".into(),
        address: "4 Tahrir Sq, Cairo".into(),
        phone: "+20 2 555 0199".into(),
        email: "desk@nilevalley.example".into(),
        subscription_plan: "premium".into(),
        status: "active".into(),
        logo_base64: None,
        logo_content_type: None,
    }
}

#[tokio::test]
async fn fetch_settings_decodes_the_committed_snapshot() {
    let backend = test_backend().await;

    let clinic = backend.fetch_settings(TEST_TOKEN).await.unwrap();

    assert_eq!(clinic.name, "Nile Valley Clinic");
    assert_eq!(clinic.subscription_plan, SubscriptionPlan::Standard);
    assert_eq!(clinic.logo_url.as_deref(), Some("https://cdn.example/logos/c1.png"));
}

#[tokio::test]
async fn fetch_settings_with_stale_token_is_unauthorized() {
    let backend = test_backend().await;

    let err = backend.fetch_settings("tok-stale").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Session expired");
}

#[tokio::test]
async fn update_settings_returns_the_replacement_record() {
    let backend = test_backend().await;
    let mut payload = settings_payload();
    payload.name = "Nile Valley Medical Center".into();

    let clinic = backend.update_settings(TEST_TOKEN, &payload).await.unwrap();

    assert_eq!(clinic.name, "Nile Valley Medical Center");
    assert_eq!(clinic.subscription_plan, SubscriptionPlan::Premium);
}

#[tokio::test]
async fn update_settings_maps_backend_field_errors() {
    let backend = test_backend().await;
    let mut payload = settings_payload();
    payload.name = String::new();

    let err = backend
        .update_settings(TEST_TOKEN, &payload)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("name").unwrap(),
        "Clinic name is required"
    );
}

#[tokio::test]
async fn backend_crash_is_a_generic_bad_gateway() {
    let backend = test_backend().await;

    let err = backend.fetch_settings(EXPLODING_TOKEN).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadGateway);
    // the backend's own message never reaches the user
    assert_eq!(
        err.message,
        "The service is temporarily unavailable. Please try again later."
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_bad_gateway() {
    let backend = unreachable_backend();

    let err = backend.fetch_settings(TEST_TOKEN).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadGateway);
    assert_eq!(
        err.message,
        "Could not reach the clinic service. Please try again later."
    );
}
