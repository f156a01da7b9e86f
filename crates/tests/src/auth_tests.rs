use crate::common::{test_backend, TEST_TOKEN};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, RegisterClinicRequest};

fn registration(email: &str) -> RegisterClinicRequest {
    RegisterClinicRequest {
        clinic_name: "Delta Medical Center".into(),
        clinic_address: "7 Port Said St, Mansoura".into(),
        clinic_phone: "+20 50 555 0170".into(),
        clinic_email: email.into(),
        subscription_plan: "basic".into(),
        manager_name: "Yasmin Adel".into(),
        manager_email: "yasmin@delta.example".into(),
        manager_phone: "+20 100 555 0170".into(),
        password: "a-long-password".into(),
        password_confirmation: "a-long-password".into(),
        specialty: None,
        logo_base64: None,
        logo_content_type: None,
    }
}

#[tokio::test]
async fn login_returns_token_and_user_snapshot() {
    let backend = test_backend().await;
    let req = LoginRequest {
        email: "mona@nilevalley.example".into(),
        password: "correct horse".into(),
    };

    let resp = backend.login(&req).await.unwrap();

    assert_eq!(resp.token, TEST_TOKEN);
    assert_eq!(resp.user.role, "Manager");
    let clinic = resp.user.clinic.unwrap();
    assert_eq!(clinic.name, "Nile Valley Clinic");
}

#[tokio::test]
async fn platform_admin_login_carries_the_admin_role() {
    let backend = test_backend().await;
    let req = LoginRequest {
        email: "admin@platform.com".into(),
        password: "correct horse".into(),
    };

    let resp = backend.login(&req).await.unwrap();

    assert_eq!(resp.user.role, "Admin");
    assert!(resp.user.is_platform_admin);
    assert!(resp.user.clinic.is_none());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let backend = test_backend().await;
    let req = LoginRequest {
        email: "mona@nilevalley.example".into(),
        password: "wrong".into(),
    };

    let err = backend.login(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn register_clinic_creates_session_for_the_manager() {
    let backend = test_backend().await;

    let resp = backend
        .register_clinic(&registration("desk@delta.example"))
        .await
        .unwrap();

    assert_eq!(resp.token, TEST_TOKEN);
    assert_eq!(resp.user.name, "Yasmin Adel");
    assert_eq!(resp.user.clinic.unwrap().name, "Delta Medical Center");
}

#[tokio::test]
async fn register_clinic_surfaces_duplicate_email_per_field() {
    let backend = test_backend().await;

    let err = backend
        .register_clinic(&registration("taken@clinic.example"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("clinic_email").unwrap(),
        "Email already registered"
    );
}

#[tokio::test]
async fn registration_logo_travels_as_a_file_part() {
    use base64::Engine as _;

    let backend = test_backend().await;
    let mut req = registration("desk@delta.example");
    req.logo_base64 =
        Some(base64::engine::general_purpose::STANDARD.encode([0x89, 0x50, 0x4e, 0x47]));
    req.logo_content_type = Some("image/png".into());

    let resp = backend.register_clinic(&req).await.unwrap();

    assert_eq!(
        resp.user.clinic.unwrap().logo_url.as_deref(),
        Some("https://cdn.example/logos/new.png")
    );
}

#[tokio::test]
async fn logout_swallows_backend_failures() {
    let backend = test_backend().await;

    // neither a valid nor a stale token makes logout fail
    backend.logout(TEST_TOKEN).await;
    backend.logout("tok-stale").await;
}
