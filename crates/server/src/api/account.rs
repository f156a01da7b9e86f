use dioxus::prelude::*;
use shared_types::{AuthUser, RegisterClinicRequest};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Sign in with email and password. Sets HTTP-only session cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::cookies;
    use crate::backend::BackendClient;
    use shared_types::LoginRequest;

    let req = LoginRequest { email, password };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let backend = BackendClient::from_config();
    let mut resp = backend
        .login(&req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if crate::auth::is_platform_admin_email(&resp.user.email) {
        resp.user.is_platform_admin = true;
    }

    // Schedule cookies to be set by the middleware
    cookies::schedule_session_cookies(&resp.token, &resp.user);

    Ok(resp.user)
}

/// Register a new clinic together with its manager account. Signs the
/// manager in on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn register_clinic(request: RegisterClinicRequest) -> Result<AuthUser, ServerFnError> {
    use crate::auth::cookies;
    use crate::backend::BackendClient;
    use shared_types::{logo_file_error, AppError};

    request
        .validate_full()
        .map_err(|e| e.into_server_fn_error())?;

    // Re-check the logo server-side; the client gate is advisory only
    if let (Some(data), Some(content_type)) = (&request.logo_base64, &request.logo_content_type) {
        let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, data)
            .map_err(|e| {
                AppError::validation(format!("Invalid logo data: {}", e), Default::default())
                    .into_server_fn_error()
            })?;
        if let Some(msg) = logo_file_error(content_type, bytes.len() as u64) {
            let mut fields = std::collections::HashMap::new();
            fields.insert("logo".to_string(), msg.to_string());
            return Err(AppError::validation("Validation failed", fields).into_server_fn_error());
        }
    }

    let backend = BackendClient::from_config();
    let resp = backend
        .register_clinic(&request)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_session_cookies(&resp.token, &resp.user);

    Ok(resp.user)
}

/// Get the current signed-in user from the session cookies.
/// Returns None when not authenticated.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::session;

    Ok(session::current_session().map(|(_, user)| user))
}

/// Sign out: revoke the backend token (best effort) and clear session cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, session};
    use crate::backend::BackendClient;

    if let Some((token, _)) = session::current_session() {
        BackendClient::from_config().logout(&token).await;
    }

    // Schedule cookie clearing via middleware
    cookies::schedule_clear_cookies();

    Ok(())
}
