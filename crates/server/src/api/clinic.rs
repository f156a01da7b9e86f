use dioxus::prelude::*;
use shared_types::{Clinic, DashboardStats, PlatformStats, UpdateClinicRequest};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Fetch the committed clinic profile for the signed-in user's clinic.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_clinic_settings() -> Result<Clinic, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .fetch_settings(&token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Save the clinic profile. The payload replaces the whole stored record.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn update_clinic_settings(request: UpdateClinicRequest) -> Result<Clinic, ServerFnError> {
    use crate::auth::{cookies, session};
    use crate::backend::BackendClient;
    use shared_types::{logo_file_error, AppError};

    let (token, mut user) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

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

    let clinic = BackendClient::from_config()
        .update_settings(&token, &request)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    // Keep the cached snapshot in step with the saved profile
    user.clinic = Some(clinic.clone());
    cookies::schedule_session_cookies(&token, &user);

    Ok(clinic)
}

/// Aggregate counters for the clinic dashboard.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .dashboard_stats(&token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Platform-wide counters. Only meaningful for platform admins.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_platform_stats() -> Result<PlatformStats, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;
    use shared_types::AppError;

    let (token, user) = session::require_session().map_err(|e| e.into_server_fn_error())?;
    if !user.is_platform_admin {
        return Err(AppError::forbidden("Platform admin access required").into_server_fn_error());
    }

    BackendClient::from_config()
        .platform_stats(&token)
        .await
        .map_err(|e| e.into_server_fn_error())
}
