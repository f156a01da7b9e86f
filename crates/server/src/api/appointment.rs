use dioxus::prelude::*;
use shared_types::{Appointment, Doctor, NewAppointmentRequest};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Doctors available for booking, optionally filtered by specialty.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_doctors(specialty: Option<String>) -> Result<Vec<Doctor>, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .list_doctors(&token, specialty.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Book an appointment for a registered patient.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn create_appointment(
    request: NewAppointmentRequest,
) -> Result<Appointment, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .create_appointment(&token, &request)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Appointments for the signed-in patient.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_appointments() -> Result<Vec<Appointment>, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .list_appointments(&token)
        .await
        .map_err(|e| e.into_server_fn_error())
}
