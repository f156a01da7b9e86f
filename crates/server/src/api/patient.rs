use dioxus::prelude::*;
use shared_types::{NewPatientRequest, PatientLookup, Visit};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Search patients by name, national ID, or phone.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_patients(query: String) -> Result<Vec<PatientLookup>, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .search_patients(&token, &query)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Register a walk-in patient at the reception desk.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn register_patient(request: NewPatientRequest) -> Result<PatientLookup, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .create_patient(&token, &request)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// The signed-in patient's own visit history.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_visits() -> Result<Vec<Visit>, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .list_my_visits(&token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Previous visits for a patient, newest first as the backend returns them.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_patient_visits(patient_id: String) -> Result<Vec<Visit>, ServerFnError> {
    use crate::auth::session;
    use crate::backend::BackendClient;

    let (token, _) = session::require_session().map_err(|e| e.into_server_fn_error())?;

    BackendClient::from_config()
        .list_visits(&token, &patient_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}
