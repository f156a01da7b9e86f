//! HTTP client for the clinic REST backend.
//!
//! Every server function goes through [`BackendClient`]; nothing else in the
//! crate talks to the network. Backend failures are normalized into
//! [`AppError`] here so the client sees one error vocabulary regardless of
//! which endpoint failed.

use std::collections::HashMap;
use std::time::Duration;

use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, Appointment, Clinic, DashboardStats, Doctor, LoginRequest, LoginResponse,
    NewAppointmentRequest, NewPatientRequest, PatientLookup, PlatformStats,
    RegisterClinicRequest, UpdateClinicRequest, Visit,
};

pub struct BackendClient {
    base: String,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            base: base_url.into(),
            http,
        }
    }

    /// Client pointed at the configured backend.
    pub fn from_config() -> Self {
        let cfg = crate::config::app_config();
        Self::new(cfg.backend.base_url.clone(), cfg.backend.timeout_secs)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        let req = match token {
            Some(t) => req.bearer_auth(t),
            None => req,
        };
        let response = req.send().await.map_err(|e| {
            tracing::error!(error = %e, "Clinic backend unreachable");
            AppError::bad_gateway("Could not reach the clinic service. Please try again later.")
        })?;

        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                tracing::error!(error = %e, "Failed to decode clinic backend response");
                AppError::bad_gateway("The clinic service returned an unexpected response.")
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_backend_error(status.as_u16(), &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, AppError> {
        self.send(self.http.get(self.url(path)), Some(token)).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        self.send(self.http.post(self.url(path)).json(body), token)
            .await
    }

    async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
        token: &str,
    ) -> Result<T, AppError> {
        self.send(self.http.put(self.url(path)).json(body), Some(token))
            .await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.post_json("/api/auth/login", req, None).await
    }

    /// Multipart POST: scalar fields as text parts, the logo (when present)
    /// decoded from its base64 transport form into a file part.
    #[tracing::instrument(skip(self, req))]
    pub async fn register_clinic(
        &self,
        req: &RegisterClinicRequest,
    ) -> Result<LoginResponse, AppError> {
        let mut form = reqwest::multipart::Form::new()
            .text("clinic_name", req.clinic_name.clone())
            .text("clinic_address", req.clinic_address.clone())
            .text("clinic_phone", req.clinic_phone.clone())
            .text("clinic_email", req.clinic_email.clone())
            .text("subscription_plan", req.subscription_plan.clone())
            .text("manager_name", req.manager_name.clone())
            .text("manager_email", req.manager_email.clone())
            .text("manager_phone", req.manager_phone.clone())
            .text("password", req.password.clone())
            .text("password_confirmation", req.password_confirmation.clone());
        if let Some(specialty) = req.specialty.clone() {
            form = form.text("specialty", specialty);
        }
        if let (Some(data), Some(content_type)) = (&req.logo_base64, &req.logo_content_type) {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(data)
                .map_err(|_| AppError::bad_request("Logo upload could not be decoded"))?;
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name("logo")
                .mime_str(content_type)
                .map_err(|_| AppError::bad_request("Unsupported logo content type"))?;
            form = form.part("logo", part);
        }
        self.send(
            self.http.post(self.url("/api/clinics/register")).multipart(form),
            None,
        )
        .await
    }

    /// Best-effort token revocation. Errors are logged and swallowed; the
    /// session cookies are cleared regardless.
    #[tracing::instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) {
        let result: Result<serde_json::Value, AppError> = self
            .post_json("/api/auth/logout", &serde_json::json!({}), Some(token))
            .await;
        if let Err(e) = result {
            tracing::warn!(error = %e, "Backend logout failed");
        }
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn fetch_settings(&self, token: &str) -> Result<Clinic, AppError> {
        self.get_json("/api/clinic/settings", token).await
    }

    #[tracing::instrument(skip(self, token, req))]
    pub async fn update_settings(
        &self,
        token: &str,
        req: &UpdateClinicRequest,
    ) -> Result<Clinic, AppError> {
        self.put_json("/api/clinic/settings", req, token).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn search_patients(
        &self,
        token: &str,
        query: &str,
    ) -> Result<Vec<PatientLookup>, AppError> {
        // reqwest percent-encodes query pairs
        self.send(
            self.http
                .get(self.url("/api/patients/search"))
                .query(&[("q", query)]),
            Some(token),
        )
        .await
    }

    #[tracing::instrument(skip(self, token, req))]
    pub async fn create_patient(
        &self,
        token: &str,
        req: &NewPatientRequest,
    ) -> Result<PatientLookup, AppError> {
        self.post_json("/api/patients", req, Some(token)).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list_visits(&self, token: &str, patient_id: &str) -> Result<Vec<Visit>, AppError> {
        self.get_json(&format!("/api/patients/{}/visits", patient_id), token)
            .await
    }

    /// Visit history of the patient the token belongs to. The backend scopes
    /// the result by the session, so no patient id travels with the request.
    #[tracing::instrument(skip(self, token))]
    pub async fn list_my_visits(&self, token: &str) -> Result<Vec<Visit>, AppError> {
        self.get_json("/api/patients/me/visits", token).await
    }

    #[tracing::instrument(skip(self, token, req))]
    pub async fn create_appointment(
        &self,
        token: &str,
        req: &NewAppointmentRequest,
    ) -> Result<Appointment, AppError> {
        self.post_json("/api/appointments", req, Some(token)).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list_appointments(&self, token: &str) -> Result<Vec<Appointment>, AppError> {
        self.get_json("/api/appointments", token).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list_doctors(
        &self,
        token: &str,
        specialty: Option<&str>,
    ) -> Result<Vec<Doctor>, AppError> {
        let mut req = self.http.get(self.url("/api/doctors"));
        if let Some(s) = specialty {
            req = req.query(&[("specialty", s)]);
        }
        self.send(req, Some(token)).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, AppError> {
        self.get_json("/api/dashboard/stats", token).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn platform_stats(&self, token: &str) -> Result<PlatformStats, AppError> {
        self.get_json("/api/admin/stats", token).await
    }
}

/// Map a non-2xx backend response onto an [`AppError`].
///
/// The backend reports validation failures as `{"errors": {"field": ["msg"]}}`
/// and everything else as `{"message": "..."}` or `{"error": "..."}`. Backend
/// 5xx bodies are never shown to users.
pub fn parse_backend_error(status: u16, body: &str) -> AppError {
    let json: Option<serde_json::Value> = serde_json::from_str(body).ok();

    let message = json
        .as_ref()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
        })
        .map(str::to_string);

    match status {
        422 => {
            let mut field_errors = HashMap::new();
            if let Some(errors) = json.as_ref().and_then(|v| v.get("errors")).and_then(|e| e.as_object()) {
                for (field, msgs) in errors {
                    let first = match msgs {
                        serde_json::Value::Array(list) => {
                            list.first().and_then(|m| m.as_str()).map(str::to_string)
                        }
                        serde_json::Value::String(s) => Some(s.clone()),
                        _ => None,
                    };
                    if let Some(msg) = first {
                        field_errors.insert(field.clone(), msg);
                    }
                }
            }
            AppError::validation(
                message.unwrap_or_else(|| "Validation failed".to_string()),
                field_errors,
            )
        }
        400 => AppError::bad_request(message.unwrap_or_else(|| "Invalid request".to_string())),
        401 => {
            AppError::unauthorized(message.unwrap_or_else(|| "Invalid email or password".to_string()))
        }
        403 => AppError::forbidden(
            message.unwrap_or_else(|| "You do not have access to this clinic".to_string()),
        ),
        404 => AppError::not_found(message.unwrap_or_else(|| "Not found".to_string())),
        409 => AppError::conflict(
            message.unwrap_or_else(|| "A record with this value already exists".to_string()),
        ),
        s if s >= 500 => {
            tracing::error!(status = s, body, "Clinic backend error");
            AppError::bad_gateway("The service is temporarily unavailable. Please try again later.")
        }
        s => {
            tracing::warn!(status = s, body, "Unexpected clinic backend status");
            AppError::internal(message.unwrap_or_else(|| "Unexpected backend response".to_string()))
        }
    }
}
