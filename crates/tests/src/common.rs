//! In-process stand-in for the clinic REST backend.
//!
//! Each test spawns its own instance on an ephemeral port and points a
//! `BackendClient` at it, so tests run in parallel without shared state.

use axum::extract::{Multipart, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use server::backend::BackendClient;
use std::collections::HashMap;

/// Token the mock accepts on authenticated routes.
pub const TEST_TOKEN: &str = "tok-valid";
/// Token that makes every authenticated route answer 500.
pub const EXPLODING_TOKEN: &str = "tok-explode";

/// Start the mock backend and return a client pointed at it.
pub async fn test_backend() -> BackendClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, mock_router()).await.ok();
    });
    BackendClient::new(format!("http://{}", addr), 5)
}

/// A client aimed at a port nothing listens on.
pub fn unreachable_backend() -> BackendClient {
    BackendClient::new("http://127.0.0.1:1", 1)
}

fn mock_router() -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/clinics/register", post(register_clinic))
        .route("/api/clinic/settings", get(get_settings).put(put_settings))
        .route("/api/patients/search", get(search_patients))
        .route("/api/patients", post(create_patient))
        .route("/api/patients/me/visits", get(my_visits))
        .route("/api/patients/{id}/visits", get(list_visits))
        .route("/api/appointments", get(list_appointments).post(create_appointment))
        .route("/api/doctors", get(list_doctors))
        .route("/api/dashboard/stats", get(dashboard_stats))
        .route("/api/admin/stats", get(platform_stats))
}

fn check_auth(headers: &HeaderMap) -> Result<(), Response> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    match token {
        Some(EXPLODING_TOKEN) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "boom"})),
        )
            .into_response()),
        Some(TEST_TOKEN) => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Session expired"})),
        )
            .into_response()),
    }
}

fn sample_clinic() -> Value {
    json!({
        "id": "c1",
        "name": "Nile Valley Clinic",
        "address": "4 Tahrir Sq, Cairo",
        "phone": "+20 2 555 0199",
        "email": "desk@nilevalley.example",
        "logo_url": "https://cdn.example/logos/c1.png",
        "subscription_plan": "Standard",
        "status": "Active"
    })
}

fn sample_user(role: &str) -> Value {
    json!({
        "id": "u1",
        "name": "Mona Hassan",
        "email": "mona@nilevalley.example",
        "role": role,
        "is_platform_admin": false,
        "clinic": sample_clinic()
    })
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "correct horse" {
        if body["email"] == "admin@platform.com" {
            let mut user = sample_user("Admin");
            user["is_platform_admin"] = json!(true);
            user["clinic"] = Value::Null;
            return Json(json!({"token": TEST_TOKEN, "user": user})).into_response();
        }
        Json(json!({"token": TEST_TOKEN, "user": sample_user("Manager")})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid email or password"})),
        )
            .into_response()
    }
}

async fn logout(headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    Json(json!({})).into_response()
}

async fn register_clinic(mut multipart: Multipart) -> Response {
    let mut fields = HashMap::new();
    let mut logo_bytes = 0usize;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "logo" {
            logo_bytes = field.bytes().await.map(|b| b.len()).unwrap_or(0);
        } else if let Ok(text) = field.text().await {
            fields.insert(name, text);
        }
    }
    if fields.get("clinic_email").map(String::as_str) == Some("taken@clinic.example") {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "Validation failed",
                "errors": {"clinic_email": ["Email already registered"]}
            })),
        )
            .into_response();
    }
    let mut user = sample_user("Manager");
    user["name"] = json!(fields.get("manager_name").cloned().unwrap_or_default());
    user["clinic"]["name"] = json!(fields.get("clinic_name").cloned().unwrap_or_default());
    if logo_bytes > 0 {
        user["clinic"]["logo_url"] = json!("https://cdn.example/logos/new.png");
    }
    Json(json!({"token": TEST_TOKEN, "user": user})).into_response()
}

async fn get_settings(headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    Json(sample_clinic()).into_response()
}

async fn put_settings(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    if body["name"] == "" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"errors": {"name": ["Clinic name is required"]}})),
        )
            .into_response();
    }
    let mut clinic = sample_clinic();
    clinic["name"] = body["name"].clone();
    clinic["address"] = body["address"].clone();
    clinic["phone"] = body["phone"].clone();
    clinic["email"] = body["email"].clone();
    clinic["subscription_plan"] =
        json!(capitalize(body["subscription_plan"].as_str().unwrap_or("basic")));
    clinic["status"] = json!(capitalize(body["status"].as_str().unwrap_or("active")));
    Json(clinic).into_response()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

async fn search_patients(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    let q = params.get("q").cloned().unwrap_or_default();
    let patients = [
        json!({"id": "p1", "name": "Omar Farouk", "national_id": "29001010100123", "phone": "+20 100 555 0001"}),
        json!({"id": "p2", "name": "Laila Mansour", "national_id": "28505050200456", "phone": "+20 100 555 0002"}),
    ];
    let matches: Vec<Value> = patients
        .into_iter()
        .filter(|p| {
            p["name"].as_str().unwrap_or("").contains(&q)
                || p["national_id"].as_str().unwrap_or("").contains(&q)
                || p["phone"].as_str().unwrap_or("").contains(&q)
        })
        .collect();
    Json(json!(matches)).into_response()
}

async fn create_patient(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    if body["national_id"] == "29001010100123" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "National ID already registered"})),
        )
            .into_response();
    }
    Json(json!({
        "id": "p9",
        "name": body["name"],
        "national_id": body["national_id"],
        "phone": body["phone"]
    }))
    .into_response()
}

async fn my_visits(headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    Json(json!([
        {"id": "v7", "date": "2026-05-19", "doctor_name": "Dr. Hala Tawfik", "diagnosis": "Hypertension check", "notes": "Blood pressure stable"},
        {"id": "v8", "date": "2026-06-30", "doctor_name": "Dr. Hala Tawfik", "diagnosis": "Follow-up", "notes": ""}
    ]))
    .into_response()
}

async fn list_visits(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    if id == "p1" {
        Json(json!([
            {"id": "v1", "date": "2026-07-02", "doctor_name": "Dr. Adel Samir", "diagnosis": "Seasonal rhinitis", "notes": "Prescribed antihistamines"},
            {"id": "v2", "date": "2026-08-11", "doctor_name": "Dr. Adel Samir", "diagnosis": "Follow-up", "notes": ""}
        ]))
        .into_response()
    } else {
        Json(json!([])).into_response()
    }
}

async fn create_appointment(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    Json(json!({
        "id": "a9",
        "date": body["date"],
        "time": body["time"],
        "clinic_name": "Nile Valley Clinic",
        "doctor_name": "Dr. Adel Samir",
        "status": "Pending"
    }))
    .into_response()
}

async fn list_appointments(headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    Json(json!([
        {"id": "a1", "date": "2026-08-20", "time": "09:30:00", "clinic_name": "Nile Valley Clinic", "doctor_name": "Dr. Adel Samir", "status": "Completed"},
        {"id": "a2", "date": "2026-09-14", "time": "14:00:00", "clinic_name": "Nile Valley Clinic", "doctor_name": "Dr. Hala Tawfik", "status": "Confirmed"}
    ]))
    .into_response()
}

async fn list_doctors(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    let doctors = [
        json!({"id": "d1", "name": "Dr. Adel Samir", "specialty": "ENT"}),
        json!({"id": "d2", "name": "Dr. Hala Tawfik", "specialty": "Cardiology"}),
        json!({"id": "d3", "name": "Dr. Karim Nour", "specialty": "ENT"}),
    ];
    let filtered: Vec<Value> = match params.get("specialty") {
        Some(s) => doctors
            .into_iter()
            .filter(|d| d["specialty"].as_str() == Some(s))
            .collect(),
        None => doctors.to_vec(),
    };
    Json(json!(filtered)).into_response()
}

async fn dashboard_stats(headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    Json(json!({
        "today_appointments": 12,
        "active_doctors": 4,
        "total_patients": 318,
        "monthly_revenue": "EGP 42,500"
    }))
    .into_response()
}

async fn platform_stats(headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&headers) {
        return resp;
    }
    Json(json!({
        "total_clinics": 57,
        "active_subscriptions": 51,
        "pending_approvals": 3,
        "monthly_revenue": "EGP 480,000"
    }))
    .into_response()
}
