use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
#[cfg(feature = "validation")]
use validator::Validate;

/// Maximum accepted clinic logo size in bytes (2 MiB).
pub const LOGO_MAX_BYTES: u64 = 2 * 1024 * 1024;

/// MIME types accepted for the clinic logo.
pub const LOGO_ALLOWED_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/svg+xml",
];

/// Check a candidate logo file against the type and size limits.
///
/// Returns `Some(message)` describing the first violated constraint, or
/// `None` when the file is acceptable. Registration and settings both use
/// this, so rejected files surface the same inline error everywhere.
pub fn logo_file_error(content_type: &str, size: u64) -> Option<&'static str> {
    if !LOGO_ALLOWED_TYPES.contains(&content_type) {
        return Some("Logo must be a JPEG, PNG, GIF, or SVG image");
    }
    if size > LOGO_MAX_BYTES {
        return Some("Logo must be 2 MB or smaller");
    }
    None
}

#[cfg(feature = "validation")]
fn validate_subscription_plan(plan: &str) -> Result<(), validator::ValidationError> {
    match plan.to_ascii_lowercase().as_str() {
        "basic" | "standard" | "premium" => Ok(()),
        _ => Err(validator::ValidationError::new("subscription_plan")
            .with_message(std::borrow::Cow::Borrowed("Choose a subscription plan"))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Clinic sign-up form: the clinic record plus its manager account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterClinicRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 100, message = "Clinic name is required"))
    )]
    pub clinic_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 255, message = "Clinic address is required"))
    )]
    pub clinic_address: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 20, message = "Clinic phone is required"))
    )]
    pub clinic_phone: String,
    #[cfg_attr(
        feature = "validation",
        validate(
            email(message = "Valid clinic email is required"),
            length(max = 100, message = "Clinic email is too long")
        )
    )]
    pub clinic_email: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = validate_subscription_plan))
    )]
    pub subscription_plan: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 100, message = "Manager name is required"))
    )]
    pub manager_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid manager email is required"))
    )]
    pub manager_email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 20, message = "Manager phone is required"))
    )]
    pub manager_phone: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    pub password_confirmation: String,
    /// Manager's medical specialty, for clinics where the manager also
    /// practices.
    #[serde(default)]
    pub specialty: Option<String>,
    /// Base64-encoded logo bytes, already checked by [`logo_file_error`].
    #[serde(default)]
    pub logo_base64: Option<String>,
    #[serde(default)]
    pub logo_content_type: Option<String>,
}

#[cfg(feature = "validation")]
impl RegisterClinicRequest {
    /// Derive validation plus the password confirmation check, which the
    /// derive cannot express across two fields.
    pub fn validate_full(&self) -> Result<(), crate::error::AppError> {
        let mut app_error = match self.validate() {
            Ok(()) => None,
            Err(errors) => Some(crate::error::AppError::from(errors)),
        };
        if self.password_confirmation != self.password {
            let err = app_error.get_or_insert_with(|| {
                crate::error::AppError::validation("Validation failed", Default::default())
            });
            err.field_errors.insert(
                "password_confirmation".to_string(),
                "Passwords do not match".to_string(),
            );
        }
        match app_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct NewPatientRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 100, message = "Patient name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 20, message = "National ID is required"))
    )]
    pub national_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 20, message = "Phone number is required"))
    )]
    pub phone: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct NewAppointmentRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select a patient"))
    )]
    pub patient_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select a specialty"))
    )]
    pub specialty: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select a doctor"))
    )]
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub complaint: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Whole-record settings save. The backend replaces the stored clinic
/// profile with this payload; there is no field-level patch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateClinicRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 100, message = "Clinic name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 255, message = "Clinic address is required"))
    )]
    pub address: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 20, message = "Clinic phone is required"))
    )]
    pub phone: String,
    #[cfg_attr(
        feature = "validation",
        validate(
            email(message = "Valid clinic email is required"),
            length(max = 100, message = "Clinic email is too long")
        )
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = validate_subscription_plan))
    )]
    pub subscription_plan: String,
    pub status: String,
    #[serde(default)]
    pub logo_base64: Option<String>,
    #[serde(default)]
    pub logo_content_type: Option<String>,
}
