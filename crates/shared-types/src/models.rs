use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Staff and patient roles as the clinic backend reports them.
///
/// The wire format is a plain string, so `AuthUser::role` stays a `String`
/// and call sites parse it with [`UserRole::from_str`]. Unknown strings stay
/// unparsed and the caller decides the fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Manager,
    Doctor,
    Secretary,
    Patient,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::Doctor => "Doctor",
            UserRole::Secretary => "Secretary",
            UserRole::Patient => "Patient",
        }
    }

    /// Case-insensitive parse. Older backend payloads used lowercase role
    /// names, so both `"Doctor"` and `"doctor"` decode.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "doctor" => Some(UserRole::Doctor),
            "secretary" => Some(UserRole::Secretary),
            "patient" => Some(UserRole::Patient),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SubscriptionPlan {
    #[default]
    Basic,
    Standard,
    Premium,
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "Basic",
            SubscriptionPlan::Standard => "Standard",
            SubscriptionPlan::Premium => "Premium",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "standard" => SubscriptionPlan::Standard,
            "premium" => SubscriptionPlan::Premium,
            _ => SubscriptionPlan::Basic,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ClinicStatus {
    #[default]
    Active,
    Inactive,
}

impl ClinicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicStatus::Active => "Active",
            ClinicStatus::Inactive => "Inactive",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "inactive" => ClinicStatus::Inactive,
            _ => ClinicStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AppointmentStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Completed => "Completed",
        }
    }
}

/// Clinic record as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clinic {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub subscription_plan: SubscriptionPlan,
    #[serde(default)]
    pub status: ClinicStatus,
}

/// The signed-in user as returned by the backend login endpoint and cached
/// in the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Raw role string from the backend; parse with [`UserRole::from_str`].
    pub role: String,
    #[serde(default)]
    pub is_platform_admin: bool,
    #[serde(default)]
    pub clinic: Option<Clinic>,
}

/// Backend response to a successful credential check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// A patient row from the reception search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientLookup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
}

/// A past visit shown in the previous-visits panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub clinic_name: String,
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Whether the appointment starts at or after `now`.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.date.and_time(self.time) >= now
    }
}

/// Aggregate counters for the clinic dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub today_appointments: i64,
    #[serde(default)]
    pub active_doctors: i64,
    #[serde(default)]
    pub total_patients: i64,
    #[serde(default)]
    pub monthly_revenue: String,
}

/// Aggregate counters for the platform admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlatformStats {
    #[serde(default)]
    pub total_clinics: i64,
    #[serde(default)]
    pub active_subscriptions: i64,
    #[serde(default)]
    pub pending_approvals: i64,
    #[serde(default)]
    pub monthly_revenue: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(UserRole::from_str("Doctor"), Some(UserRole::Doctor));
        assert_eq!(UserRole::from_str("doctor"), Some(UserRole::Doctor));
        assert_eq!(UserRole::from_str("SECRETARY"), Some(UserRole::Secretary));
    }

    #[test]
    fn unknown_role_does_not_parse() {
        assert_eq!(UserRole::from_str("Janitor"), None);
        assert_eq!(UserRole::from_str(""), None);
    }

    #[test]
    fn role_as_str_round_trips() {
        for role in [
            UserRole::Admin,
            UserRole::Manager,
            UserRole::Doctor,
            UserRole::Secretary,
            UserRole::Patient,
        ] {
            assert_eq!(UserRole::from_str(role.as_str()), Some(role));
        }
    }

    #[test]
    fn plan_falls_back_to_basic() {
        assert_eq!(
            SubscriptionPlan::from_str_or_default("gold"),
            SubscriptionPlan::Basic
        );
        assert_eq!(
            SubscriptionPlan::from_str_or_default("premium"),
            SubscriptionPlan::Premium
        );
    }

    #[test]
    fn auth_user_defaults_on_sparse_payload() {
        let json = r#"{"id":"u1","name":"Dr. Huda","email":"huda@clinic.example","role":"Doctor"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert!(!user.is_platform_admin);
        assert!(user.clinic.is_none());
        assert_eq!(UserRole::from_str(&user.role), Some(UserRole::Doctor));
    }

    #[test]
    fn appointment_upcoming_split() {
        let appt = Appointment {
            id: "a1".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            clinic_name: "Al Shifa".into(),
            doctor_name: "Dr. Huda".into(),
            status: AppointmentStatus::Confirmed,
        };
        let before = NaiveDate::from_ymd_opt(2026, 8, 31)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(10, 31, 0)
            .unwrap();
        assert!(appt.is_upcoming(before));
        assert!(!appt.is_upcoming(after));
    }

    #[test]
    fn appointment_starting_now_counts_as_upcoming() {
        let appt = Appointment {
            id: "a2".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            clinic_name: String::new(),
            doctor_name: String::new(),
            status: AppointmentStatus::Pending,
        };
        let exactly = NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert!(appt.is_upcoming(exactly));
    }

    #[test]
    fn dashboard_stats_defaults_to_zero() {
        let stats: DashboardStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.today_appointments, 0);
        assert_eq!(stats.monthly_revenue, "");
    }
}
