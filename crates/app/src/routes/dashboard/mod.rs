mod clinic;
mod doctor;
mod patient;
mod platform;
mod reception;

pub use clinic::ClinicDashboard;
pub use doctor::DoctorDashboard;
pub use patient::PatientDashboard;
pub use platform::PlatformDashboard;
pub use reception::ReceptionDashboard;
