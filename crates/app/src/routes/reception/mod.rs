mod appointment_create;
mod patient_register;

pub use appointment_create::AppointmentCreate;
pub use patient_register::PatientRegister;
