#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod clinic_settings_tests;

#[cfg(test)]
mod patient_tests;

#[cfg(test)]
mod appointment_tests;

#[cfg(test)]
mod dashboard_tests;
