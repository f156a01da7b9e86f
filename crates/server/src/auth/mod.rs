pub mod cookies;
pub mod middleware;
pub mod session;

/// Check if the given email matches the `PLATFORM_ADMIN_EMAIL` env var
/// (case-insensitive). Returns `false` if the env var is empty or unset.
///
/// Lets an operator flag one account as platform admin without waiting for
/// the backend to grow that concept.
pub fn is_platform_admin_email(email: &str) -> bool {
    match std::env::var("PLATFORM_ADMIN_EMAIL") {
        Ok(admin) if !admin.is_empty() => admin.eq_ignore_ascii_case(email),
        _ => false,
    }
}
