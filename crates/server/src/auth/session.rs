use axum::http::HeaderMap;
use shared_types::{AppError, AuthUser};

use super::cookies;

/// Read the session out of request cookies: the backend token plus the
/// cached user snapshot. Both cookies must be present and the snapshot must
/// decode, otherwise there is no session.
pub fn session_from_headers(headers: &HeaderMap) -> Option<(String, AuthUser)> {
    let token = cookies::extract_cookie(headers, cookies::CLINIC_TOKEN)?;
    let snapshot = cookies::extract_cookie(headers, cookies::CLINIC_USER)?;
    let user = cookies::decode_user_snapshot(&snapshot)?;
    Some((token, user))
}

/// Read the session for the current server function invocation.
pub fn current_session() -> Option<(String, AuthUser)> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let headers = ctx.parts_mut().headers.clone();
    session_from_headers(&headers)
}

/// Require a signed-in session, or fail with `Unauthorized`.
pub fn require_session() -> Result<(String, AuthUser), AppError> {
    current_session().ok_or_else(|| AppError::unauthorized("Please sign in to continue"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    #[test]
    fn no_cookies_means_no_session() {
        assert!(session_from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn token_without_snapshot_is_not_a_session() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("clinic_token=abc123"),
        );
        assert!(session_from_headers(&headers).is_none());
    }

    #[test]
    fn full_session_roundtrip() {
        let user = AuthUser {
            id: "u9".into(),
            name: "Samir".into(),
            email: "samir@clinic.example".into(),
            role: "Secretary".into(),
            is_platform_admin: false,
            clinic: None,
        };
        let snapshot = cookies::encode_user_snapshot(&user);
        let mut headers = HeaderMap::new();
        let value = format!("clinic_token=tok-1; clinic_user={}", snapshot);
        headers.insert(header::COOKIE, HeaderValue::from_str(&value).unwrap());

        let (token, parsed) = session_from_headers(&headers).unwrap();
        assert_eq!(token, "tok-1");
        assert_eq!(parsed, user);
    }
}
