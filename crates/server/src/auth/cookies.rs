use axum::http::{header, HeaderMap, HeaderValue};
use base64::Engine;
use cookie::Cookie;
use shared_types::AuthUser;
use std::sync::{Arc, Mutex};

/// Backend bearer token, opaque to this app.
pub const CLINIC_TOKEN: &str = "clinic_token";
/// Base64-encoded JSON snapshot of the signed-in user.
pub const CLINIC_USER: &str = "clinic_user";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

fn build_session_cookie(name: &'static str, value: &str, max_age_days: i64) -> Option<HeaderValue> {
    let mut cookie = Cookie::build((name, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_days * 86400))
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string()).ok()
}

fn build_clear_cookie(name: &'static str) -> Option<HeaderValue> {
    let cookie = Cookie::build((name, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Encode the user snapshot for cookie transport. JSON is not cookie-safe,
/// so the snapshot travels base64url-encoded.
pub fn encode_user_snapshot(user: &AuthUser) -> String {
    let json = serde_json::to_string(user).unwrap_or_default();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json)
}

pub fn decode_user_snapshot(encoded: &str) -> Option<AuthUser> {
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded)
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Set the token and user-snapshot cookies on the response.
pub fn set_session_cookies(headers: &mut HeaderMap, token: &str, user: &AuthUser) {
    let days = crate::config::app_config().session.cookie_days;
    let snapshot = encode_user_snapshot(user);
    if let Some(cookie) = build_session_cookie(CLINIC_TOKEN, token, days) {
        headers.append(header::SET_COOKIE, cookie);
    }
    if let Some(cookie) = build_session_cookie(CLINIC_USER, &snapshot, days) {
        headers.append(header::SET_COOKIE, cookie);
    }
}

/// Clear both session cookies on the response.
pub fn clear_session_cookies(headers: &mut HeaderMap) {
    for name in [CLINIC_TOKEN, CLINIC_USER] {
        if let Some(cookie) = build_clear_cookie(name) {
            headers.append(header::SET_COOKIE, cookie);
        }
    }
}

/// Parse a specific cookie value from the Cookie header.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Pending cookie action to be picked up by the session middleware.
/// Stored in request extensions as `Arc<Mutex<>>` so server functions can populate it.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set { token: String, user: AuthUser },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

/// Schedule session cookies to be set by the middleware.
/// Called from server functions — reads the CookieSlot from FullstackContext extensions.
pub fn schedule_session_cookies(token: &str, user: &AuthUser) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            if let Ok(mut pending) = slot.0.lock() {
                *pending = Some(PendingCookieAction::Set {
                    token: token.to_string(),
                    user: user.clone(),
                });
            }
        }
    }
}

/// Schedule session cookies to be cleared by the middleware.
pub fn schedule_clear_cookies() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            if let Ok(mut pending) = slot.0.lock() {
                *pending = Some(PendingCookieAction::Clear);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> AuthUser {
        AuthUser {
            id: "u1".into(),
            name: "Huda Mansour".into(),
            email: "huda@alshifa.example".into(),
            role: "Manager".into(),
            is_platform_admin: false,
            clinic: None,
        }
    }

    #[test]
    fn snapshot_roundtrip() {
        let user = sample_user();
        let encoded = encode_user_snapshot(&user);
        // cookie values must not contain JSON punctuation
        assert!(!encoded.contains('{'));
        assert!(!encoded.contains(';'));
        assert_eq!(decode_user_snapshot(&encoded), Some(user));
    }

    #[test]
    fn snapshot_decode_rejects_garbage() {
        assert_eq!(decode_user_snapshot("not base64 at all!"), None);
        assert_eq!(decode_user_snapshot(""), None);
    }

    #[test]
    fn extract_cookie_finds_named_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("clinic_token=abc123; other=x"),
        );
        assert_eq!(
            extract_cookie(&headers, CLINIC_TOKEN),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, CLINIC_USER), None);
    }
}
