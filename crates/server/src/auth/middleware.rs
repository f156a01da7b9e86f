use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};

/// Permissive session middleware.
///
/// On each request:
/// 1. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 2. After the handler runs, applies any pending cookie action to the response
///
/// Does NOT reject unauthenticated requests — server functions decide
/// authorization, and the backend token is opaque here so there is nothing
/// to validate locally.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    let action = cookie_slot.0.lock().ok().and_then(|mut slot| slot.take());
    if let Some(action) = action {
        match action {
            PendingCookieAction::Set { token, user } => {
                cookies::set_session_cookies(response.headers_mut(), &token, &user);
            }
            PendingCookieAction::Clear => {
                cookies::clear_session_cookies(response.headers_mut());
            }
        }
    }

    response
}
