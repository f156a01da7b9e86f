use dioxus::prelude::*;

mod auth;
mod i18n;
mod routes;
mod widgets;

use auth::AuthState;
use i18n::I18nState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        dotenvy::dotenv().ok();
        server::config::load_config();

        let router = dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    use_context_provider(I18nState::new);

    let lang = i18n::use_language();
    let dir = lang.language.read().dir();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        div { dir: "{dir}",
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
