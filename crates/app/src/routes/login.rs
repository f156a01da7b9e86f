use crate::auth::use_auth;
use crate::i18n::{tr, use_language};
use crate::routes::{dashboard_route, Route};
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};
use std::collections::HashMap;
use validator::Validate;

/// Login page. Validates locally before any network call, then routes the
/// signed-in user to their role's dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let lang = *use_language().language.read();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the right dashboard
    if let Some(user) = auth.current_user.read().as_ref() {
        navigator().push(dashboard_route(user));
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let req = LoginRequest {
            email: email(),
            password: password(),
        };
        // Local validation first: bad input never leaves the browser
        if let Err(errors) = req.validate() {
            field_errors.set(shared_types::AppError::from(errors).field_errors);
            return;
        }

        loading.set(true);
        match server::api::login(req.email, req.password).await {
            Ok(user) => {
                let destination = dashboard_route(&user);
                auth.set_user(user);
                navigator().push(destination);
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = shared_types::AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { {tr(lang, "login.title")} }
                    CardDescription { {tr(lang, "login.subtitle")} }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", {tr(lang, "login.email")} }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "user@clinic.example",
                                invalid: field_errors().contains_key("email"),
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", {tr(lang, "login.password")} }
                            Input {
                                input_type: "password",
                                id: "password",
                                invalid: field_errors().contains_key("password"),
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { {tr(lang, "login.submitting")} } else { {tr(lang, "login.submit")} }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        {tr(lang, "login.no_account")}
                        Link { to: Route::JoinUs {}, {tr(lang, "login.join_us")} }
                    }
                }
            }
        }
    }
}
