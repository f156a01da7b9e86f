use crate::auth::use_auth;
use crate::i18n::{tr, use_language};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{logo_file_error, RegisterClinicRequest};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect, Input, Label,
};
use std::collections::HashMap;

/// Clinic sign-up: clinic profile, manager account, optional logo.
/// The same form creates both records; the manager lands on the clinic
/// dashboard signed in.
#[component]
pub fn JoinUs() -> Element {
    let mut auth = use_auth();
    let lang = *use_language().language.read();

    let mut clinic_name = use_signal(String::new);
    let mut clinic_address = use_signal(String::new);
    let mut clinic_phone = use_signal(String::new);
    let mut clinic_email = use_signal(String::new);
    let mut subscription_plan = use_signal(|| "basic".to_string());
    let mut manager_name = use_signal(String::new);
    let mut manager_email = use_signal(String::new);
    let mut manager_phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password_confirmation = use_signal(String::new);
    let mut specialty = use_signal(String::new);

    // (base64 bytes, content type) for a logo that passed the local checks
    let mut logo = use_signal(|| Option::<(String, String)>::None);
    let mut logo_error = use_signal(|| Option::<String>::None);

    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_logo = move |evt: FormEvent| async move {
        logo_error.set(None);
        let files = evt.files();
        if let Some(file) = files.first() {
            let content_type = file
                .content_type()
                .unwrap_or_else(|| "application/octet-stream".to_string());
            if let Some(msg) = logo_file_error(&content_type, file.size()) {
                // rejected files are never attached to the form
                logo_error.set(Some(msg.to_string()));
                return;
            }
            match file.read_bytes().await {
                Ok(bytes) => {
                    use base64::Engine as _;
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                    logo.set(Some((encoded, content_type)));
                }
                Err(_) => {
                    logo_error.set(Some("Failed to read file".to_string()));
                }
            }
        }
    };

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let (logo_base64, logo_content_type) = match logo() {
            Some((data, ct)) => (Some(data), Some(ct)),
            None => (None, None),
        };
        let req = RegisterClinicRequest {
            clinic_name: clinic_name(),
            clinic_address: clinic_address(),
            clinic_phone: clinic_phone(),
            clinic_email: clinic_email(),
            subscription_plan: subscription_plan(),
            manager_name: manager_name(),
            manager_email: manager_email(),
            manager_phone: manager_phone(),
            password: password(),
            password_confirmation: password_confirmation(),
            specialty: Some(specialty()).filter(|s| !s.is_empty()),
            logo_base64,
            logo_content_type,
        };

        // Local validation first: bad input never leaves the browser
        if let Err(err) = req.validate_full() {
            field_errors.set(err.field_errors);
            return;
        }

        loading.set(true);
        match server::api::register_clinic(req).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::ClinicDashboard {
                    registered: Some("1".to_string()),
                });
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

    let field_error = move |name: &str| field_errors().get(name).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./join_us.css") }

        div { class: "auth-page join-page",
            Card {
                class: "auth-card join-card",

                CardHeader {
                    CardTitle { {tr(lang, "join.title")} }
                    CardDescription { {tr(lang, "join.subtitle")} }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_register,
                        h3 { class: "join-section-title", {tr(lang, "join.clinic_section")} }

                        div { class: "join-grid",
                            div { class: "auth-field",
                                Label { html_for: "clinic_name", {tr(lang, "join.clinic_name")} }
                                Input {
                                    id: "clinic_name",
                                    value: clinic_name(),
                                    on_input: move |e: FormEvent| clinic_name.set(e.value()),
                                }
                                if let Some(err) = field_error("clinic_name") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                Label { html_for: "clinic_phone", {tr(lang, "join.phone")} }
                                Input {
                                    id: "clinic_phone",
                                    value: clinic_phone(),
                                    on_input: move |e: FormEvent| clinic_phone.set(e.value()),
                                }
                                if let Some(err) = field_error("clinic_phone") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                        }

                        div { class: "auth-field",
                            Label { html_for: "clinic_address", {tr(lang, "join.address")} }
                            Input {
                                id: "clinic_address",
                                value: clinic_address(),
                                on_input: move |e: FormEvent| clinic_address.set(e.value()),
                            }
                            if let Some(err) = field_error("clinic_address") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }

                        div { class: "join-grid",
                            div { class: "auth-field",
                                Label { html_for: "clinic_email", {tr(lang, "login.email")} }
                                Input {
                                    input_type: "email",
                                    id: "clinic_email",
                                    value: clinic_email(),
                                    on_input: move |e: FormEvent| clinic_email.set(e.value()),
                                }
                                if let Some(err) = field_error("clinic_email") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                FormSelect {
                                    label: tr(lang, "join.plan").to_string(),
                                    value: subscription_plan(),
                                    onchange: move |e: Event<FormData>| subscription_plan.set(e.value()),
                                    option { value: "basic", "Basic" }
                                    option { value: "standard", "Standard" }
                                    option { value: "premium", "Premium" }
                                }
                                if let Some(err) = field_error("subscription_plan") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                        }

                        div { class: "auth-field",
                            Label { html_for: "logo", {tr(lang, "join.logo")} }
                            input {
                                r#type: "file",
                                id: "logo",
                                accept: "image/jpeg,image/png,image/gif,image/svg+xml",
                                onchange: handle_logo,
                            }
                            if let Some(err) = logo_error() {
                                div { class: "auth-field-error", "{err}" }
                            }
                            if let Some(err) = field_error("logo") {
                                div { class: "auth-field-error", "{err}" }
                            }
                            if let Some((data, content_type)) = logo() {
                                img {
                                    class: "join-logo-preview",
                                    src: "data:{content_type};base64,{data}",
                                    alt: "Logo preview",
                                }
                            }
                        }

                        h3 { class: "join-section-title", {tr(lang, "join.manager_section")} }

                        div { class: "join-grid",
                            div { class: "auth-field",
                                Label { html_for: "manager_name", {tr(lang, "join.manager_name")} }
                                Input {
                                    id: "manager_name",
                                    value: manager_name(),
                                    on_input: move |e: FormEvent| manager_name.set(e.value()),
                                }
                                if let Some(err) = field_error("manager_name") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                Label { html_for: "manager_phone", {tr(lang, "join.phone")} }
                                Input {
                                    id: "manager_phone",
                                    value: manager_phone(),
                                    on_input: move |e: FormEvent| manager_phone.set(e.value()),
                                }
                                if let Some(err) = field_error("manager_phone") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                        }

                        div { class: "join-grid",
                            div { class: "auth-field",
                                Label { html_for: "manager_email", {tr(lang, "login.email")} }
                                Input {
                                    input_type: "email",
                                    id: "manager_email",
                                    value: manager_email(),
                                    on_input: move |e: FormEvent| manager_email.set(e.value()),
                                }
                                if let Some(err) = field_error("manager_email") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                Label { html_for: "specialty", {tr(lang, "join.specialty")} }
                                Input {
                                    id: "specialty",
                                    value: specialty(),
                                    on_input: move |e: FormEvent| specialty.set(e.value()),
                                }
                            }
                        }

                        div { class: "join-grid",
                            div { class: "auth-field",
                                Label { html_for: "password", {tr(lang, "login.password")} }
                                Input {
                                    input_type: "password",
                                    id: "password",
                                    value: password(),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                                if let Some(err) = field_error("password") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                Label { html_for: "password_confirmation", {tr(lang, "join.confirm_password")} }
                                Input {
                                    input_type: "password",
                                    id: "password_confirmation",
                                    value: password_confirmation(),
                                    on_input: move |e: FormEvent| password_confirmation.set(e.value()),
                                }
                                if let Some(err) = field_error("password_confirmation") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { {tr(lang, "join.submitting")} } else { {tr(lang, "join.submit")} }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        {tr(lang, "join.have_account")}
                        Link { to: Route::Login {}, {tr(lang, "login.title")} }
                    }
                }
            }
        }
    }
}
