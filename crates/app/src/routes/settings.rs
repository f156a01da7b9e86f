use crate::i18n::{tr, use_language};
use crate::widgets::FlashMessage;
use dioxus::prelude::*;
use shared_types::{logo_file_error, Clinic, UpdateClinicRequest};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, FormSelect, Input, Label, Skeleton};
use std::collections::HashMap;
use validator::Validate;

/// Clinic settings page.
///
/// The fetch is tri-state: skeleton while loading, an inline banner with a
/// retry button on failure (no editable fields are shown), and the form
/// seeded from the snapshot once it arrives.
#[component]
pub fn ClinicSettings() -> Element {
    let lang = *use_language().language.read();
    let mut reload = use_signal(|| 0u32);

    let settings = use_resource(move || {
        reload();
        async move { server::api::get_clinic_settings().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "container",
            match &*settings.read() {
                Some(Ok(clinic)) => rsx! {
                    SettingsForm { key: "{clinic.id}-{reload()}", clinic: clinic.clone() }
                },
                Some(Err(e)) => {
                    let message = shared_types::AppError::friendly_message(&e.to_string());
                    rsx! {
                        div { class: "settings-error",
                            div { class: "auth-error", "{message}" }
                            button {
                                class: "button",
                                onclick: move |_| reload.set(reload() + 1),
                                {tr(lang, "settings.retry")}
                            }
                        }
                    }
                }
                None => rsx! {
                    div { class: "settings-loading",
                        Skeleton { style: "height: 14rem;" }
                    }
                },
            }
        }
    }
}

/// The editable form, seeded from one committed snapshot.
///
/// Draft state lives in its own signals; `committed` is replaced only after
/// the backend acknowledges a save, and cancel copies committed back over
/// the draft.
#[component]
fn SettingsForm(clinic: Clinic) -> Element {
    let lang = *use_language().language.read();

    let mut committed = use_signal(|| clinic.clone());

    let seed = clinic.clone();
    let mut name = use_signal(|| seed.name.clone());
    let mut address = use_signal(|| seed.address.clone());
    let mut phone = use_signal(|| seed.phone.clone());
    let mut email = use_signal(|| seed.email.clone());
    let mut plan = use_signal(|| seed.subscription_plan.as_str().to_ascii_lowercase());
    let mut status = use_signal(|| seed.status.as_str().to_ascii_lowercase());

    // pending logo file, kept out of the draft until save succeeds
    let mut logo = use_signal(|| Option::<(String, String)>::None);
    let mut logo_error = use_signal(|| Option::<String>::None);

    let mut saved_flash = use_signal(|| false);
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

    let handle_cancel = move |_| {
        let snapshot = committed();
        name.set(snapshot.name);
        address.set(snapshot.address);
        phone.set(snapshot.phone);
        email.set(snapshot.email);
        plan.set(snapshot.subscription_plan.as_str().to_ascii_lowercase());
        status.set(snapshot.status.as_str().to_ascii_lowercase());
        logo.set(None);
        logo_error.set(None);
        error_msg.set(None);
        field_errors.set(HashMap::new());
        saved_flash.set(false);
    };

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());
        saved_flash.set(false);

        let (logo_base64, logo_content_type) = match logo() {
            Some((data, ct)) => (Some(data), Some(ct)),
            None => (None, None),
        };
        let req = UpdateClinicRequest {
            name: name(),
            address: address(),
            phone: phone(),
            email: email(),
            subscription_plan: plan(),
            status: status(),
            logo_base64,
            logo_content_type,
        };
        if let Err(errors) = req.validate() {
            field_errors.set(shared_types::AppError::from(errors).field_errors);
            return;
        }

        loading.set(true);
        match server::api::update_clinic_settings(req).await {
            Ok(updated) => {
                committed.set(updated);
                logo.set(None);
                saved_flash.set(true);
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
    let committed_logo_url = committed().logo_url;

    rsx! {
        Card {
            class: "settings-card",

            CardHeader {
                CardTitle { {tr(lang, "settings.title")} }
            }

            CardContent {
                if saved_flash() {
                    FlashMessage {
                        message: tr(lang, "settings.saved").to_string(),
                        on_dismiss: move |_| saved_flash.set(false),
                    }
                }
                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_save,
                    div { class: "auth-field",
                        Label { html_for: "name", {tr(lang, "join.clinic_name")} }
                        Input {
                            id: "name",
                            value: name(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        if let Some(err) = field_error("name") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "auth-field",
                        Label { html_for: "address", {tr(lang, "join.address")} }
                        Input {
                            id: "address",
                            value: address(),
                            on_input: move |e: FormEvent| address.set(e.value()),
                        }
                        if let Some(err) = field_error("address") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "settings-grid",
                        div { class: "auth-field",
                            Label { html_for: "phone", {tr(lang, "join.phone")} }
                            Input {
                                id: "phone",
                                value: phone(),
                                on_input: move |e: FormEvent| phone.set(e.value()),
                            }
                            if let Some(err) = field_error("phone") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", {tr(lang, "login.email")} }
                            Input {
                                input_type: "email",
                                id: "email",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_error("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                    }
                    div { class: "settings-grid",
                        div { class: "auth-field",
                            FormSelect {
                                label: tr(lang, "join.plan").to_string(),
                                value: plan(),
                                onchange: move |e: Event<FormData>| plan.set(e.value()),
                                option { value: "basic", "Basic" }
                                option { value: "standard", "Standard" }
                                option { value: "premium", "Premium" }
                            }
                            if let Some(err) = field_error("subscription_plan") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            FormSelect {
                                label: tr(lang, "settings.status").to_string(),
                                value: status(),
                                onchange: move |e: Event<FormData>| status.set(e.value()),
                                option { value: "active", "Active" }
                                option { value: "inactive", "Inactive" }
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
                                class: "settings-logo-preview",
                                src: "data:{content_type};base64,{data}",
                                alt: "Logo preview",
                            }
                        } else if let Some(url) = committed_logo_url {
                            img { class: "settings-logo-preview", src: "{url}", alt: "Clinic logo" }
                        }
                    }

                    div { class: "settings-actions",
                        button {
                            r#type: "submit",
                            class: "button",
                            disabled: loading(),
                            if loading() { {tr(lang, "settings.saving")} } else { {tr(lang, "settings.save")} }
                        }
                        button {
                            r#type: "button",
                            class: "button",
                            "data-style": "secondary",
                            disabled: loading(),
                            onclick: handle_cancel,
                            {tr(lang, "settings.cancel")}
                        }
                    }
                }
            }
        }
    }
}
