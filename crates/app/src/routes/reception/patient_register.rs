use crate::i18n::{tr, use_language};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::NewPatientRequest;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Input, Label, Textarea};
use std::collections::HashMap;
use validator::Validate;

/// Walk-in patient intake form.
#[component]
pub fn PatientRegister() -> Element {
    let lang = *use_language().language.read();

    let mut name = use_signal(String::new);
    let mut national_id = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut date_of_birth = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let dob = match date_of_birth().as_str() {
            "" => None,
            s => match chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    let mut fe = HashMap::new();
                    fe.insert(
                        "date_of_birth".to_string(),
                        "Enter a valid date".to_string(),
                    );
                    field_errors.set(fe);
                    return;
                }
            },
        };

        let req = NewPatientRequest {
            name: name(),
            national_id: national_id(),
            phone: phone(),
            date_of_birth: dob,
            notes: Some(notes()).filter(|n| !n.is_empty()),
        };
        if let Err(errors) = req.validate() {
            field_errors.set(shared_types::AppError::from(errors).field_errors);
            return;
        }

        let booking_query = req.national_id.clone();
        loading.set(true);
        match server::api::register_patient(req).await {
            Ok(_) => {
                // hand off straight to booking with the new patient preselected
                navigator().push(Route::AppointmentCreate {
                    patient: Some(booking_query),
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
        document::Link { rel: "stylesheet", href: asset!("./reception.css") }

        div { class: "container",
            Card {
                class: "reception-card",

                CardHeader {
                    CardTitle { {tr(lang, "reception.register_patient")} }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_submit,
                        div { class: "auth-field",
                            Label { html_for: "name", required: true, {tr(lang, "reception.patient_name")} }
                            Input {
                                id: "name",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                            if let Some(err) = field_error("name") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "reception-grid",
                            div { class: "auth-field",
                                Label { html_for: "national_id", required: true, {tr(lang, "reception.national_id")} }
                                Input {
                                    id: "national_id",
                                    value: national_id(),
                                    on_input: move |e: FormEvent| national_id.set(e.value()),
                                }
                                if let Some(err) = field_error("national_id") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                Label { html_for: "phone", required: true, {tr(lang, "join.phone")} }
                                Input {
                                    id: "phone",
                                    value: phone(),
                                    on_input: move |e: FormEvent| phone.set(e.value()),
                                }
                                if let Some(err) = field_error("phone") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "date_of_birth", {tr(lang, "reception.date_of_birth")} }
                            Input {
                                input_type: "date",
                                id: "date_of_birth",
                                value: date_of_birth(),
                                on_input: move |e: FormEvent| date_of_birth.set(e.value()),
                            }
                            if let Some(err) = field_error("date_of_birth") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "notes", {tr(lang, "reception.notes")} }
                            Textarea {
                                id: "notes",
                                value: notes(),
                                on_input: move |e: FormEvent| notes.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { {tr(lang, "common.loading")} } else { {tr(lang, "reception.register_patient")} }
                        }
                    }
                }
            }
        }
    }
}
