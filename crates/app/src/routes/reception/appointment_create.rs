use crate::i18n::{tr, use_language};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{NewAppointmentRequest, PatientLookup, Visit};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, FormSelect, Input, Label, Skeleton, Textarea,
};
use std::collections::HashMap;
use validator::Validate;

/// Appointment booking: find a patient, review their history, pick a
/// doctor slot. `patient` carries a national ID handed over by the intake
/// form, searched and preselected on mount.
#[component]
pub fn AppointmentCreate(patient: Option<String>) -> Element {
    let lang = *use_language().language.read();

    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<PatientLookup>::new);
    let mut searching = use_signal(|| false);
    let mut search_error = use_signal(|| Option::<String>::None);

    let mut selected_patient = use_signal(|| Option::<PatientLookup>::None);
    let mut visits = use_signal(|| Option::<Vec<Visit>>::None);
    // bumped on every selection so a slow visits response for a previous
    // patient can never overwrite the current panel
    let mut visit_gen = use_signal(|| 0u32);

    let mut specialty = use_signal(String::new);
    let mut doctor_id = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut complaint = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let mut doctors_reload = use_signal(|| 0u32);
    let doctors = use_resource(move || {
        doctors_reload();
        async move { server::api::list_doctors(None).await }
    });
    let doctors_failed = matches!(&*doctors.read(), Some(Err(_)));
    let doctor_list = match &*doctors.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let mut specialties: Vec<String> = doctor_list.iter().map(|d| d.specialty.clone()).collect();
    specialties.sort();
    specialties.dedup();
    let filtered_doctors: Vec<_> = doctor_list
        .iter()
        .filter(|d| specialty().is_empty() || d.specialty == specialty())
        .cloned()
        .collect();

    let handle_search = move |evt: FormEvent| async move {
        evt.prevent_default();
        let q = query();
        if q.trim().is_empty() {
            return;
        }
        searching.set(true);
        search_error.set(None);
        match server::api::search_patients(q).await {
            Ok(found) => results.set(found),
            Err(e) => {
                search_error.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
            }
        }
        searching.set(false);
    };

    let mut select_patient = move |p: PatientLookup| {
        let id = p.id.clone();
        selected_patient.set(Some(p));
        let gen = visit_gen() + 1;
        visit_gen.set(gen);
        visits.set(None);
        spawn(async move {
            let fetched = server::api::list_patient_visits(id).await.unwrap_or_default();
            if *visit_gen.peek() == gen {
                visits.set(Some(fetched));
            }
        });
    };

    use_future(move || {
        let prefill = patient.clone();
        async move {
            let Some(national_id) = prefill.filter(|p| !p.is_empty()) else {
                return;
            };
            query.set(national_id.clone());
            searching.set(true);
            if let Ok(found) = server::api::search_patients(national_id).await {
                if let [only] = found.as_slice() {
                    select_patient(only.clone());
                }
                results.set(found);
            }
            searching.set(false);
        }
    });

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let Some(patient) = selected_patient() else {
            return;
        };

        let mut fe = HashMap::new();
        let parsed_date = chrono::NaiveDate::parse_from_str(&date(), "%Y-%m-%d").ok();
        if parsed_date.is_none() {
            fe.insert("date".to_string(), "Select a date".to_string());
        }
        let time_str = time();
        let parsed_time = chrono::NaiveTime::parse_from_str(&time_str, "%H:%M")
            .or_else(|_| chrono::NaiveTime::parse_from_str(&time_str, "%H:%M:%S"))
            .ok();
        if parsed_time.is_none() {
            fe.insert("time".to_string(), "Select a time".to_string());
        }
        let (Some(parsed_date), Some(parsed_time)) = (parsed_date, parsed_time) else {
            field_errors.set(fe);
            return;
        };

        let req = NewAppointmentRequest {
            patient_id: patient.id,
            specialty: specialty(),
            doctor_id: doctor_id(),
            date: parsed_date,
            time: parsed_time,
            complaint: Some(complaint()).filter(|c| !c.is_empty()),
            notes: Some(notes()).filter(|n| !n.is_empty()),
        };
        if let Err(errors) = req.validate() {
            field_errors.set(shared_types::AppError::from(errors).field_errors);
            return;
        }

        loading.set(true);
        match server::api::create_appointment(req).await {
            Ok(_) => {
                navigator().push(Route::ReceptionDashboard {});
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
    let submit_disabled = loading() || selected_patient().is_none();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reception.css") }

        div { class: "container",
            Card {
                class: "reception-card",
                CardHeader {
                    CardTitle { {tr(lang, "reception.search_patient")} }
                }
                CardContent {
                    if let Some(err) = search_error() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { class: "patient-search", onsubmit: handle_search,
                        Input {
                            id: "patient-query",
                            placeholder: tr(lang, "reception.search_placeholder").to_string(),
                            value: query(),
                            on_input: move |e: FormEvent| query.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "button",
                            disabled: searching(),
                            if searching() { {tr(lang, "common.loading")} } else { {tr(lang, "reception.search_patient")} }
                        }
                    }

                    if !results().is_empty() {
                        ul { class: "patient-results",
                            for p in results() {
                                li {
                                    key: "{p.id}",
                                    class: if selected_patient().map(|s| s.id == p.id).unwrap_or(false) {
                                        "patient-result selected"
                                    } else {
                                        "patient-result"
                                    },
                                    onclick: {
                                        let mut select_patient = select_patient;
                                        let p = p.clone();
                                        move |_| select_patient(p.clone())
                                    },
                                    span { class: "patient-result-name", "{p.name}" }
                                    span { class: "patient-result-meta", "{p.national_id} · {p.phone}" }
                                }
                            }
                        }
                    }
                }
            }

            if selected_patient().is_some() {
                Card {
                    class: "reception-card",
                    CardHeader {
                        CardTitle { {tr(lang, "reception.previous_visits")} }
                    }
                    CardContent {
                        match &*visits.read() {
                            Some(list) if list.is_empty() => rsx! {
                                p { class: "dashboard-empty", {tr(lang, "reception.no_visits")} }
                            },
                            Some(list) => rsx! {
                                ul { class: "visit-list",
                                    for visit in list.iter() {
                                        li { key: "{visit.id}", class: "visit-item",
                                            span { class: "visit-date", {visit.date.format("%Y-%m-%d").to_string()} }
                                            span { class: "visit-doctor", "{visit.doctor_name}" }
                                            span { class: "visit-diagnosis", "{visit.diagnosis}" }
                                        }
                                    }
                                }
                            },
                            None => rsx! {
                                Skeleton {}
                            },
                        }
                    }
                }
            }

            Card {
                class: "reception-card",
                CardHeader {
                    CardTitle { {tr(lang, "reception.new_appointment")} }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    if let Some(err) = field_error("patient_id") {
                        div { class: "auth-error", "{err}" }
                    }
                    if doctors_failed {
                        div { class: "doctor-load-error",
                            div { class: "auth-error", {tr(lang, "reception.doctors_failed")} }
                            button {
                                r#type: "button",
                                class: "button",
                                "data-style": "secondary",
                                onclick: move |_| doctors_reload.set(doctors_reload() + 1),
                                {tr(lang, "settings.retry")}
                            }
                        }
                    }

                    form { onsubmit: handle_submit,
                        div { class: "reception-grid",
                            div { class: "auth-field",
                                FormSelect {
                                    label: tr(lang, "reception.specialty").to_string(),
                                    value: specialty(),
                                    onchange: move |e: Event<FormData>| {
                                        specialty.set(e.value());
                                        doctor_id.set(String::new());
                                    },
                                    option { value: "", "—" }
                                    for s in specialties.iter() {
                                        option { key: "{s}", value: "{s}", "{s}" }
                                    }
                                }
                                if let Some(err) = field_error("specialty") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                FormSelect {
                                    label: tr(lang, "reception.doctor").to_string(),
                                    value: doctor_id(),
                                    onchange: move |e: Event<FormData>| {
                                        doctor_id.set(e.value());
                                        // a new doctor invalidates any slot picked for the old one
                                        date.set(String::new());
                                        time.set(String::new());
                                    },
                                    option { value: "", "—" }
                                    for d in filtered_doctors.iter() {
                                        option { key: "{d.id}", value: "{d.id}", "{d.name}" }
                                    }
                                }
                                if let Some(err) = field_error("doctor_id") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                        }
                        div { class: "reception-grid",
                            div { class: "auth-field",
                                Label { html_for: "date", {tr(lang, "reception.date")} }
                                Input {
                                    input_type: "date",
                                    id: "date",
                                    value: date(),
                                    on_input: move |e: FormEvent| date.set(e.value()),
                                }
                                if let Some(err) = field_error("date") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                Label { html_for: "time", {tr(lang, "reception.time")} }
                                Input {
                                    input_type: "time",
                                    id: "time",
                                    value: time(),
                                    on_input: move |e: FormEvent| time.set(e.value()),
                                }
                                if let Some(err) = field_error("time") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "complaint", {tr(lang, "reception.complaint")} }
                            Input {
                                id: "complaint",
                                value: complaint(),
                                on_input: move |e: FormEvent| complaint.set(e.value()),
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
                            disabled: submit_disabled,
                            if loading() { {tr(lang, "reception.booking")} } else { {tr(lang, "reception.book")} }
                        }
                    }
                }
            }
        }
    }
}
