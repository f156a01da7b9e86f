use crate::i18n::{tr, use_language};
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton};

/// The signed-in patient's visit history: dates, diagnoses, and notes.
#[component]
pub fn MedicalRecord() -> Element {
    let lang = *use_language().language.read();
    let mut reload = use_signal(|| 0u32);

    let visits = use_resource(move || {
        reload();
        async move { server::api::list_my_visits().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./medical_record.css") }

        div { class: "container",
            Card {
                CardHeader {
                    CardTitle { {tr(lang, "record.title")} }
                }
                CardContent {
                    p { class: "record-intro", {tr(lang, "record.intro")} }
                    match &*visits.read() {
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            p { class: "record-empty", {tr(lang, "record.empty")} }
                        },
                        Some(Ok(list)) => rsx! {
                            ul { class: "record-list",
                                for visit in list.iter() {
                                    li { key: "{visit.id}", class: "record-item",
                                        span { class: "record-date", {visit.date.format("%Y-%m-%d").to_string()} }
                                        div { class: "record-body",
                                            span { class: "record-diagnosis", "{visit.diagnosis}" }
                                            span { class: "record-doctor", "{visit.doctor_name}" }
                                            if let Some(notes) = visit.notes.as_deref().filter(|n| !n.is_empty()) {
                                                span { class: "record-notes", "{notes}" }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Some(Err(e)) => {
                            let message = shared_types::AppError::friendly_message(&e.to_string());
                            rsx! {
                                div { class: "record-error",
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
                            Skeleton { lines: 3 }
                        },
                    }
                }
            }
        }
    }
}
