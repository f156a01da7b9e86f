use crate::i18n::{tr, use_language};
use crate::widgets::{status_label, status_variant};
use dioxus::prelude::*;
use shared_types::Appointment;
use shared_ui::{Badge, Card, CardContent, Skeleton};

#[derive(Clone, Copy, PartialEq)]
enum Filter {
    All,
    Upcoming,
    Past,
}

fn apply_filter(mut list: Vec<Appointment>, filter: Filter, now: chrono::NaiveDateTime) -> Vec<Appointment> {
    list.sort_by_key(|a| (a.date, a.time));
    match filter {
        Filter::All => list,
        Filter::Upcoming => list.into_iter().filter(|a| a.is_upcoming(now)).collect(),
        Filter::Past => list.into_iter().filter(|a| !a.is_upcoming(now)).collect(),
    }
}

/// Patient appointment history with an all/upcoming/past filter.
#[component]
pub fn MyAppointments() -> Element {
    let lang = *use_language().language.read();
    let mut filter = use_signal(|| Filter::All);
    let mut reload = use_signal(|| 0u32);

    let appointments = use_resource(move || {
        reload();
        async move { server::api::list_my_appointments().await }
    });

    let now = chrono::Local::now().naive_local();

    let tab = move |which: Filter, label: &'static str| {
        rsx! {
            button {
                class: if filter() == which { "appt-tab active" } else { "appt-tab" },
                onclick: move |_| filter.set(which),
                {label}
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./appointments.css") }

        div { class: "container",
            div { class: "appt-tabs",
                {tab(Filter::All, tr(lang, "appointments.all"))}
                {tab(Filter::Upcoming, tr(lang, "appointments.upcoming"))}
                {tab(Filter::Past, tr(lang, "appointments.past"))}
            }

            Card {
                CardContent {
                    match &*appointments.read() {
                        Some(Ok(list)) => {
                            let visible = apply_filter(list.clone(), filter(), now);
                            if visible.is_empty() {
                                rsx! {
                                    p { class: "appt-empty", {tr(lang, "appointments.empty")} }
                                }
                            } else {
                                rsx! {
                                    ul { class: "appt-list",
                                        for appt in visible.iter() {
                                            li { key: "{appt.id}", class: "appt-item",
                                                span { class: "appt-when",
                                                    {format!("{} {}", appt.date.format("%Y-%m-%d"), appt.time.format("%H:%M"))}
                                                }
                                                div { class: "appt-who",
                                                    span { class: "appt-doctor", "{appt.doctor_name}" }
                                                    span { class: "appt-clinic", "{appt.clinic_name}" }
                                                }
                                                Badge { variant: status_variant(appt.status), {status_label(lang, appt.status)} }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        Some(Err(e)) => {
                            let message = shared_types::AppError::friendly_message(&e.to_string());
                            rsx! {
                                div { class: "appt-error",
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
