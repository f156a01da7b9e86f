use crate::auth::use_auth;
use crate::i18n::{tr, use_language};
use crate::routes::Route;
use crate::widgets::{status_label, status_variant, ActionCard, ActionIcon, WelcomeBanner};
use dioxus::prelude::*;
use shared_ui::{Badge, Card, CardContent, CardHeader, CardTitle, Skeleton};

/// Patient landing page: a short preview of what is booked next.
#[component]
pub fn PatientDashboard() -> Element {
    let auth = use_auth();
    let lang = *use_language().language.read();

    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let upcoming = use_resource(|| async move {
        server::api::list_my_appointments().await.ok().map(|list| {
            let now = chrono::Local::now().naive_local();
            let mut next: Vec<_> = list.into_iter().filter(|a| a.is_upcoming(now)).collect();
            next.sort_by_key(|a| (a.date, a.time));
            next.truncate(3);
            next
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            WelcomeBanner { name }

            Card {
                CardHeader {
                    CardTitle { {tr(lang, "appointments.upcoming")} }
                }
                CardContent {
                    match &*upcoming.read() {
                        Some(Some(appointments)) if appointments.is_empty() => rsx! {
                            p { class: "dashboard-empty", {tr(lang, "dashboard.no_upcoming")} }
                        },
                        Some(Some(appointments)) => rsx! {
                            ul { class: "schedule-list",
                                for appt in appointments.iter() {
                                    li { key: "{appt.id}", class: "schedule-item",
                                        span { class: "schedule-time",
                                            {format!("{} {}", appt.date.format("%Y-%m-%d"), appt.time.format("%H:%M"))}
                                        }
                                        span { class: "schedule-doctor", "{appt.doctor_name}" }
                                        Badge { variant: status_variant(appt.status), {status_label(lang, appt.status)} }
                                    }
                                }
                            }
                        },
                        Some(None) => rsx! {
                            p { class: "dashboard-empty", {tr(lang, "dashboard.no_upcoming")} }
                        },
                        None => rsx! {
                            Skeleton {}
                        },
                    }
                }
            }

            div { class: "dashboard-actions",
                ActionCard {
                    icon: ActionIcon::Appointments,
                    title: tr(lang, "dashboard.view_appointments").to_string(),
                    description: tr(lang, "dashboard.view_appointments_desc").to_string(),
                    to: Route::MyAppointments {},
                }
                ActionCard {
                    icon: ActionIcon::MedicalRecord,
                    title: tr(lang, "dashboard.medical_record").to_string(),
                    description: tr(lang, "dashboard.medical_record_desc").to_string(),
                    to: Route::MedicalRecord {},
                }
            }
        }
    }
}
