use crate::auth::use_auth;
use crate::i18n::{tr, use_language};
use crate::widgets::{status_label, status_variant, StatCard, WelcomeBanner};
use dioxus::prelude::*;
use shared_ui::{Badge, Card, CardContent, CardHeader, CardTitle, Skeleton};

/// Doctor landing page: counters plus the appointments booked for today.
#[component]
pub fn DoctorDashboard() -> Element {
    let auth = use_auth();
    let lang = *use_language().language.read();

    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let stats = use_resource(|| async move { server::api::get_dashboard_stats().await.ok() });
    let stats_value = stats.read().clone().flatten();

    let schedule = use_resource(|| async move {
        server::api::list_my_appointments().await.ok().map(|list| {
            let today = chrono::Local::now().date_naive();
            let mut todays: Vec<_> = list.into_iter().filter(|a| a.date == today).collect();
            todays.sort_by_key(|a| a.time);
            todays
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            WelcomeBanner { name }

            div { class: "dashboard-stats dashboard-stats-pair",
                StatCard {
                    title: tr(lang, "dashboard.today_appointments").to_string(),
                    value: stats_value.as_ref().map(|s| s.today_appointments.to_string()),
                }
                StatCard {
                    title: tr(lang, "dashboard.total_patients").to_string(),
                    value: stats_value.as_ref().map(|s| s.total_patients.to_string()),
                }
            }

            Card {
                CardHeader {
                    CardTitle { {tr(lang, "dashboard.todays_schedule")} }
                }
                CardContent {
                    match &*schedule.read() {
                        Some(Some(appointments)) if appointments.is_empty() => rsx! {
                            p { class: "dashboard-empty", {tr(lang, "dashboard.no_schedule")} }
                        },
                        Some(Some(appointments)) => rsx! {
                            ul { class: "schedule-list",
                                for appt in appointments.iter() {
                                    li { key: "{appt.id}", class: "schedule-item",
                                        span { class: "schedule-time", {appt.time.format("%H:%M").to_string()} }
                                        Badge { variant: status_variant(appt.status), {status_label(lang, appt.status)} }
                                    }
                                }
                            }
                        },
                        Some(None) => rsx! {
                            p { class: "dashboard-empty", {tr(lang, "dashboard.no_schedule")} }
                        },
                        None => rsx! {
                            Skeleton {}
                        },
                    }
                }
            }
        }
    }
}
