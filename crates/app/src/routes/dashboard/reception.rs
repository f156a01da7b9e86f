use crate::auth::use_auth;
use crate::i18n::{tr, use_language};
use crate::routes::Route;
use crate::widgets::{ActionCard, ActionIcon, StatCard, WelcomeBanner};
use dioxus::prelude::*;

/// Secretary landing page: the two reception workflows plus today's load.
#[component]
pub fn ReceptionDashboard() -> Element {
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

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            WelcomeBanner { name }

            div { class: "dashboard-stats dashboard-stats-single",
                StatCard {
                    title: tr(lang, "dashboard.today_appointments").to_string(),
                    value: stats_value.as_ref().map(|s| s.today_appointments.to_string()),
                }
            }

            div { class: "dashboard-actions",
                ActionCard {
                    icon: ActionIcon::NewPatient,
                    title: tr(lang, "reception.register_patient").to_string(),
                    description: tr(lang, "reception.register_patient_desc").to_string(),
                    to: Route::PatientRegister {},
                }
                ActionCard {
                    icon: ActionIcon::NewAppointment,
                    title: tr(lang, "reception.new_appointment").to_string(),
                    description: tr(lang, "reception.new_appointment_desc").to_string(),
                    to: Route::AppointmentCreate { patient: None },
                }
            }
        }
    }
}
