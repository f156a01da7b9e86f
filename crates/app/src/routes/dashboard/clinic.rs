use crate::auth::use_auth;
use crate::i18n::{tr, use_language};
use crate::routes::Route;
use crate::widgets::{ActionCard, ActionIcon, FlashMessage, StatCard, WelcomeBanner};
use dioxus::prelude::*;

/// Manager landing page: clinic-wide counters plus shortcuts.
///
/// `registered` arrives as a query param straight from the Join Us flow and
/// drives a one-shot success banner.
#[component]
pub fn ClinicDashboard(registered: Option<String>) -> Element {
    let auth = use_auth();
    let lang = *use_language().language.read();
    let mut flash_dismissed = use_signal(|| false);

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
            if registered.is_some() && !flash_dismissed() {
                FlashMessage {
                    message: tr(lang, "dashboard.registered_flash").to_string(),
                    on_dismiss: move |_| flash_dismissed.set(true),
                }
            }

            WelcomeBanner { name }

            div { class: "dashboard-stats",
                StatCard {
                    title: tr(lang, "dashboard.today_appointments").to_string(),
                    value: stats_value.as_ref().map(|s| s.today_appointments.to_string()),
                }
                StatCard {
                    title: tr(lang, "dashboard.active_doctors").to_string(),
                    value: stats_value.as_ref().map(|s| s.active_doctors.to_string()),
                }
                StatCard {
                    title: tr(lang, "dashboard.total_patients").to_string(),
                    value: stats_value.as_ref().map(|s| s.total_patients.to_string()),
                }
                StatCard {
                    title: tr(lang, "dashboard.monthly_revenue").to_string(),
                    value: stats_value.as_ref().map(|s| s.monthly_revenue.clone()),
                }
            }

            div { class: "dashboard-actions",
                ActionCard {
                    icon: ActionIcon::NewAppointment,
                    title: tr(lang, "reception.new_appointment").to_string(),
                    description: tr(lang, "reception.new_appointment_desc").to_string(),
                    to: Route::AppointmentCreate { patient: None },
                }
                ActionCard {
                    icon: ActionIcon::Settings,
                    title: tr(lang, "settings.title").to_string(),
                    description: tr(lang, "dashboard.settings_desc").to_string(),
                    to: Route::ClinicSettings {},
                }
            }
        }
    }
}
