use crate::auth::use_auth;
use crate::i18n::{tr, use_language};
use crate::widgets::{StatCard, WelcomeBanner};
use dioxus::prelude::*;

/// Platform admin overview across all registered clinics.
#[component]
pub fn PlatformDashboard() -> Element {
    let auth = use_auth();
    let lang = *use_language().language.read();

    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let stats = use_resource(|| async move { server::api::get_platform_stats().await.ok() });
    let stats_value = stats.read().clone().flatten();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            WelcomeBanner { name }

            div { class: "dashboard-stats",
                StatCard {
                    title: tr(lang, "dashboard.total_clinics").to_string(),
                    value: stats_value.as_ref().map(|s| s.total_clinics.to_string()),
                }
                StatCard {
                    title: tr(lang, "dashboard.active_subscriptions").to_string(),
                    value: stats_value.as_ref().map(|s| s.active_subscriptions.to_string()),
                }
                StatCard {
                    title: tr(lang, "dashboard.monthly_revenue").to_string(),
                    value: stats_value.as_ref().map(|s| s.monthly_revenue.clone()),
                }
                StatCard {
                    title: tr(lang, "dashboard.pending_approvals").to_string(),
                    value: stats_value.as_ref().map(|s| s.pending_approvals.to_string()),
                }
            }
        }
    }
}
