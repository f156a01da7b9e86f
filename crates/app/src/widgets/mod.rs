//! Small page-level widgets shared by the role dashboards.

use crate::i18n::{tr, use_language, Language};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendarDays, LdCalendarPlus, LdFileText, LdLanguages, LdSettings, LdUserPlus,
};
use dioxus_free_icons::Icon;
use shared_types::AppointmentStatus;
use shared_ui::{BadgeVariant, Card, CardContent, CardHeader, Skeleton};

/// Which icon an `ActionCard` shows. Keeps the icon type out of the
/// component props so callers stay declarative.
#[derive(Clone, Copy, PartialEq)]
pub enum ActionIcon {
    NewPatient,
    NewAppointment,
    Appointments,
    MedicalRecord,
    Settings,
}

/// Badge color for an appointment status.
pub fn status_variant(status: AppointmentStatus) -> BadgeVariant {
    match status {
        AppointmentStatus::Confirmed => BadgeVariant::Primary,
        AppointmentStatus::Pending => BadgeVariant::Secondary,
        AppointmentStatus::Cancelled => BadgeVariant::Destructive,
        AppointmentStatus::Completed => BadgeVariant::Success,
    }
}

/// Localized badge text for an appointment status.
pub fn status_label(lang: Language, status: AppointmentStatus) -> &'static str {
    tr(
        lang,
        match status {
            AppointmentStatus::Confirmed => "status.confirmed",
            AppointmentStatus::Pending => "status.pending",
            AppointmentStatus::Cancelled => "status.cancelled",
            AppointmentStatus::Completed => "status.completed",
        },
    )
}

/// Single dashboard statistic. Shows a skeleton until the value arrives.
#[component]
pub fn StatCard(title: String, value: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./widgets.css") }
        Card {
            CardHeader {
                span { class: "stat-label", "{title}" }
            }
            CardContent {
                match value {
                    Some(v) => rsx! {
                        span { class: "stat-number", "{v}" }
                    },
                    None => rsx! {
                        Skeleton {}
                    },
                }
            }
        }
    }
}

/// Clickable card that routes to one of the reception workflows.
#[component]
pub fn ActionCard(icon: ActionIcon, title: String, description: String, to: Route) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./widgets.css") }
        Link { class: "action-card", to,
            div { class: "action-card-icon",
                match icon {
                    ActionIcon::NewPatient => rsx! {
                        Icon::<LdUserPlus> { icon: LdUserPlus, width: 22, height: 22 }
                    },
                    ActionIcon::NewAppointment => rsx! {
                        Icon::<LdCalendarPlus> { icon: LdCalendarPlus, width: 22, height: 22 }
                    },
                    ActionIcon::Appointments => rsx! {
                        Icon::<LdCalendarDays> { icon: LdCalendarDays, width: 22, height: 22 }
                    },
                    ActionIcon::MedicalRecord => rsx! {
                        Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 }
                    },
                    ActionIcon::Settings => rsx! {
                        Icon::<LdSettings> { icon: LdSettings, width: 22, height: 22 }
                    },
                }
            }
            div { class: "action-card-body",
                span { class: "action-card-title", "{title}" }
                span { class: "action-card-desc", "{description}" }
            }
        }
    }
}

/// Greeting banner at the top of every dashboard.
#[component]
pub fn WelcomeBanner(name: String) -> Element {
    let lang = *use_language().language.read();
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./widgets.css") }
        div { class: "welcome-banner",
            h2 { {tr(lang, "dashboard.welcome")} ", {name}" }
        }
    }
}

/// One-shot confirmation banner, e.g. right after clinic registration.
#[component]
pub fn FlashMessage(
    message: String,
    #[props(default)] on_dismiss: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./widgets.css") }
        div { class: "flash-message",
            span { "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "flash-dismiss",
                    onclick: move |evt| handler.call(evt),
                    "\u{00d7}"
                }
            }
        }
    }
}

/// Toggles the interface between English and Arabic.
#[component]
pub fn LanguageSwitcher() -> Element {
    let mut i18n = use_language();
    let lang = *i18n.language.read();
    let next = lang.toggled();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./widgets.css") }
        button {
            class: "language-switcher",
            onclick: move |_| i18n.language.set(next),
            Icon::<LdLanguages> { icon: LdLanguages, width: 16, height: 16 }
            span { "{next.code()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_label_is_localized() {
        let all = [
            AppointmentStatus::Confirmed,
            AppointmentStatus::Pending,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Completed,
        ];
        for status in all {
            let en = status_label(Language::En, status);
            let ar = status_label(Language::Ar, status);
            // a missing table entry would fall back to the raw key
            assert!(!en.starts_with("status."), "no English label for {status:?}");
            assert!(!ar.starts_with("status."), "no Arabic label for {status:?}");
            assert_ne!(en, ar);
        }
    }

    #[test]
    fn cancelled_reads_as_destructive() {
        assert_eq!(
            status_variant(AppointmentStatus::Cancelled),
            BadgeVariant::Destructive
        );
    }
}
