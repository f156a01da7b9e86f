pub mod appointments;
pub mod dashboard;
pub mod join_us;
pub mod login;
pub mod medical_record;
pub mod not_found;
pub mod reception;
pub mod settings;

use crate::auth::use_auth;
use crate::i18n::{tr, use_language};
use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

use appointments::MyAppointments;
use dashboard::{
    ClinicDashboard, DoctorDashboard, PatientDashboard, PlatformDashboard, ReceptionDashboard,
};
use join_us::JoinUs;
use login::Login;
use medical_record::MedicalRecord;
use not_found::NotFound;
use reception::{AppointmentCreate, PatientRegister};
use settings::ClinicSettings;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/join-us")]
    JoinUs {},
    #[layout(AuthGuard)]
    #[route("/")]
    Home {},
    #[layout(DashboardLayout)]
    #[route("/clinic/dashboard?:registered")]
    ClinicDashboard { registered: Option<String> },
    #[route("/platform/dashboard")]
    PlatformDashboard {},
    #[route("/clinic/settings")]
    ClinicSettings {},
    #[route("/doctor/dashboard")]
    DoctorDashboard {},
    #[route("/reception/dashboard")]
    ReceptionDashboard {},
    #[route("/reception/patients/new")]
    PatientRegister {},
    #[route("/reception/appointments/new?:patient")]
    AppointmentCreate { patient: Option<String> },
    #[route("/patient/dashboard")]
    PatientDashboard {},
    #[route("/patient/appointments")]
    MyAppointments {},
    #[route("/patient/medical-record")]
    MedicalRecord {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Map a signed-in user to their landing dashboard.
///
/// Total over every input: the platform-admin flag wins outright, known
/// roles map to their own dashboard, and an unrecognized role string lands
/// on the clinic dashboard rather than a dead end.
pub fn dashboard_route(user: &AuthUser) -> Route {
    if user.is_platform_admin {
        return Route::PlatformDashboard {};
    }
    match UserRole::from_str(&user.role) {
        Some(UserRole::Admin) => Route::PlatformDashboard {},
        Some(UserRole::Manager) => Route::ClinicDashboard { registered: None },
        Some(UserRole::Doctor) => Route::DoctorDashboard {},
        Some(UserRole::Secretary) => Route::ReceptionDashboard {},
        Some(UserRole::Patient) => Route::PatientDashboard {},
        None => {
            tracing::warn!(role = %user.role, "Unrecognized role, using clinic dashboard");
            Route::ClinicDashboard { registered: None }
        }
    }
}

/// Landing page: forwards a signed-in user to their role's dashboard.
#[component]
fn Home() -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();
    match user {
        Some(user) => {
            navigator().replace(dashboard_route(&user));
        }
        None => {
            navigator().replace(Route::Login {});
        }
    }
    rsx! {
        div { class: "auth-guard-loading",
            p { "Loading..." }
        }
    }
}

/// Auth guard layout — redirects to /login if not authenticated.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the auth check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
/// During hydration the embedded data is available immediately.
/// A `SuspenseBoundary` in `App` catches the suspension and shows a spinner.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    // `?` propagates RenderError during suspension so Dioxus knows to
    // re-render this component when the server future resolves.
    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Shell around every signed-in page: brand, page title, language switch,
/// and the sign-out control.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let lang = *use_language().language.read();

    let user = auth.current_user.read().clone();
    let (user_name, clinic_name, logo_url) = match &user {
        Some(u) => (
            u.name.clone(),
            u.clinic.as_ref().map(|c| c.name.clone()),
            u.clinic.as_ref().and_then(|c| c.logo_url.clone()),
        ),
        None => (String::new(), None, None),
    };

    let page_title = match &route {
        Route::ClinicDashboard { .. }
        | Route::PlatformDashboard {}
        | Route::DoctorDashboard {}
        | Route::ReceptionDashboard {}
        | Route::PatientDashboard {} => tr(lang, "nav.dashboard"),
        Route::ClinicSettings {} => tr(lang, "settings.title"),
        Route::PatientRegister {} => tr(lang, "reception.register_patient"),
        Route::AppointmentCreate { .. } => tr(lang, "reception.new_appointment"),
        Route::MyAppointments {} => tr(lang, "appointments.title"),
        Route::MedicalRecord {} => tr(lang, "record.title"),
        _ => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-header",
                div { class: "app-brand",
                    if let Some(url) = logo_url {
                        img { class: "app-brand-logo", src: "{url}", alt: "" }
                    }
                    span { class: "app-brand-name",
                        {clinic_name.unwrap_or_else(|| tr(lang, "app.title").to_string())}
                    }
                }
                span { class: "app-page-title", "{page_title}" }
                div { class: "app-header-spacer" }
                crate::widgets::LanguageSwitcher {}
                span { class: "app-user-name", "{user_name}" }
                button {
                    class: "button app-sign-out",
                    onclick: move |_| {
                        spawn(async move {
                            let _ = server::api::logout().await;
                        });
                        auth.clear_auth();
                        navigator().push(Route::Login {});
                    },
                    {tr(lang, "nav.sign_out")}
                }
            }

            div { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: &str, platform_admin: bool) -> AuthUser {
        AuthUser {
            id: "u1".into(),
            name: "Test".into(),
            email: "test@clinic.example".into(),
            role: role.into(),
            is_platform_admin: platform_admin,
            clinic: None,
        }
    }

    #[test]
    fn platform_admin_flag_wins_over_role() {
        let user = user_with("Doctor", true);
        assert_eq!(dashboard_route(&user), Route::PlatformDashboard {});
    }

    #[test]
    fn each_role_lands_on_its_dashboard() {
        assert_eq!(
            dashboard_route(&user_with("Admin", false)),
            Route::PlatformDashboard {}
        );
        assert_eq!(
            dashboard_route(&user_with("Manager", false)),
            Route::ClinicDashboard { registered: None }
        );
        assert_eq!(
            dashboard_route(&user_with("Doctor", false)),
            Route::DoctorDashboard {}
        );
        assert_eq!(
            dashboard_route(&user_with("Secretary", false)),
            Route::ReceptionDashboard {}
        );
        assert_eq!(
            dashboard_route(&user_with("Patient", false)),
            Route::PatientDashboard {}
        );
    }

    #[test]
    fn lowercase_roles_still_route() {
        assert_eq!(
            dashboard_route(&user_with("doctor", false)),
            Route::DoctorDashboard {}
        );
    }

    #[test]
    fn unknown_role_falls_back_to_clinic_dashboard() {
        assert_eq!(
            dashboard_route(&user_with("Janitor", false)),
            Route::ClinicDashboard { registered: None }
        );
        assert_eq!(
            dashboard_route(&user_with("", false)),
            Route::ClinicDashboard { registered: None }
        );
    }
}
