use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "auth-guard-loading",
            div {
                h1 { "404" }
                p { "The page /{route.join(\"/\")} does not exist." }
                Link { to: Route::Home {}, "Back to dashboard" }
            }
        }
    }
}
