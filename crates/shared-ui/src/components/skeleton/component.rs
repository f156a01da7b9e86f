use dioxus::prelude::*;

/// Loading placeholder with an animated pulse. `lines` > 1 renders a stack
/// of short bars, approximating the list the data will replace.
#[component]
pub fn Skeleton(
    #[props(default = 1u32)] lines: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if lines > 1 {
            div { class: "skeleton-stack",
                for i in 0..lines {
                    div { key: "{i}", class: "skeleton skeleton-line" }
                }
            }
        } else {
            div {
                ..merged,
            }
        }
    }
}
