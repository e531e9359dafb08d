use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn OptionCard(
    name: &'static str,
    url: &'static str,
    description: &'static str,
    rating: f32,
    details: Vec<String>,
) -> Element {
    rsx! {
        div { class: "option-card",
            div { class: "option-head",
                a { class: "link", href: url, target: "_blank", rel: "noreferrer", "{name}" }
                span { class: "stars", "{theme::stars(rating)}" }
            }
            p { class: "muted", "{description}" }
            if !details.is_empty() {
                ul { class: "option-details",
                    for detail in details {
                        li { "{detail}" }
                    }
                }
            }
        }
    }
}
