use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, icon: Option<&'static str>) -> Element {
    rsx! {
        div { class: "kpi",
            h3 { class: "kpi-title",
                if let Some(icon) = icon {
                    span { class: "kpi-icon", "{icon}" }
                }
                "{title}"
            }
            p { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-desc", "{desc}" }
            }
        }
    }
}
