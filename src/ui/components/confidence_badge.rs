use dioxus::prelude::*;

/// Confidence on a 0-100 scale.
#[component]
pub fn ConfidenceBadge(value: u8) -> Element {
    let (label, class) = match value {
        v if v > 80 => ("High confidence", "badge tone-good"),
        v if v > 60 => ("Medium confidence", "badge tone-watch"),
        v if v > 0 => ("Low confidence", "badge tone-poor"),
        _ => ("N/A", "badge tone-neutral"),
    };

    rsx! {
        span { class: "{class}", title: "{value}%", "{label}" }
    }
}
