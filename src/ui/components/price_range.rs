use dioxus::prelude::*;

use crate::domain::{AnalysisSource, Valuation};

#[component]
pub fn PriceRange(valuation: Valuation, source: AnalysisSource) -> Element {
    let source_class = match source {
        AnalysisSource::Backend => "badge tone-good",
        AnalysisSource::OfflineFallback => "badge tone-watch",
    };

    let range = valuation.range_label();
    let breakdown = valuation.breakdown.clone();

    rsx! {
        div { class: "price-range",
            div { class: "price-head",
                span { class: "panel-title", "Estimated value" }
                span { class: "{source_class}", "{source.label()}" }
            }
            p { class: "price-main", "${valuation.estimated_value}" }
            p { class: "muted", "Typical range {range}" }
            if let Some(b) = breakdown {
                dl { class: "breakdown",
                    dt { "Base price" }
                    dd { "${b.base_price:.0}" }
                    dt { "Age" }
                    dd { "{b.device_age} yrs × {b.age_multiplier:.2}" }
                    dt { "Condition" }
                    dd { "× {b.condition_multiplier:.2}" }
                    dt { "Storage" }
                    dd { "× {b.storage_multiplier:.2}" }
                    dt { "Accessories" }
                    dd { "+${b.accessory_bonus}" }
                }
            }
        }
    }
}
