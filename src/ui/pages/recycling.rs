use dioxus::prelude::*;

use crate::{
    domain::recycling_options,
    ui::{components::option_card::OptionCard, theme},
};

#[component]
pub fn RecyclingPage() -> Element {
    let options = recycling_options(None);

    rsx! {
        div { class: "stack",
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Where to take your device" }
                p { class: theme::MUTED,
                    "{options.total()} trusted places to sell, trade in, recycle or donate electronics."
                }
            }

            DirectorySection { title: "💵 Sell online", blurb: "Fastest way to turn a working device into cash.",
                for o in options.sell_online {
                    OptionCard {
                        key: "{o.name}",
                        name: o.name,
                        url: o.url,
                        description: o.description,
                        rating: o.rating,
                        details: vec![
                            format!("Payment: {}", o.payment_time),
                            if o.shipping_free { "Free shipping".to_string() } else { "Seller pays shipping".to_string() },
                        ],
                    }
                }
            }

            DirectorySection { title: "🔁 Trade in", blurb: "Credit towards your next device.",
                for o in options.trade_in {
                    OptionCard {
                        key: "{o.name}",
                        name: o.name,
                        url: o.url,
                        description: o.description,
                        rating: o.rating,
                        details: vec![
                            format!("Accepts: {}", o.devices.join(", ")),
                            format!("Paid as: {}", o.payment_method),
                        ],
                    }
                }
            }

            DirectorySection { title: "♻️ Recycle", blurb: "For devices that are past repair.",
                for o in options.recycling {
                    OptionCard {
                        key: "{o.name}",
                        name: o.name,
                        url: o.url,
                        description: o.description,
                        rating: o.rating,
                        details: vec![format!("Cost: {}", o.cost), o.pickup.label().to_string()],
                    }
                }
            }

            DirectorySection { title: "🎁 Donate", blurb: "Give working hardware to someone who needs it.",
                for o in options.donation {
                    OptionCard {
                        key: "{o.name}",
                        name: o.name,
                        url: o.url,
                        description: o.description,
                        rating: o.rating,
                        details: vec![
                            if o.tax_deductible { "Tax deductible".to_string() } else { "Not tax deductible".to_string() },
                            o.pickup.label().to_string(),
                        ],
                    }
                }
            }
        }
    }
}

#[component]
fn DirectorySection(title: &'static str, blurb: &'static str, children: Element) -> Element {
    rsx! {
        section { class: theme::PANEL,
            h2 { class: theme::PANEL_TITLE, "{title}" }
            p { class: theme::MUTED, "{blurb}" }
            div { class: "grid-2", {children} }
        }
    }
}
