use dioxus::prelude::*;

use crate::app::Route;
use crate::config::AppConfig;
use crate::ui::theme;
use crate::util::{assets, APP_NAME, APP_VERSION};

#[component]
pub fn Shell(children: Element) -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let (mode_label, mode_class) = config.with(|cfg| {
        if cfg.backend.enabled {
            ("Online analysis", "mode online")
        } else {
            ("Offline only", "mode offline")
        }
    });

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                div { class: "header-inner",
                    div { class: "brand",
                        img { class: "brand-logo", src: assets::favicon_data_uri(), alt: "EcoSpire" }
                        div {
                            h1 { "{APP_NAME}" }
                            p { class: theme::MUTED, "Give old devices a second life" }
                        }
                    }
                    nav { class: "nav",
                        NavButton { active: matches!(current_route, Route::Estimator {}), onclick: move |_| { nav.push(Route::Estimator {}); }, label: "♻️ Estimate" }
                        NavButton { active: matches!(current_route, Route::Recycling {}), onclick: move |_| { nav.push(Route::Recycling {}); }, label: "📍 Where to go" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    }
                    span { class: "{mode_class}", "{mode_label}" }
                }
            }
            main { class: "content",
                {children}
            }
            footer { class: "app-footer", "{APP_NAME} v{APP_VERSION}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
