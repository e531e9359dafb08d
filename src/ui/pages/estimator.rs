use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, run_analysis, Route},
    config::AppConfig,
    domain::{
        brands, category_label, device_types, models, Accessory, AppState, Condition,
        DeviceAnalysis, DeviceKind, StorageTier,
    },
    ui::{
        components::{
            confidence_badge::ConfidenceBadge,
            kpi_card::KpiCard,
            option_card::OptionCard,
            price_range::PriceRange,
            toast::ToastMessage,
        },
        theme::{self, Tone},
    },
};

#[component]
pub fn EstimatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let config = use_context::<Signal<AppConfig>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (form, analysis, is_analyzing) =
        state.with(|st| (st.form.clone(), st.analysis.clone(), st.is_analyzing));

    let type_options: Vec<(&'static str, String)> = device_types()
        .map(|key| {
            let emoji = DeviceKind::from_key(key).map(|k| k.emoji()).unwrap_or("🔌");
            let label = category_label(key).unwrap_or(key);
            (key, format!("{emoji} {label}"))
        })
        .collect();
    let brand_options = brands(&form.device_type);
    let model_options = models(&form.device_type, &form.brand);
    let can_submit = form.is_complete() && !is_analyzing;

    let on_analyze = move |_| {
        spawn(run_analysis(state, config, toasts));
    };

    let on_reset = move |_| {
        state.with_mut(|st| {
            st.form.reset();
            st.analysis = None;
        });
        persist_user_state(&state);
    };

    rsx! {
        div { class: "stack",
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Device details" }
                p { class: theme::MUTED, "Tell us what you have and we'll estimate what it's worth." }

                div { class: "grid-3",
                    div { class: "field",
                        label { class: theme::FIELD_LABEL, "Device type" }
                        select {
                            class: theme::INPUT,
                            value: "{form.device_type}",
                            onchange: move |evt| {
                                state.with_mut(|st| st.form.set_device_type(evt.value()));
                                persist_user_state(&state);
                            },
                            option { value: "", disabled: true, selected: form.device_type.is_empty(), "Select type" }
                            for (key, label) in type_options {
                                option { key: "{key}", value: key, selected: form.device_type == key, "{label}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: theme::FIELD_LABEL, "Brand" }
                        select {
                            class: theme::INPUT,
                            disabled: brand_options.is_empty(),
                            value: "{form.brand}",
                            onchange: move |evt| {
                                state.with_mut(|st| st.form.set_brand(evt.value()));
                                persist_user_state(&state);
                            },
                            option { value: "", disabled: true, selected: form.brand.is_empty(), "Select brand" }
                            for brand in brand_options.iter().copied() {
                                option { key: "{brand}", value: brand, selected: form.brand == brand, "{brand}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: theme::FIELD_LABEL, "Model" }
                        select {
                            class: theme::INPUT,
                            disabled: model_options.is_empty(),
                            value: "{form.model}",
                            onchange: move |evt| {
                                state.with_mut(|st| st.form.set_model(evt.value()));
                                persist_user_state(&state);
                            },
                            option { value: "", disabled: true, selected: form.model.is_empty(), "Select model" }
                            for model in model_options.iter().copied() {
                                option { key: "{model}", value: model, selected: form.model == model, "{model}" }
                            }
                        }
                    }
                }

                div { class: "field",
                    label { class: theme::FIELD_LABEL, "Condition" }
                    div { class: "chip-row",
                        for condition in Condition::ALL {
                            button {
                                key: "{condition.label()}",
                                class: theme::chip(form.condition == condition.label()),
                                title: condition.description(),
                                onclick: move |_| {
                                    state.with_mut(|st| st.form.set_condition(condition.label()));
                                    persist_user_state(&state);
                                },
                                span { class: "chip-title", "{condition.label()}" }
                                span { class: "chip-sub", "{condition.description()}" }
                            }
                        }
                    }
                }

                div { class: "grid-2",
                    div { class: "field",
                        label { class: theme::FIELD_LABEL, "Storage" }
                        select {
                            class: theme::INPUT,
                            value: "{form.storage}",
                            onchange: move |evt| {
                                state.with_mut(|st| st.form.set_storage(evt.value()));
                                persist_user_state(&state);
                            },
                            for tier in StorageTier::ALL {
                                option { key: "{tier.label()}", value: tier.label(), selected: form.storage == tier.label(), "{tier.label()}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: theme::FIELD_LABEL, "Included accessories" }
                        div { class: "chip-row",
                            for accessory in Accessory::ALL {
                                button {
                                    key: "{accessory.label()}",
                                    class: theme::chip(form.has_accessory(accessory.label())),
                                    onclick: move |_| {
                                        state.with_mut(|st| st.form.toggle_accessory(accessory.label()));
                                        persist_user_state(&state);
                                    },
                                    "{accessory.label()}"
                                }
                            }
                        }
                    }
                }

                div { class: "actions",
                    button {
                        class: theme::btn_primary(is_analyzing),
                        disabled: !can_submit,
                        onclick: on_analyze,
                        if is_analyzing { "Analyzing…" } else { "Analyze device" }
                    }
                    button { class: theme::BTN_GHOST, onclick: on_reset, "Start over" }
                }
            }

            if let Some(analysis) = analysis {
                AnalysisResults { analysis }
            }
        }
    }
}

#[component]
fn AnalysisResults(analysis: DeviceAnalysis) -> Element {
    let nav = use_navigator();
    let title = analysis.title();
    let subtitle = format!(
        "{} · {} · {}",
        analysis.category, analysis.request.condition, analysis.request.storage
    );

    let impact = analysis.impact.clone();
    let sustainability = analysis.sustainability.clone();
    let materials: Vec<_> = analysis
        .materials
        .iter()
        .filter(|m| m.recyclable)
        .take(6)
        .collect();
    let picks = quick_picks(&analysis);

    rsx! {
        section { class: theme::PANEL,
            div { class: "results-head",
                div {
                    h2 { "{title}" }
                    p { class: theme::MUTED, "{subtitle}" }
                }
            }
            PriceRange { valuation: analysis.valuation.clone(), source: analysis.source }
        }

        if let Some(impact) = impact {
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Environmental impact of recycling" }
                div { class: "grid-4",
                    KpiCard { title: "CO₂ saved".to_string(), value: format!("{} kg", format_number(impact.co2_saved_kg)), description: None, icon: Some("🌍") }
                    KpiCard { title: "Water saved".to_string(), value: format!("{} L", format_number(impact.water_saved_liters)), description: None, icon: Some("💧") }
                    KpiCard { title: "Energy saved".to_string(), value: format!("{} kWh", format_number(impact.energy_saved_kwh)), description: None, icon: Some("⚡") }
                    KpiCard {
                        title: "Material value".to_string(),
                        value: format!("${:.2}", impact.material_value_usd),
                        description: Some(impact.valuable_metals.join(", ")),
                        icon: Some("🪙"),
                    }
                }
                if !materials.is_empty() {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Material" }
                                th { "Amount" }
                                th { "Value" }
                                th { "Rarity" }
                            }
                        }
                        tbody {
                            for material in materials {
                                tr { key: "{material.name}",
                                    td { "{material.name}" }
                                    td { "{material.grams} g" }
                                    td { "${material.value_usd:.2}" }
                                    td { "{material.rarity.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(s) = sustainability {
            section { class: theme::PANEL,
                div { class: "results-head",
                    h2 { class: theme::PANEL_TITLE, "Sustainability" }
                    ConfidenceBadge { value: s.confidence }
                }
                div { class: "grid-2",
                    div {
                        p { class: "score-big", "{s.sustainability_score:.0}" }
                        p { class: theme::MUTED, "Sustainability score out of 100" }
                    }
                    div { class: "stack-tight",
                        ScoreBar { label: "Reuse", score: s.recycling_potential.reuse }
                        ScoreBar { label: "Refurbish", score: s.recycling_potential.refurbish }
                        ScoreBar { label: "Recycle", score: s.recycling_potential.recycle }
                    }
                }
                dl { class: "breakdown",
                    dt { "Manufacturing footprint" }
                    dd { "{s.carbon_footprint.manufacturing_tons:.3} t CO₂" }
                    dt { "Saved by reuse" }
                    dd { "{s.carbon_footprint.reuse_savings_tons:.3} t CO₂" }
                    dt { "Saved by recycling" }
                    dd { "{s.carbon_footprint.recycling_savings_tons:.3} t CO₂" }
                    dt { "Remaining" }
                    dd { "{s.carbon_footprint.net_tons:.3} t CO₂" }
                }
            }
        }

        section { class: theme::PANEL,
            div { class: "results-head",
                h2 { class: theme::PANEL_TITLE, "Recommended next steps" }
                button {
                    class: theme::BTN_GHOST,
                    onclick: move |_| { nav.push(Route::Recycling {}); },
                    "See all {analysis.recycling.total()} options"
                }
            }
            div { class: "grid-2",
                for (heading, card) in picks {
                    div { key: "{card.name}",
                        p { class: theme::FIELD_LABEL, "{heading}" }
                        OptionCard {
                            name: card.name,
                            url: card.url,
                            description: card.description,
                            rating: card.rating,
                            details: card.details,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScoreBar(label: &'static str, score: f64) -> Element {
    let tone = Tone::for_score(score);
    let width = format!("width: {score:.0}%");
    rsx! {
        div { class: "score-row",
            span { class: "score-label", "{label}" }
            div { class: "score-bar",
                div { class: tone.fill(), style: "{width}" }
            }
            span { class: tone.badge(), "{score:.0}" }
        }
    }
}

#[derive(Clone, PartialEq)]
pub(crate) struct PickCard {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub details: Vec<String>,
}

/// Top-rated entry of each directory category.
fn quick_picks(analysis: &DeviceAnalysis) -> Vec<(&'static str, PickCard)> {
    let options = &analysis.recycling;
    let mut picks = Vec::new();

    if let Some(o) = options.sell_online.iter().max_by(|a, b| a.rating.total_cmp(&b.rating)) {
        picks.push((
            "Sell online",
            PickCard {
                name: o.name,
                url: o.url,
                description: o.description,
                rating: o.rating,
                details: vec![format!("Paid in {}", o.payment_time)],
            },
        ));
    }
    if let Some(o) = options.trade_in.iter().max_by(|a, b| a.rating.total_cmp(&b.rating)) {
        picks.push((
            "Trade in",
            PickCard {
                name: o.name,
                url: o.url,
                description: o.description,
                rating: o.rating,
                details: vec![o.payment_method.to_string()],
            },
        ));
    }
    if let Some(o) = options.recycling.iter().max_by(|a, b| a.rating.total_cmp(&b.rating)) {
        picks.push((
            "Recycle",
            PickCard {
                name: o.name,
                url: o.url,
                description: o.description,
                rating: o.rating,
                details: vec![o.cost.to_string(), o.pickup.label().to_string()],
            },
        ));
    }
    if let Some(o) = options.donation.iter().max_by(|a, b| a.rating.total_cmp(&b.rating)) {
        picks.push((
            "Donate",
            PickCard {
                name: o.name,
                url: o.url,
                description: o.description,
                rating: o.rating,
                details: vec![o.pickup.label().to_string()],
            },
        ));
    }
    picks
}

/// Whole number with thousands separators.
pub(crate) fn format_number(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{calculate_price, AnalysisSource, PriceRequest};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.4), "999");
        assert_eq!(format_number(16_750.0), "16,750");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(-4_500.0), "-4,500");
    }

    #[test]
    fn test_quick_picks_take_best_rated() {
        let request = PriceRequest::new("tablets", "Apple", "iPad Air M2", "Good");
        let quote = calculate_price(&request, 2025).unwrap();
        let analysis = DeviceAnalysis::assemble(request, quote.into(), AnalysisSource::OfflineFallback);

        let picks = quick_picks(&analysis);
        let names: Vec<_> = picks.iter().map(|(_, card)| card.name).collect();
        assert_eq!(
            names,
            vec!["Swappa", "Apple Trade In", "Call2Recycle", "World Computer Exchange"]
        );
    }
}
