use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    config::{AppConfig, BackendConfig, LoggingConfig, LOG_LEVELS},
    domain::{AppState, PriceRequest},
    infra::AnalysisClient,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut config = use_context::<Signal<AppConfig>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Seed from the file itself so Apply never persists environment overrides.
    let initial = use_hook(|| {
        AppConfig::load_stored().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Stored configuration unreadable, editing defaults");
            AppConfig::default()
        })
    });

    let mut enabled_input = use_signal(|| initial.backend.enabled);
    let mut url_input = use_signal(|| initial.backend.base_url.clone());
    let mut timeout_input = use_signal(|| initial.backend.timeout_secs.to_string());
    let mut level_input = use_signal(|| initial.logging.level.clone());
    let mut testing = use_signal(|| false);

    let on_apply = move |_| {
        let parsed = parse_config(enabled_input(), url_input(), timeout_input(), level_input());
        match parsed {
            Ok(updated) => match updated.save() {
                Ok(path) => {
                    let effective = updated.clone().with_env_overrides();
                    let overridden = effective != updated;
                    config.set(effective);
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        format!("Settings saved to {}.", path.display()),
                    );
                    if overridden {
                        push_toast(
                            toasts,
                            ToastKind::Info,
                            "Environment variables still override some of these settings.",
                        );
                    }
                }
                Err(err) => push_toast(toasts, ToastKind::Error, format!("Could not save settings: {err}")),
            },
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    let on_reset = move |_| {
        let defaults = AppConfig::default();
        enabled_input.set(defaults.backend.enabled);
        url_input.set(defaults.backend.base_url.clone());
        timeout_input.set(defaults.backend.timeout_secs.to_string());
        level_input.set(defaults.logging.level.clone());
        push_toast(toasts, ToastKind::Info, "Defaults restored. Apply to keep them.");
    };

    let on_test = move |_| {
        let backend = match parse_config(true, url_input(), timeout_input(), level_input()) {
            Ok(cfg) => cfg.backend,
            Err(message) => {
                push_toast(toasts, ToastKind::Error, message);
                return;
            }
        };
        testing.set(true);
        spawn(async move {
            let mut testing = testing;
            let probe = PriceRequest::new("smartphones", "Apple", "iPhone 13", "Good");
            let outcome = match AnalysisClient::new(&backend) {
                Ok(client) => client.analyze(&probe).await.map(|v| v.estimated_value),
                Err(err) => Err(err),
            };
            match outcome {
                Ok(value) => push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Analysis service reachable (sample estimate ${value})."),
                ),
                Err(err) => push_toast(
                    toasts,
                    ToastKind::Warning,
                    format!("Analysis service unavailable: {err}. Offline estimates will be used."),
                ),
            }
            testing.set(false);
        });
    };

    let on_clear_form = move |_| {
        state.with_mut(|st| {
            st.form.reset();
            st.analysis = None;
        });
        persist_user_state(&state);
        push_toast(toasts, ToastKind::Info, "Cleared the saved device form.");
    };

    rsx! {
        div { class: "stack",
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Analysis service" }
                p { class: theme::MUTED,
                    "When enabled, devices are priced by the analysis service first. Any failure falls back to the built-in estimator."
                }
                div { class: "grid-2",
                    div { class: "field",
                        label { class: theme::FIELD_LABEL, "Use analysis service" }
                        button {
                            class: theme::chip(enabled_input()),
                            onclick: move |_| enabled_input.set(!enabled_input()),
                            if enabled_input() { "Enabled" } else { "Disabled" }
                        }
                    }
                    div { class: "field",
                        label { class: theme::FIELD_LABEL, "Timeout (seconds)" }
                        input {
                            class: theme::INPUT,
                            value: timeout_input(),
                            oninput: move |evt| timeout_input.set(evt.value()),
                        }
                    }
                }
                div { class: "field",
                    label { class: theme::FIELD_LABEL, "Service URL" }
                    input {
                        class: theme::INPUT,
                        value: url_input(),
                        oninput: move |evt| url_input.set(evt.value()),
                    }
                }
                div { class: "actions",
                    button {
                        class: theme::BTN_GHOST,
                        disabled: testing(),
                        onclick: on_test,
                        if testing() { "Testing…" } else { "Test connection" }
                    }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Logging" }
                p { class: theme::MUTED, "Takes effect on next start. RUST_LOG overrides this." }
                select {
                    class: theme::INPUT,
                    value: level_input(),
                    onchange: move |evt| level_input.set(evt.value()),
                    for level in LOG_LEVELS {
                        option { key: "{level}", value: level, selected: level_input() == level, "{level}" }
                    }
                }
            }

            section { class: theme::PANEL,
                div { class: "actions",
                    button { class: theme::btn_primary(false), onclick: on_apply, "Apply" }
                    button { class: theme::BTN_GHOST, onclick: on_reset, "Reset defaults" }
                    button { class: theme::BTN_WARN, onclick: on_clear_form, "Clear saved form" }
                }
            }
        }
    }
}

fn parse_config(
    enabled: bool,
    base_url: String,
    timeout_secs: String,
    level: String,
) -> Result<AppConfig, String> {
    let base_url = base_url.trim().to_string();
    url::Url::parse(&base_url).map_err(|err| format!("Service URL is invalid: {err}"))?;
    let timeout_secs: u64 = timeout_secs
        .trim()
        .parse()
        .map_err(|_| "Timeout must be a whole number of seconds")?;
    if !(1..=120).contains(&timeout_secs) {
        return Err("Timeout must be between 1 and 120 seconds".to_string());
    }
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(format!("Unknown log level '{level}'"));
    }

    Ok(AppConfig {
        backend: BackendConfig {
            enabled,
            base_url,
            timeout_secs,
        },
        logging: LoggingConfig { level },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_accepts_valid_input() {
        let config = parse_config(
            false,
            " http://localhost:5000/ ".to_string(),
            "10".to_string(),
            "debug".to_string(),
        )
        .unwrap();
        assert!(!config.backend.enabled);
        assert_eq!(config.backend.base_url, "http://localhost:5000/");
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_config_rejects_bad_input() {
        let ok_url = || "http://localhost:5000/".to_string();
        assert!(parse_config(true, "localhost".to_string(), "5".into(), "info".into()).is_err());
        assert!(parse_config(true, ok_url(), "five".into(), "info".into()).is_err());
        assert!(parse_config(true, ok_url(), "0".into(), "info".into()).is_err());
        assert!(parse_config(true, ok_url(), "5".into(), "chatty".into()).is_err());
    }
}
