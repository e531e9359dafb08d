use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    domain::{AppState, DeviceAnalysis},
    infra::{estimate_with_fallback, AnalysisClient},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{EstimatorPage, RecyclingPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Estimator {},
    #[route("/recycling")]
    Recycling {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    // Loaded once in `main` and handed over as root context.
    let loaded = use_context::<AppConfig>();

    let state = use_signal(AppState::default);
    use_hook(move || {
        let mut state = state;
        if let Some(saved) = load_persisted_state() {
            state.with_mut(|st| st.apply_persisted(saved));
        }
    });
    use_context_provider(|| state);

    let config = use_signal(move || loaded);
    use_context_provider(|| config);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!(error = %err, "Failed to persist user state");
    }
}

/// Prices the current form and stores the assembled analysis in `state`.
pub async fn run_analysis(
    mut state: Signal<AppState>,
    config: Signal<AppConfig>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let Some(request) = state.with(|st| st.form.to_request()) else {
        push_toast(toasts, ToastKind::Warning, "Please fill in all required fields.");
        return;
    };

    state.with_mut(|st| {
        st.is_analyzing = true;
        st.analysis = None;
    });
    persist_user_state(&state);

    let client = config.with(|cfg| AnalysisClient::from_config(&cfg.backend));
    let result = estimate_with_fallback(client.as_ref(), &request).await;

    match result {
        Ok((valuation, source)) => {
            info!(
                brand = %request.brand,
                model = %request.model,
                source = source.label(),
                "Analysis complete"
            );
            let analysis = DeviceAnalysis::assemble(request, valuation, source);
            state.with_mut(|st| {
                st.analysis = Some(analysis);
                st.is_analyzing = false;
            });
        }
        Err(err) => {
            state.with_mut(|st| st.is_analyzing = false);
            push_toast(toasts, ToastKind::Error, format!("Analysis failed: {err}"));
        }
    }
}

#[component]
pub fn Estimator() -> Element {
    rsx! { Shell { EstimatorPage {} } }
}

#[component]
pub fn Recycling() -> Element {
    rsx! { Shell { RecyclingPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
