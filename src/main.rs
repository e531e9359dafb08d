#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod ui;

use ecospire::{config, domain, infra, util};

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::config::AppConfig;
use crate::util::{logging::init_logging, APP_NAME};

fn main() {
    let loaded = AppConfig::load();
    init_logging(&loaded.effective.logging.level);
    if let Some(err) = &loaded.error {
        tracing::warn!(error = %err, "Failed to read configuration, using defaults");
    }
    let config = loaded.effective;
    tracing::info!(
        backend = %config.backend.base_url,
        enabled = config.backend.enabled,
        "Starting {APP_NAME}"
    );

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = {
        let window = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_inner_size(dioxus_desktop::tao::dpi::LogicalSize::new(1180.0, 860.0))
            )
        };
        builder.with_cfg(window)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}
