use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use tracing::error;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// The leaf icon as an inline `data:` URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
        .as_str()
}

fn load_text(path: &str) -> String {
    match load_asset(path) {
        Some(data) => String::from_utf8_lossy(&data).into_owned(),
        None => {
            error!(path, "Embedded asset missing");
            String::new()
        }
    }
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(path.trim_start_matches('/').trim_start_matches("assets/")).map(|file| file.data)
}

fn svg_data_uri(svg: &str) -> String {
    let mut encoded = String::with_capacity(svg.len() + 32);
    for ch in svg.chars() {
        match ch {
            '%' => encoded.push_str("%25"),
            '#' => encoded.push_str("%23"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '"' => encoded.push('\''),
            '\n' | '\r' | '\t' => encoded.push(' '),
            other => encoded.push(other),
        }
    }
    format!("data:image/svg+xml,{encoded}")
}
