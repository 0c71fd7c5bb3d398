//! Browser binding for the EcoSmart site.
//!
//! # Responsibility
//! - Bind `ecosmart_core` behaviour to the live document.
//! - Own every `wasm-bindgen` closure, DOM lookup and storage handle.
//!
//! # Invariants
//! - Exported entry points never panic; failures are logged and skipped.
//! - A missing element disables only its own feature.

pub mod dom;
pub mod features;
mod ready;
pub mod storage;

use ecosmart_core::{ConfigError, SiteConfig};
use log::{info, warn};
use wasm_bindgen::prelude::*;

/// Global the page may set (JSON string or object) to override defaults.
const CONFIG_GLOBAL: &str = "ECOSMART_CONFIG";

/// Module entry point: installs diagnostics, then wires the page once the
/// document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    let level = ecosmart_core::logging::level_filter(&config.log_level)
        .to_level()
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
    if let Some(err) = load_error {
        warn!("event=config_load module=web status=error error={err}");
    }
    info!(
        "event=app_start module=web status=ok version={}",
        ecosmart_core::core_version()
    );

    ready::when_ready(move || features::install_all(&config));
}

/// Expose core crate version to page scripts.
#[wasm_bindgen(js_name = coreVersion)]
pub fn core_version() -> String {
    ecosmart_core::core_version().to_owned()
}

/// Reads the page override; absent means defaults.
fn load_config() -> Result<SiteConfig, ConfigError> {
    match config_override() {
        Some(raw) => SiteConfig::from_json(&raw),
        None => Ok(SiteConfig::default()),
    }
}

fn config_override() -> Option<String> {
    let window = dom::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(raw) = value.as_string() {
        return Some(raw);
    }
    js_sys::JSON::stringify(&value)
        .ok()
        .and_then(|raw| raw.as_string())
}
