//! # jobminer-theme
//!
//! Light/dark theme toggle for the JobMiner pages, compiled to WebAssembly.
//!
//! On load the module finds the toggle control (`#theme-toggle`, or
//! `#themeToggle` on older templates), applies the theme stored under the
//! `theme` key in `localStorage` to `<html data-theme=...>`, and flips it on
//! every click. Pages without a control are left untouched.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The `Theme` value, parsing with fallback, labels |
//! | [`toggler`] | Initialization and click handling over injectable ports |
//! | [`port`] | Storage and document traits |
//! | [`memory`] | In-memory ports for SSR and tests |
//! | `browser` | `web_sys` ports and DOM wiring (`hydrate` only) |
//! | [`components`] | Leptos `ThemeToggle` button |
//! | [`config`] | Control id, storage key, attribute name |
//! | [`error`] | `ThemeError` |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod memory;
pub mod port;
pub mod theme;
pub mod toggler;

pub use config::ToggleConfig;
pub use error::ThemeError;
pub use theme::Theme;
pub use toggler::{ThemeToggler, apply_theme, toggle_theme};

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging and mount the page's toggle control.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }

    if let Err(err) = browser::on_dom_ready(auto_mount) {
        log::warn!("theme toggle not mounted: {err}");
    }
}

#[cfg(feature = "hydrate")]
fn auto_mount() {
    for config in [ToggleConfig::default(), ToggleConfig::variant()] {
        match browser::mount(config) {
            Ok(true) => return,
            Ok(false) => {}
            Err(err) => {
                log::warn!("theme toggle not mounted: {err}");
                return;
            }
        }
    }
}

/// Mount a toggle control explicitly, e.g. one inserted after page load or
/// using a custom id.
///
/// `config_json` is a partial `ToggleConfig` object; `None` uses defaults.
/// Returns whether a control was found and bound.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn mount_theme_toggle(config_json: Option<String>) -> bool {
    let config = match config_json.as_deref().map(ToggleConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("{err}");
            return false;
        }
        None => ToggleConfig::default(),
    };
    match browser::mount(config) {
        Ok(mounted) => mounted,
        Err(err) => {
            log::warn!("theme toggle not mounted: {err}");
            false
        }
    }
}
