//! Browser ports and DOM wiring (`hydrate` builds only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds `ThemeToggler` to `window.localStorage`, `document.documentElement`
//! and the toggle control, then leaves a click listener attached for the
//! lifetime of the page.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: private browsing, disabled storage, or a full quota
//! all read as "no preference" and writes are reported to the caller rather
//! than thrown into the page.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, Storage};

use crate::config::{BOUND_MARKER, ToggleConfig};
use crate::error::ThemeError;
use crate::port::{PreferenceStore, ThemeDocument};
use crate::theme::Theme;
use crate::toggler::ThemeToggler;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn current_document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`, if the browser exposes one.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", describe(&err));
                None
            }
        });
        Self { storage }
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("failed to read {key:?} from localStorage: {}", describe(&err));
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| ThemeError::StorageWrite(describe(&err)))
    }
}

/// The live page: `<html>` plus an optional toggle control element.
#[derive(Clone)]
pub struct DomDocument {
    root: Element,
    control: Option<Element>,
}

impl DomDocument {
    /// Look up the toggle control by id; `None` when the page has none.
    pub fn locate(control_id: &str) -> Option<Self> {
        let document = current_document()?;
        let root = document.document_element()?;
        let control = document.get_element_by_id(control_id)?;
        Some(Self {
            root,
            control: Some(control),
        })
    }

    /// Root element only, for callers that render the label themselves.
    pub fn root_only() -> Option<Self> {
        let root = current_document()?.document_element()?;
        Some(Self { root, control: None })
    }

    pub fn control(&self) -> Option<&Element> {
        self.control.as_ref()
    }

    fn set_attribute(element: &Element, name: &str, value: &str) {
        if let Err(err) = element.set_attribute(name, value) {
            log::warn!("failed to set {name}={value:?}: {}", describe(&err));
        }
    }
}

impl ThemeDocument for DomDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        Self::set_attribute(&self.root, name, value);
    }

    fn show_theme(&self, theme: Theme) {
        let Some(control) = &self.control else {
            return;
        };
        control.set_text_content(Some(theme.label()));
        Self::set_attribute(control, "title", theme.action_title());
        Self::set_attribute(control, "aria-label", theme.action_title());
    }

    fn control_bound(&self) -> bool {
        self.control
            .as_ref()
            .is_some_and(|control| control.has_attribute(BOUND_MARKER))
    }

    fn mark_control_bound(&self) {
        if let Some(control) = &self.control {
            Self::set_attribute(control, BOUND_MARKER, "");
        }
    }

    fn prefers_dark(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("matchMedia failed: {}", describe(&err));
                false
            }
        }
    }
}

/// Initialize the toggle for `config` and attach its click listener.
///
/// Returns `Ok(false)` when the page has no matching control. A control that
/// is already bound (mounted earlier, or rendered by `ThemeToggle`) is left
/// alone and reported as mounted.
pub fn mount(config: ToggleConfig) -> Result<bool, ThemeError> {
    let Some(document) = DomDocument::locate(&config.control_id) else {
        log::debug!("theme toggle #{} not on this page", config.control_id);
        return Ok(false);
    };
    let Some(control) = document.control().cloned() else {
        return Ok(false);
    };
    let Some(toggler) = ThemeToggler::bind(config, BrowserStorage::open(), Some(document)) else {
        return Ok(true);
    };

    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        toggler.on_toggle_click();
    }) as Box<dyn FnMut(Event)>);
    if let Err(err) =
        control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        if let Err(remove_err) = control.remove_attribute(BOUND_MARKER) {
            log::warn!("failed to clear {BOUND_MARKER}: {}", describe(&remove_err));
        }
        return Err(ThemeError::Listener(describe(&err)));
    }
    // The listener lives as long as the page.
    on_click.forget();
    Ok(true)
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately when `DOMContentLoaded` has already fired, which is the
/// usual case once the WASM module has finished loading.
pub fn on_dom_ready<F>(f: F) -> Result<(), ThemeError>
where
    F: FnOnce() + 'static,
{
    let document = current_document().ok_or(ThemeError::NoDocument)?;
    if !is_loading(&document) {
        f();
        return Ok(());
    }

    let callback = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| ThemeError::Listener(describe(&err)))
}

fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}
