//! Theme toggle initialization and click handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load (`ThemeToggler::init`) and then once per click
//! (`on_toggle_click`). At click time the root attribute is the source of
//! truth, not storage, so a page that changed the attribute some other way
//! still flips from what is actually rendered.
//!
//! ERROR HANDLING
//! ==============
//! A failed preference write is logged and dropped. The attribute and label
//! are already updated by then, so the page stays consistent for the session
//! and only the next load falls back to the previous preference.

use crate::config::ToggleConfig;
use crate::port::{PreferenceStore, ThemeDocument};
use crate::theme::Theme;

#[cfg(test)]
#[path = "toggler_test.rs"]
mod toggler_test;

/// The theme after one click from `current`.
pub fn toggle_theme(current: Theme) -> Theme {
    current.toggled()
}

/// Render `theme` on the root attribute and the toggle control.
pub fn apply_theme<D: ThemeDocument + ?Sized>(document: &D, attribute: &str, theme: Theme) {
    document.set_root_attribute(attribute, theme.as_str());
    document.show_theme(theme);
}

/// A mounted toggle control bound to a store and a document.
#[derive(Debug)]
pub struct ThemeToggler<S, D> {
    config: ToggleConfig,
    store: S,
    document: D,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeToggler<S, D> {
    /// Apply the persisted theme and return the bound toggler.
    ///
    /// `document` is the result of looking up the control; `None` means the
    /// page has no toggle and nothing is touched.
    pub fn init(config: ToggleConfig, store: S, document: Option<D>) -> Option<Self> {
        let Some(document) = document else {
            log::debug!("theme toggle #{} not found; skipping", config.control_id);
            return None;
        };

        let theme = initial_theme(&config, &store, &document);
        apply_theme(&document, &config.attribute, theme);
        log::debug!("theme initialized: {theme}");

        Some(Self {
            config,
            store,
            document,
        })
    }

    /// `init` for a control that may already carry a toggle.
    ///
    /// Returns `None` when the control is absent or already bound, so a page
    /// never ends up with two listeners flipping the theme back and forth.
    /// A newly bound control is marked.
    pub fn bind(config: ToggleConfig, store: S, document: Option<D>) -> Option<Self> {
        if document.as_ref().is_some_and(|d| d.control_bound()) {
            log::debug!("theme toggle #{} already bound", config.control_id);
            return None;
        }
        let toggler = Self::init(config, store, document)?;
        toggler.document.mark_control_bound();
        Some(toggler)
    }

    /// Theme currently rendered on the root element.
    pub fn current(&self) -> Theme {
        Theme::from_stored(self.document.root_attribute(&self.config.attribute).as_deref())
    }

    /// Flip the rendered theme, persist it, and return the new value.
    pub fn on_toggle_click(&self) -> Theme {
        let current = self.current();
        let next = toggle_theme(current);
        apply_theme(&self.document, &self.config.attribute, next);
        if let Err(err) = self.store.save(&self.config.storage_key, next.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        log::debug!("theme toggled: {current} -> {next}");
        next
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}

fn initial_theme<S, D>(config: &ToggleConfig, store: &S, document: &D) -> Theme
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    match store.load(&config.storage_key) {
        Some(raw) => Theme::from_stored(Some(&raw)),
        None if config.follow_system && document.prefers_dark() => Theme::Dark,
        None => Theme::Light,
    }
}
