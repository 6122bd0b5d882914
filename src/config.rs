//! Toggle configuration: which control, which storage key, which attribute.
//!
//! SYSTEM CONTEXT
//! ==============
//! JobMiner pages ship the control as `#theme-toggle`; one older template
//! uses `#themeToggle`. Both share the `theme` storage key and the
//! `data-theme` root attribute that the stylesheets select on.

use serde::Deserialize;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CONTROL_ID: &str = "theme-toggle";
pub const VARIANT_CONTROL_ID: &str = "themeToggle";
pub const STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Set on a control that already has a toggle attached, either by `mount`
/// or by the Leptos `ThemeToggle` component rendering it.
pub const BOUND_MARKER: &str = "data-theme-bound";

/// Settings for a single toggle control.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Element id of the toggle control.
    pub control_id: String,
    /// `localStorage` key holding the preference.
    pub storage_key: String,
    /// Attribute set on the root element.
    pub attribute: String,
    /// Consult `prefers-color-scheme` when nothing is stored.
    pub follow_system: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            storage_key: STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            follow_system: false,
        }
    }
}

impl ToggleConfig {
    /// Config for pages that use the camel-case control id.
    pub fn variant() -> Self {
        Self::default().with_control_id(VARIANT_CONTROL_ID)
    }

    #[must_use]
    pub fn with_control_id(mut self, id: impl Into<String>) -> Self {
        self.control_id = id.into();
        self
    }

    /// Parse a possibly partial JSON object; omitted fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
