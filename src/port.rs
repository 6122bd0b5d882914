//! Environment ports for the toggle.
//!
//! DESIGN
//! ======
//! The toggle touches exactly two pieces of browser state: one storage key
//! and the root element (plus the control's label). Both sit behind these
//! traits so `ThemeToggler` runs unchanged against `web_sys` in the browser
//! and against the in-memory types in tests.

use crate::error::ThemeError;
use crate::theme::Theme;

/// Durable key-value store for the preference.
pub trait PreferenceStore {
    /// Raw stored value, or `None` when absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The rendered page: root attribute plus the toggle control.
pub trait ThemeDocument {
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&self, name: &str, value: &str);

    /// Reflect `theme` on the toggle control (text, title, aria label).
    fn show_theme(&self, theme: Theme);

    /// Whether the control already carries a toggle.
    fn control_bound(&self) -> bool {
        false
    }

    fn mark_control_bound(&self) {}

    /// Whether the platform asks for a dark color scheme.
    fn prefers_dark(&self) -> bool {
        false
    }
}
