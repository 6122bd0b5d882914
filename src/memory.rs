//! In-memory ports for non-browser builds and tests.
//!
//! Handles are cheap clones over shared state, so a test can keep one handle
//! while `ThemeToggler` owns another and inspect what the toggle wrote.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::port::{PreferenceStore, ThemeDocument};
use crate::theme::Theme;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Key-value store standing in for `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make every subsequent write fail, as a full or disabled store would.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only.get() {
            return Err(ThemeError::StorageWrite("store is read-only".to_owned()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct PageState {
    root_attributes: HashMap<String, String>,
    control_id: Option<String>,
    control_bound: bool,
    label: Option<String>,
    title: Option<String>,
    prefers_dark: bool,
}

/// A page with a root element and at most one toggle control.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<PageState>>,
}

impl MemoryDocument {
    /// A page with no toggle control.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose toggle control has element id `id`.
    pub fn with_control(id: &str) -> Self {
        let page = Self::default();
        page.state.borrow_mut().control_id = Some(id.to_owned());
        page
    }

    /// A page whose control was rendered already bound, as the Leptos
    /// component renders it.
    pub fn with_bound_control(id: &str) -> Self {
        let page = Self::with_control(id);
        page.state.borrow_mut().control_bound = true;
        page
    }

    /// Look up the toggle control by id.
    pub fn locate(&self, id: &str) -> Option<Self> {
        let found = self.state.borrow().control_id.as_deref() == Some(id);
        found.then(|| self.clone())
    }

    pub fn is_control_bound(&self) -> bool {
        self.state.borrow().control_bound
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.state.borrow_mut().prefers_dark = prefers_dark;
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().root_attributes.get(name).cloned()
    }

    /// Current control text, `None` until a theme has been shown.
    pub fn label(&self) -> Option<String> {
        self.state.borrow().label.clone()
    }

    pub fn title(&self) -> Option<String> {
        self.state.borrow().title.clone()
    }
}

impl ThemeDocument for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .root_attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn show_theme(&self, theme: Theme) {
        let mut state = self.state.borrow_mut();
        state.label = Some(theme.label().to_owned());
        state.title = Some(theme.action_title().to_owned());
    }

    fn control_bound(&self) -> bool {
        self.state.borrow().control_bound
    }

    fn mark_control_bound(&self) {
        self.state.borrow_mut().control_bound = true;
    }

    fn prefers_dark(&self) -> bool {
        self.state.borrow().prefers_dark
    }
}
