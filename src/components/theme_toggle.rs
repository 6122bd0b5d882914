//! Theme toggle button for Leptos views.
//!
//! DESIGN
//! ======
//! The button's label is a signal, so the toggle's document port wraps the
//! root-element port and mirrors every shown theme into that signal instead
//! of writing the button text directly. Hydrate builds persist through
//! `localStorage`; other builds run against in-memory ports so SSR output is
//! deterministic (always light).
//!
//! The stored theme is applied from an effect, after hydration has claimed
//! the server-rendered light label, so the signal change actually reaches
//! the DOM. The button is rendered with `data-theme-bound` so the page-level
//! auto-mount leaves it to this component.

use leptos::prelude::*;

use crate::config::{DEFAULT_CONTROL_ID, ToggleConfig};
use crate::port::ThemeDocument;
use crate::theme::Theme;
use crate::toggler::ThemeToggler;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

#[cfg(feature = "hydrate")]
type PortStore = crate::browser::BrowserStorage;
#[cfg(feature = "hydrate")]
type PortDocument = crate::browser::DomDocument;

#[cfg(not(feature = "hydrate"))]
type PortStore = crate::memory::MemoryStore;
#[cfg(not(feature = "hydrate"))]
type PortDocument = crate::memory::MemoryDocument;

type BoundToggler = ThemeToggler<PortStore, SignalDocument<PortDocument>>;

struct SignalDocument<D> {
    inner: D,
    theme: RwSignal<Theme>,
}

impl<D: ThemeDocument> ThemeDocument for SignalDocument<D> {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.inner.root_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.inner.set_root_attribute(name, value);
    }

    fn show_theme(&self, theme: Theme) {
        self.inner.show_theme(theme);
        self.theme.set(theme);
    }

    fn prefers_dark(&self) -> bool {
        self.inner.prefers_dark()
    }
}

#[cfg(feature = "hydrate")]
fn ports() -> Option<(PortStore, PortDocument)> {
    Some((
        crate::browser::BrowserStorage::open(),
        crate::browser::DomDocument::root_only()?,
    ))
}

#[cfg(not(feature = "hydrate"))]
fn ports() -> Option<(PortStore, PortDocument)> {
    Some((
        crate::memory::MemoryStore::new(),
        crate::memory::MemoryDocument::new(),
    ))
}

/// Button that flips the page theme and remembers the choice.
#[component]
pub fn ThemeToggle(
    /// Element id; defaults to `theme-toggle`.
    #[prop(optional, into)]
    id: Option<String>,
    /// Follow `prefers-color-scheme` when nothing is stored.
    #[prop(optional)]
    follow_system: bool,
) -> impl IntoView {
    let id = id.unwrap_or_else(|| DEFAULT_CONTROL_ID.to_owned());
    let config = ToggleConfig {
        follow_system,
        ..ToggleConfig::default().with_control_id(id.clone())
    };

    let theme = RwSignal::new(Theme::Light);
    let toggler = StoredValue::new_local(None::<BoundToggler>);

    Effect::new(move |_| {
        let bound = ports().and_then(|(store, inner)| {
            ThemeToggler::init(config.clone(), store, Some(SignalDocument { inner, theme }))
        });
        toggler.set_value(bound);
    });

    let on_click = move |_| {
        let flipped = toggler.with_value(|t| t.as_ref().map(ThemeToggler::on_toggle_click));
        if flipped.is_none() {
            theme.update(|t| *t = t.toggled());
        }
    };

    view! {
        <button
            id=id
            class="theme-toggle"
            data-theme-bound=""
            on:click=on_click
            title=move || theme.get().action_title()
            aria-label=move || theme.get().action_title()
        >
            {move || theme.get().label()}
        </button>
    }
}
