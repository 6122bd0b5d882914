//! Leptos components for pages rendered by a Leptos app rather than shipped
//! as static HTML.

pub mod theme_toggle;
