//! Error type shared by the storage, DOM, and configuration layers.

/// Failures surfaced by the theme toggle.
///
/// A missing toggle control is not represented here: it is an expected page
/// shape and shows up as `None` from the lookup instead.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme value: {0:?}")]
    UnknownTheme(String),
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("failed to write theme preference: {0}")]
    StorageWrite(String),
    #[error("no document available")]
    NoDocument,
    #[error("failed to attach listener: {0}")]
    Listener(String),
    #[error("invalid toggle config: {0}")]
    Config(#[from] serde_json::Error),
}
