//! The two-valued display theme and its presentation strings.
//!
//! DESIGN
//! ======
//! `Theme` is the only value this crate moves around. Storage, the root
//! attribute, and the toggle label all carry its literal lowercase name, so
//! parsing is strict and anything unrecognized falls back to `Light`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Page display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal value written to storage and to the `data-theme` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Toggle control text while this theme is active.
    ///
    /// Shows the theme a click switches *to*: a sun while dark is active,
    /// a moon while light is active.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Accessible description of what clicking the control does.
    pub const fn action_title(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Resolve a stored or attribute value, treating absent and unknown
    /// values as `Light`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<Self>) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                log::debug!("{err}; falling back to {}", Self::Light);
                Self::Light
            }
            None => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_owned())),
        }
    }
}
