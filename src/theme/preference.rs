//! The durable theme preference value.
//!
//! `System` means "no explicit choice, track the OS". `Light` and `Dark`
//! are explicit choices that stop OS tracking.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ThemeError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Explicit preference for the given dark flag.
    #[must_use]
    pub fn explicit(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn is_explicit(self) -> bool {
        !matches!(self, Self::System)
    }

    /// Dark flag of an explicit preference; `None` for `System`.
    #[must_use]
    pub fn as_dark(self) -> Option<bool> {
        match self {
            Self::Light => Some(false),
            Self::Dark => Some(true),
            Self::System => None,
        }
    }

    /// Parse a stored value, treating anything unrecognized as absent.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    /// Exact match only. Stored values are written by this crate, so
    /// anything else is foreign or corrupted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::InvalidPreference(other.to_owned())),
        }
    }
}
