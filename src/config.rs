//! Theme persistence configuration.
//!
//! Names and attributes for the durable cookie, the `localStorage` key, the
//! root-element class and the OS media query. Defaults match what the site
//! ships with; tests override individual fields.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

use crate::theme::error::ThemeError;

pub const DEFAULT_COOKIE_NAME: &str = "theme";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_MAX_AGE_DAYS: u32 = 365;
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

const SECONDS_PER_DAY: u64 = 86_400;

/// `SameSite` attribute written on the theme cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub cookie_name: String,
    pub storage_key: String,
    pub cookie_path: String,
    pub max_age_days: u32,
    pub same_site: SameSite,
    pub dark_class: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            cookie_path: DEFAULT_COOKIE_PATH.to_owned(),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            same_site: SameSite::default(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Cookie lifetime in seconds, as written to `max-age`.
    #[must_use]
    pub fn max_age_secs(&self) -> u64 {
        u64::from(self.max_age_days) * SECONDS_PER_DAY
    }

    /// Reject values that would produce a cookie or class the browser
    /// silently ignores.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.cookie_name.is_empty() || !self.cookie_name.chars().all(is_token_char) {
            return Err(ThemeError::InvalidConfig(format!("cookie name {:?}", self.cookie_name)));
        }
        if self.storage_key.is_empty() {
            return Err(ThemeError::InvalidConfig("empty storage key".into()));
        }
        if !self.cookie_path.starts_with('/') || self.cookie_path.contains(';') {
            return Err(ThemeError::InvalidConfig(format!("cookie path {:?}", self.cookie_path)));
        }
        if self.max_age_days == 0 {
            return Err(ThemeError::InvalidConfig("max age must be at least one day".into()));
        }
        if self.dark_class.is_empty() || self.dark_class.chars().any(char::is_whitespace) {
            return Err(ThemeError::InvalidConfig(format!("dark class {:?}", self.dark_class)));
        }
        if self.media_query.trim().is_empty() {
            return Err(ThemeError::InvalidConfig("empty media query".into()));
        }
        Ok(())
    }
}

/// RFC 6265 `token` characters allowed in a cookie name.
fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c)
}
