//! Theme resolution state machine.
//!
//! DESIGN
//! ======
//! One read path and one write path. [`ThemeResolver::initialize`] reads the
//! cookie, then `localStorage`, then the OS signal, in that order.
//! [`ThemeResolver::apply`] is the only code that writes the document flag,
//! the cookie or `localStorage`, so the two stores cannot drift apart.
//!
//! States are `Adaptive` (mirror the OS) and `Explicit(dark)`. A toggle moves
//! to `Explicit`; nothing moves back.
//!
//! Host failures degrade silently: an unreadable store is an empty store and
//! a failed write is logged and skipped.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::config::ThemeConfig;

use super::backend::ThemeEnv;
use super::cookie;
use super::preference::ThemePreference;

/// Externally visible resolver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// No explicit choice; `is_dark` follows the OS.
    Adaptive { dark: bool },
    /// The user toggled; OS changes are ignored.
    Explicit { dark: bool },
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            Self::Adaptive { dark } | Self::Explicit { dark } => dark,
        }
    }

    /// The value the cookie should hold in this state.
    #[must_use]
    pub fn preference(self) -> ThemePreference {
        match self {
            Self::Adaptive { .. } => ThemePreference::System,
            Self::Explicit { dark } => ThemePreference::explicit(dark),
        }
    }
}

#[derive(Debug)]
pub struct ThemeResolver {
    config: ThemeConfig,
    env: ThemeEnv,
    is_dark: bool,
    has_user_pref: bool,
}

impl ThemeResolver {
    /// Resolve the initial state from storage and the OS, then apply it.
    pub fn initialize(env: ThemeEnv, config: ThemeConfig) -> Self {
        let stored = read_cookie(&env, &config).or_else(|| read_local(&env, &config));
        let (is_dark, has_user_pref) = match stored.and_then(ThemePreference::as_dark) {
            Some(dark) => (dark, true),
            None => {
                let dark = env.scheme.prefers_dark();
                // Make adaptive mode explicit in the cookie before the first apply.
                write_cookie(&env, &config, ThemePreference::System);
                (dark, false)
            }
        };

        let resolver = Self { config, env, is_dark, has_user_pref };
        log::debug!("theme initialized: stored={stored:?} mode={:?}", resolver.mode());
        resolver.apply();
        resolver
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub fn has_user_pref(&self) -> bool {
        self.has_user_pref
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        if self.has_user_pref {
            ThemeMode::Explicit { dark: self.is_dark }
        } else {
            ThemeMode::Adaptive { dark: self.is_dark }
        }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Flip the theme and pin it as an explicit choice.
    pub fn toggle_theme(&mut self) {
        self.has_user_pref = true;
        self.is_dark = !self.is_dark;
        log::debug!("theme toggled: mode={:?}", self.mode());
        self.apply();
    }

    /// React to an OS preference change. Returns whether state changed.
    ///
    /// Explicit mode observes but does not act.
    pub fn handle_os_change(&mut self, prefers_dark: bool) -> bool {
        if self.has_user_pref {
            log::trace!("os theme change ignored: explicit preference set");
            return false;
        }
        self.is_dark = prefers_dark;
        log::debug!("os theme changed: mode={:?}", self.mode());
        self.apply();
        true
    }

    /// Push current state to the document flag and both stores.
    pub fn apply(&self) {
        if let Err(err) = self.env.document.set_dark(self.is_dark) {
            log::warn!("failed to set document theme flag: {err}");
        }

        let key = self.config.storage_key.as_str();
        let preference = self.mode().preference();
        let local = if preference.is_explicit() {
            self.env.local.set(key, preference.as_str())
        } else {
            self.env.local.remove(key)
        };
        if let Err(err) = local {
            log::warn!("failed to sync theme to localStorage: {err}");
        }
        write_cookie(&self.env, &self.config, preference);
    }
}

fn read_cookie(env: &ThemeEnv, config: &ThemeConfig) -> Option<ThemePreference> {
    let all = env
        .cookies
        .read_all()
        .map_err(|err| log::debug!("theme cookie unreadable: {err}"))
        .ok()?;
    ThemePreference::from_stored(cookie::lookup(&all, &config.cookie_name).as_deref())
}

fn read_local(env: &ThemeEnv, config: &ThemeConfig) -> Option<ThemePreference> {
    let raw = env
        .local
        .get(&config.storage_key)
        .map_err(|err| log::debug!("theme localStorage unreadable: {err}"))
        .ok()
        .flatten();
    ThemePreference::from_stored(raw.as_deref())
}

fn write_cookie(env: &ThemeEnv, config: &ThemeConfig, preference: ThemePreference) {
    let assignment = cookie::format_assignment(config, preference.as_str());
    if let Err(err) = env.cookies.write(&assignment) {
        log::warn!("failed to write theme cookie: {err}");
    }
}
