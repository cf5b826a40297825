//! Host seams the resolver reads from and writes to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser provides four things: the cookie string, `localStorage`, the
//! `prefers-color-scheme` media query, and the root element's class list.
//! Each is a trait here so the resolver runs unchanged against `web-sys`
//! (`browser`) or in-memory doubles (`memory`).

use std::fmt;
use std::rc::Rc;

use super::error::ThemeError;

/// Raw `document.cookie` access.
pub trait CookieJar {
    /// Current `name=value; ...` cookie string.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when cookies cannot be accessed.
    fn read_all(&self) -> Result<String, ThemeError>;
    /// Apply one assignment string (`name=value; attr=...`).
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the cookie cannot be written.
    fn write(&self, assignment: &str) -> Result<(), ThemeError>;
}

/// Key/value store without expiry (`localStorage`).
///
/// # Errors
///
/// Every method returns [`ThemeError`] when the store is unavailable or
/// the host rejects the operation.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// See the trait docs.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    /// # Errors
    ///
    /// See the trait docs.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
    /// # Errors
    ///
    /// See the trait docs.
    fn remove(&self, key: &str) -> Result<(), ThemeError>;
}

/// The OS dark-mode media signal.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
    /// Register `on_change` for OS preference changes. Dropping the returned
    /// subscription deregisters it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the media query cannot be subscribed to.
    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ThemeError>;
}

/// The single document-wide dark flag downstream styling keys off.
pub trait DocumentFlag {
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the root element is missing or rejects
    /// the class change.
    fn set_dark(&self, dark: bool) -> Result<(), ThemeError>;
}

/// Deregistration guard for a [`ColorSchemeSource::watch`] listener.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription with nothing to release.
    #[must_use]
    pub fn noop() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

/// The four host handles a resolver is built over.
#[derive(Clone)]
pub struct ThemeEnv {
    pub cookies: Rc<dyn CookieJar>,
    pub local: Rc<dyn PreferenceStore>,
    pub scheme: Rc<dyn ColorSchemeSource>,
    pub document: Rc<dyn DocumentFlag>,
}

impl fmt::Debug for ThemeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEnv").finish_non_exhaustive()
    }
}
