//! Session owner for a [`ThemeResolver`].
//!
//! Installs the OS listener exactly once and releases it on drop. The
//! listener holds only a weak handle, so a notification that races teardown
//! finds nothing to act on.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::ThemeConfig;

use super::backend::{Subscription, ThemeEnv};
use super::error::ThemeError;
use super::resolver::{ThemeMode, ThemeResolver};

/// Called with the new `is_dark` after any state change.
pub type ChangeCallback = Rc<dyn Fn(bool)>;

pub struct ThemeController {
    resolver: Rc<RefCell<ThemeResolver>>,
    on_change: ChangeCallback,
    subscription: Option<Subscription>,
}

impl ThemeController {
    /// Initialize the resolver and start tracking the OS signal.
    ///
    /// Fails only on an invalid config. A host that cannot deliver OS change
    /// events still yields a working controller, just without tracking.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] when `config` fails validation.
    pub fn start(env: ThemeEnv, config: ThemeConfig, on_change: ChangeCallback) -> Result<Self, ThemeError> {
        config.validate()?;
        let scheme = Rc::clone(&env.scheme);
        let resolver = Rc::new(RefCell::new(ThemeResolver::initialize(env, config)));

        let weak: Weak<RefCell<ThemeResolver>> = Rc::downgrade(&resolver);
        let notify = Rc::clone(&on_change);
        let subscription = scheme
            .watch(Box::new(move |prefers_dark| {
                let Some(resolver) = weak.upgrade() else {
                    return;
                };
                let changed = resolver.borrow_mut().handle_os_change(prefers_dark);
                if changed {
                    let dark = resolver.borrow().is_dark();
                    notify(dark);
                }
            }))
            .map_err(|err| log::warn!("os theme changes will not be tracked: {err}"))
            .ok();

        Ok(Self { resolver, on_change, subscription })
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.resolver.borrow().is_dark()
    }

    #[must_use]
    pub fn has_user_pref(&self) -> bool {
        self.resolver.borrow().has_user_pref()
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.resolver.borrow().mode()
    }

    pub fn toggle_theme(&self) {
        let dark = {
            let mut resolver = self.resolver.borrow_mut();
            resolver.toggle_theme();
            resolver.is_dark()
        };
        (self.on_change)(dark);
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    /// Deregister the OS listener. State stays readable.
    pub fn shutdown(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("theme os listener released");
        }
    }
}

impl Drop for ThemeController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode())
            .field("listening", &self.is_listening())
            .finish_non_exhaustive()
    }
}
