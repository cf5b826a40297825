//! In-memory host backends.
//!
//! Used when no browser is present (native builds, tests). The cookie jar
//! accepts the same assignment strings the browser would, and the color
//! scheme source lets callers simulate OS changes.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::backend::{ColorSchemeSource, CookieJar, DocumentFlag, PreferenceStore, Subscription, ThemeEnv};
use super::cookie;
use super::error::ThemeError;

#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RefCell<BTreeMap<String, String>>,
    writes: RefCell<Vec<String>>,
    unavailable: Cell<bool>,
}

impl MemoryCookieJar {
    /// Seed a raw (already encoded) cookie value.
    pub fn insert(&self, name: &str, raw_value: &str) {
        self.cookies.borrow_mut().insert(name.to_owned(), raw_value.to_owned());
    }

    /// Decoded value of `name`, as a page script would read it.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<String> {
        cookie::lookup(&self.joined(), name)
    }

    /// Every assignment string written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// Simulate cookies being disabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn joined(&self) -> String {
        self.cookies.borrow().iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("; ")
    }
}

impl CookieJar for MemoryCookieJar {
    fn read_all(&self) -> Result<String, ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::Unavailable { what: "cookies" });
        }
        Ok(self.joined())
    }

    fn write(&self, assignment: &str) -> Result<(), ThemeError> {
        if self.unavailable.get() {
            return Err(ThemeError::Unavailable { what: "cookies" });
        }
        let (name, value, max_age) = cookie::parse_assignment(assignment)
            .ok_or_else(|| ThemeError::Host(format!("malformed cookie assignment {assignment:?}")))?;
        let mut cookies = self.cookies.borrow_mut();
        if max_age.is_some_and(|age| age <= 0) {
            cookies.remove(&name);
        } else {
            cookies.insert(name, value);
        }
        self.writes.borrow_mut().push(assignment.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStore {
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.items.borrow().clone()
    }

    /// Simulate `localStorage` being disabled (private mode, quota).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn check(&self) -> Result<(), ThemeError> {
        if self.unavailable.get() {
            Err(ThemeError::Unavailable { what: "localStorage" })
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.check()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.check()?;
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ThemeError> {
        self.check()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

type Listeners = Rc<RefCell<Vec<(u64, Rc<dyn Fn(bool)>)>>>;

#[derive(Default)]
pub struct MemoryColorScheme {
    dark: Cell<bool>,
    next_id: Cell<u64>,
    listeners: Listeners,
}

impl MemoryColorScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark: Cell::new(dark), ..Self::default() }
    }

    /// Change the simulated OS preference and notify listeners if it moved.
    pub fn set_prefers_dark(&self, dark: bool) {
        if self.dark.replace(dark) == dark {
            return;
        }
        // Snapshot so a callback may drop its own subscription.
        let listeners = self.listeners.borrow().iter().map(|(_, cb)| Rc::clone(cb)).collect::<Vec<_>>();
        for cb in listeners {
            cb(dark);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for MemoryColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryColorScheme")
            .field("dark", &self.dark.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ColorSchemeSource for MemoryColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ThemeError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(on_change)));
        let listeners = Rc::clone(&self.listeners);
        Ok(Subscription::new(move || {
            listeners.borrow_mut().retain(|(other, _)| *other != id);
        }))
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    dark: Cell<bool>,
    applies: Cell<usize>,
}

impl MemoryDocument {
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    /// Number of times the flag has been written.
    #[must_use]
    pub fn applies(&self) -> usize {
        self.applies.get()
    }
}

impl DocumentFlag for MemoryDocument {
    fn set_dark(&self, dark: bool) -> Result<(), ThemeError> {
        self.dark.set(dark);
        self.applies.set(self.applies.get() + 1);
        Ok(())
    }
}

/// Concrete handles to every memory backend, kept alongside the type-erased
/// [`ThemeEnv`] so callers can inspect and drive them.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    pub cookies: Rc<MemoryCookieJar>,
    pub local: Rc<MemoryStore>,
    pub scheme: Rc<MemoryColorScheme>,
    pub document: Rc<MemoryDocument>,
}

impl MemoryHost {
    #[must_use]
    pub fn new(os_dark: bool) -> Self {
        Self { scheme: Rc::new(MemoryColorScheme::new(os_dark)), ..Self::default() }
    }

    #[must_use]
    pub fn env(&self) -> ThemeEnv {
        ThemeEnv {
            cookies: self.cookies.clone(),
            local: self.local.clone(),
            scheme: self.scheme.clone(),
            document: self.document.clone(),
        }
    }
}
