//! `web-sys` host backends.
//!
//! Thin wrappers over `document.cookie`, `localStorage`, `matchMedia` and the
//! root element's class list. Every JS exception becomes a
//! [`ThemeError::Host`]; a missing `window`/`document` becomes
//! [`ThemeError::Unavailable`].

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlDocument, MediaQueryList, MediaQueryListEvent, Storage};

use crate::config::ThemeConfig;

use super::backend::{ColorSchemeSource, CookieJar, DocumentFlag, PreferenceStore, Subscription, ThemeEnv};
use super::error::ThemeError;

fn host_err(err: JsValue) -> ThemeError {
    ThemeError::Host(format!("{err:?}"))
}

fn document() -> Result<web_sys::Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ThemeError::Unavailable { what: "document" })
}

#[derive(Debug, Default)]
pub struct BrowserCookieJar;

impl BrowserCookieJar {
    fn html_document() -> Result<HtmlDocument, ThemeError> {
        document()?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| ThemeError::Unavailable { what: "cookies" })
    }
}

impl CookieJar for BrowserCookieJar {
    fn read_all(&self) -> Result<String, ThemeError> {
        Self::html_document()?.cookie().map_err(host_err)
    }

    fn write(&self, assignment: &str) -> Result<(), ThemeError> {
        Self::html_document()?.set_cookie(assignment).map_err(host_err)
    }
}

#[derive(Debug, Default)]
pub struct BrowserLocalStorage;

impl BrowserLocalStorage {
    fn storage() -> Result<Storage, ThemeError> {
        web_sys::window()
            .ok_or(ThemeError::Unavailable { what: "window" })?
            .local_storage()
            .map_err(host_err)?
            .ok_or(ThemeError::Unavailable { what: "localStorage" })
    }
}

impl PreferenceStore for BrowserLocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?.get_item(key).map_err(host_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?.set_item(key, value).map_err(host_err)
    }

    fn remove(&self, key: &str) -> Result<(), ThemeError> {
        Self::storage()?.remove_item(key).map_err(host_err)
    }
}

#[derive(Debug)]
pub struct BrowserColorScheme {
    query: String,
}

impl BrowserColorScheme {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self { query: query.to_owned() }
    }

    fn media(&self) -> Result<MediaQueryList, ThemeError> {
        web_sys::window()
            .ok_or(ThemeError::Unavailable { what: "window" })?
            .match_media(&self.query)
            .map_err(host_err)?
            .ok_or(ThemeError::Unavailable { what: "matchMedia" })
    }
}

impl ColorSchemeSource for BrowserColorScheme {
    fn prefers_dark(&self) -> bool {
        self.media().map_or(false, |mq| mq.matches())
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<Subscription, ThemeError> {
        let media = self.media()?;
        let callback = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        });
        media
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(host_err)?;

        Ok(Subscription::new(move || {
            if let Err(err) = media.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
                log::warn!("failed to remove color scheme listener: {err:?}");
            }
        }))
    }
}

#[derive(Debug)]
pub struct BrowserDocument {
    class: String,
}

impl BrowserDocument {
    #[must_use]
    pub fn new(class: &str) -> Self {
        Self { class: class.to_owned() }
    }
}

impl DocumentFlag for BrowserDocument {
    fn set_dark(&self, dark: bool) -> Result<(), ThemeError> {
        let root = document()?
            .document_element()
            .ok_or(ThemeError::Unavailable { what: "document element" })?;
        root.class_list()
            .toggle_with_force(&self.class, dark)
            .map(|_| ())
            .map_err(host_err)
    }
}

impl ThemeEnv {
    /// Host handles backed by the current browser window.
    #[must_use]
    pub fn browser(config: &ThemeConfig) -> Self {
        Self {
            cookies: Rc::new(BrowserCookieJar),
            local: Rc::new(BrowserLocalStorage),
            scheme: Rc::new(BrowserColorScheme::new(&config.media_query)),
            document: Rc::new(BrowserDocument::new(&config.dark_class)),
        }
    }
}
