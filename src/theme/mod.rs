//! Light/dark theme resolution and persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three signals compete: an explicit toggle, a stored choice (cookie, then
//! `localStorage`) and the OS `prefers-color-scheme` query. The resolver
//! reconciles them and mirrors the outcome to a root-element class and both
//! stores. Components only ever see `is_dark` and `toggle_theme`.

pub mod backend;
#[cfg(feature = "csr")]
pub mod browser;
pub mod controller;
pub mod cookie;
pub mod error;
pub mod memory;
pub mod preference;
pub mod resolver;

pub use backend::ThemeEnv;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use preference::ThemePreference;
pub use resolver::{ThemeMode, ThemeResolver};
