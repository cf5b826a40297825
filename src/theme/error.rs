//! Error type shared by theme host backends and configuration.
//!
//! The resolver never surfaces these to the UI. Every storage failure is
//! folded into "no stored preference" and logged.

/// Failure reported by a theme host backend or by config validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("{what} is unavailable")]
    Unavailable { what: &'static str },
    #[error("host error: {0}")]
    Host(String),
    #[error("invalid theme preference: {0:?}")]
    InvalidPreference(String),
    #[error("invalid theme config: {0}")]
    InvalidConfig(String),
}
