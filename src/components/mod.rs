//! Presentational components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render static content from `data` and read theme state only
//! through the `ThemeContext` provided by the application root.

pub mod nav_bar;
pub mod sections;
pub mod theme_toggle;
