//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ThemeConfig;
use crate::pages::home::HomePage;
use crate::state::theme::provide_theme_context;

/// Root application component.
///
/// Owns the theme context for the lifetime of the page; its listener is
/// released when this owner is cleaned up.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme_context(ThemeConfig::default());

    view! {
        <Title text=crate::data::PROFILE.name/>
        <HomePage/>
    }
}
