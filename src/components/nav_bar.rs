//! Fixed top navigation with section anchors and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::data::{PROFILE, SECTIONS};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <a href="#hero" class="nav-bar__brand">{PROFILE.name}</a>
            <ul class="nav-bar__links">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a href=format!("#{}", section.id)>{section.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ThemeToggle/>
        </nav>
    }
}
