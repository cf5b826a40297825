//! Button that flips between light and dark themes.

use leptos::prelude::*;

use crate::state::theme::use_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = theme.is_dark();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.toggle_theme()
            title=move || if is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            aria-pressed=move || is_dark.get().to_string()
        >
            {move || if is_dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
