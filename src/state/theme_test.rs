use leptos::prelude::*;

use super::*;
use crate::theme::memory::MemoryHost;

// =============================================================
// ThemeContext
// =============================================================

#[test]
fn context_publishes_initial_os_value() {
    let owner = Owner::new();
    owner.with(|| {
        let host = MemoryHost::new(true);
        let ctx = ThemeContext::new(host.env(), ThemeConfig::default());
        assert!(ctx.is_dark().get_untracked());
    });
}

#[test]
fn toggle_updates_signal_and_storage() {
    let owner = Owner::new();
    owner.with(|| {
        let host = MemoryHost::new(false);
        let ctx = ThemeContext::new(host.env(), ThemeConfig::default());
        ctx.toggle_theme();
        assert!(ctx.is_dark().get_untracked());
        assert_eq!(host.cookies.value("theme").as_deref(), Some("dark"));
    });
}

#[test]
fn os_change_reaches_signal_until_shutdown() {
    let owner = Owner::new();
    owner.with(|| {
        let host = MemoryHost::new(false);
        let ctx = ThemeContext::new(host.env(), ThemeConfig::default());

        host.scheme.set_prefers_dark(true);
        assert!(ctx.is_dark().get_untracked());

        ctx.shutdown();
        assert_eq!(host.scheme.listener_count(), 0);
        host.scheme.set_prefers_dark(false);
        assert!(ctx.is_dark().get_untracked());
    });
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let owner = Owner::new();
    owner.with(|| {
        let host = MemoryHost::new(false);
        let cfg = ThemeConfig { cookie_name: "bad name".into(), ..ThemeConfig::default() };
        let ctx = ThemeContext::new(host.env(), cfg);
        ctx.toggle_theme();
        assert_eq!(host.cookies.value("theme").as_deref(), Some("dark"));
    });
}

#[test]
fn provided_context_is_retrievable() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = provide_theme_context(ThemeConfig::default());
        let found = use_theme();
        assert_eq!(found.is_dark().get_untracked(), ctx.is_dark().get_untracked());
    });
}
