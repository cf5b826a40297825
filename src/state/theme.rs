//! Theme context provided to the component tree.
//!
//! DESIGN
//! ======
//! The controller is not `Send`, so it lives in a local `StoredValue`; the
//! published `is_dark` is an ordinary signal the controller writes through
//! its change callback. The root component owns the context and releases the
//! OS listener in `on_cleanup`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::theme::ThemeController;
use crate::theme::ThemeEnv;
use crate::theme::controller::ChangeCallback;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    is_dark: RwSignal<bool>,
    controller: StoredValue<Option<ThemeController>, LocalStorage>,
}

impl ThemeContext {
    /// Start a controller over `env`. An invalid config is logged and
    /// replaced by the defaults.
    pub fn new(env: ThemeEnv, config: ThemeConfig) -> Self {
        let is_dark = RwSignal::new(false);
        let on_change: ChangeCallback = Rc::new(move |dark: bool| is_dark.set(dark));

        let controller = ThemeController::start(env.clone(), config, Rc::clone(&on_change))
            .or_else(|err| {
                log::warn!("{err}; falling back to default theme config");
                ThemeController::start(env, ThemeConfig::default(), on_change)
            })
            .map_err(|err| log::error!("theme controller unavailable: {err}"))
            .ok();

        if let Some(controller) = controller.as_ref() {
            is_dark.set(controller.is_dark());
        }
        Self { is_dark, controller: StoredValue::new_local(controller) }
    }

    /// Reactive dark flag.
    pub fn is_dark(&self) -> Signal<bool> {
        self.is_dark.into()
    }

    pub fn toggle_theme(&self) {
        self.controller.with_value(|controller| {
            if let Some(controller) = controller {
                controller.toggle_theme();
            }
        });
    }

    /// Release the OS listener. Called when the owning view is torn down.
    pub fn shutdown(&self) {
        let _ = self.controller.try_update_value(|controller| {
            if let Some(controller) = controller.as_mut() {
                controller.shutdown();
            }
        });
    }
}

fn host_env(config: &ThemeConfig) -> ThemeEnv {
    #[cfg(feature = "csr")]
    {
        ThemeEnv::browser(config)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        crate::theme::memory::MemoryHost::default().env()
    }
}

/// Create the theme context for the current owner and provide it.
pub fn provide_theme_context(config: ThemeConfig) -> ThemeContext {
    let ctx = ThemeContext::new(host_env(&config), config);
    provide_context(ctx);
    on_cleanup(move || ctx.shutdown());
    ctx
}

/// Theme context provided by the application root.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
