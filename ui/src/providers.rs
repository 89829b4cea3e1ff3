//! Capabilities the shell consumes from its host: theme state, routing and
//! highlight timing. Platforms install them as context; every hook falls back
//! to a self-contained default so components also render on their own.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::site;
use crate::core::hover::HighlightMotion;
use crate::core::nav::HOME_PATH;
use crate::core::theme::{MemoryThemeStore, ThemeMode, ThemeStore};

/// Current display mode plus the store that remembers it.
#[derive(Clone)]
pub struct ThemeProvider {
    mode: Signal<ThemeMode>,
    store: Rc<dyn ThemeStore>,
}

impl ThemeProvider {
    /// Must be called inside a component scope; the mode lives in a signal.
    pub fn new(store: Rc<dyn ThemeStore>, fallback: ThemeMode) -> Self {
        let initial = store.load().unwrap_or(fallback);
        Self {
            mode: Signal::new(initial),
            store,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// Persists then publishes `mode`. A failed write still switches the
    /// on-screen mode.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if let Err(err) = self.store.save(mode) {
            tracing::warn!("could not persist theme `{mode}`: {err}");
        }
        self.mode.set(mode);
    }

    pub fn flip(&mut self) {
        let next = self.mode.peek().flipped();
        tracing::debug!("theme -> {next}");
        self.set_mode(next);
    }
}

/// Installs a theme provider backed by `store` for the subtree.
pub fn use_theme_provider(store: impl FnOnce() -> Rc<dyn ThemeStore>) -> ThemeProvider {
    use_context_provider(|| ThemeProvider::new(store(), site().theme))
}

/// The injected theme provider. Without one, an in-memory provider is created
/// and shared with this component's subtree.
pub fn use_theme() -> ThemeProvider {
    let injected = try_use_context::<ThemeProvider>();
    use_hook(move || {
        injected.unwrap_or_else(|| {
            provide_context(ThemeProvider::new(
                Rc::new(MemoryThemeStore::default()),
                site().theme,
            ))
        })
    })
}

/// Routing hooks supplied by the platform crate, which owns the `Route` enum.
#[derive(Clone, Copy)]
pub struct RouterBridge {
    /// Path of the route being rendered, e.g. `/blog`.
    pub current_path: fn() -> String,
    /// Wraps `children` in a router-aware link to `href`.
    pub link: fn(href: &'static str, children: Element) -> Element,
}

impl RouterBridge {
    /// No router: everything is rendered at `/` with plain anchors.
    pub fn detached() -> Self {
        Self {
            current_path: || HOME_PATH.to_string(),
            link: plain_anchor,
        }
    }
}

fn plain_anchor(href: &'static str, children: Element) -> Element {
    rsx! {
        a { class: "navbar__link", href, {children} }
    }
}

pub fn use_router_bridge() -> RouterBridge {
    try_use_context::<RouterBridge>().unwrap_or_else(RouterBridge::detached)
}

pub fn use_highlight_motion() -> HighlightMotion {
    try_use_context::<HighlightMotion>().unwrap_or_default()
}
