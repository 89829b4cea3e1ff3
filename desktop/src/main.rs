#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;
use std::rc::Rc;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::core::hover::HighlightMotion;
use ui::core::theme::{FileThemeStore, MemoryThemeStore, ThemeStore};
use ui::providers::{use_theme_provider, RouterBridge};
use ui::views::{Blog, Dashboard, Home, Projects, Snippets};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/blog")]
    Blog {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/snippets")]
    Snippets {},
    #[route("/projects")]
    Projects {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme from ui/assets/theme/main.css; desktop has no assets of its own.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Manu Arora – v{}", env!("CARGO_PKG_VERSION"))),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    LaunchBuilder::server().launch(App);
}

fn current_path() -> String {
    consume_context::<RouterContext>().current::<Route>().to_string()
}

fn router_link(href: &'static str, children: Element) -> Element {
    rsx!(Link { class: "navbar__link", to: href.to_string(), {children} })
}

fn theme_store() -> Rc<dyn ThemeStore> {
    match FileThemeStore::in_config_dir() {
        Some(store) => {
            tracing::debug!("theme preference at {}", store.path().display());
            Rc::new(store)
        }
        None => {
            tracing::warn!("no config directory; theme preference will not be kept");
            Rc::new(MemoryThemeStore::default())
        }
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    use_theme_provider(theme_store);
    use_context_provider(|| RouterBridge {
        current_path,
        link: router_link,
    });
    use_context_provider(HighlightMotion::standard);

    rsx! {
        // Always inline the shared theme so packaged builds need no external file.
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
