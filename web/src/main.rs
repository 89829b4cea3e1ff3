use std::rc::Rc;

use dioxus::prelude::*;

use ui::core::hover::HighlightMotion;
use ui::core::theme::ThemeStore;
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

fn current_path() -> String {
    consume_context::<RouterContext>().current::<Route>().to_string()
}

fn router_link(href: &'static str, children: Element) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: href.to_string(),
        {children}
    })
}

#[cfg(target_arch = "wasm32")]
fn theme_store() -> Rc<dyn ThemeStore> {
    Rc::new(ui::core::theme::LocalStorageThemeStore::default())
}

#[cfg(not(target_arch = "wasm32"))]
fn theme_store() -> Rc<dyn ThemeStore> {
    Rc::new(ui::core::theme::MemoryThemeStore::default())
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
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
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}
