use dioxus::prelude::*;

use crate::components::{Footer, Navbar, SiteHead};
use crate::config::site;
use crate::core::meta::{head_tags, PageMetaOverrides};
use crate::core::theme::ThemeMode;
use crate::providers::{use_router_bridge, use_theme};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");
const SHELL_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/shell.css"
));

/// Page shell: head tags, navbar, the page's content and the footer.
///
/// `meta` overrides individual fields of the site's default metadata; the
/// canonical URL comes from the platform's current route.
#[component]
pub fn Container(#[props(default)] meta: PageMetaOverrides, children: Element) -> Element {
    let theme = use_theme();
    let router = use_router_bridge();

    let mode = theme.mode();
    let path = (router.current_path)();
    let config = site();
    let page = config.page_defaults().merge(&meta);
    let tags = head_tags(&page, &config.identity, &path);

    tracing::trace!(path = %path, mode = %mode, "render container");

    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SHELL_CSS_INLINE}" }
        }

        SiteHead { tags }

        div { class: frame_class(mode), "data-theme": mode.as_str(),
            Navbar {}
            main { id: "skip", class: "frame__main",
                {children}
                Footer {}
            }
        }
    }
}

/// Background/text classes for the outer frame.
pub fn frame_class(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "frame frame--light",
        ThemeMode::Dark => "frame frame--dark",
    }
}
