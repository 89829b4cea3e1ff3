use dioxus::prelude::*;

use crate::core::theme::{theme_icon, MountState};
use crate::providers::use_theme;
use crate::t;

/// Light/dark switch. The icon stays hidden until the first client render has
/// happened, since the stored mode is unknown before then.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let mut mounted = use_signal(MountState::default);

    use_effect(move || mounted.set(MountState::Mounted));

    let icon = theme_icon(mounted(), theme.mode());

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            aria_label: t!("toggle-dark-mode"),
            onclick: move |_| theme.flip(),

            if let Some(icon) = icon {
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    view_box: "0 0 24 24",
                    fill: "currentColor",
                    stroke: "currentColor",
                    class: "theme-toggle__icon",
                    "data-icon": icon.name(),
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: icon.path(),
                    }
                }
            }
        }
    }
}
