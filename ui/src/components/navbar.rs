use dioxus::prelude::*;

use crate::components::{NavLinks, ThemeToggle};
use crate::t;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            a { href: "#skip", class: "navbar__skip", {t!("skip-to-content")} }
            ThemeToggle {}
            NavLinks {}
        }
    }
}
