use dioxus::prelude::*;

use crate::components::Container;
use crate::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        Container {
            section { class: "page page-home",
                h1 { {t!("home-title")} }
                p { {t!("home-intro")} }
            }
        }
    }
}
