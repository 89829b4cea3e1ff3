use dioxus::prelude::*;

use crate::components::Container;
use crate::core::meta::PageMetaOverrides;
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let meta = PageMetaOverrides::titled("Dashboard – Manu Arora")
        .with_description("My personal dashboard, built with Rust and Dioxus.");

    rsx! {
        Container { meta,
            section { class: "page page-dashboard",
                h1 { {t!("dashboard-title")} }
                p { {t!("dashboard-intro")} }
            }
        }
    }
}
