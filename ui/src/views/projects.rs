use dioxus::prelude::*;

use crate::components::Container;
use crate::core::meta::PageMetaOverrides;
use crate::t;

#[component]
pub fn Projects() -> Element {
    let meta = PageMetaOverrides::titled("Projects – Manu Arora")
        .with_description("Things I have built and shipped.");

    rsx! {
        Container { meta,
            section { class: "page page-projects",
                h1 { {t!("projects-title")} }
                p { {t!("projects-intro")} }
            }
        }
    }
}
