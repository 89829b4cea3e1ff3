use dioxus::prelude::*;

use crate::components::Container;
use crate::core::meta::PageMetaOverrides;
use crate::t;

#[component]
pub fn Snippets() -> Element {
    let meta = PageMetaOverrides::titled("Code Snippets – Manu Arora")
        .with_description("A collection of code snippets I have used and saved.");

    rsx! {
        Container { meta,
            section { class: "page page-snippets",
                h1 { {t!("snippets-title")} }
                p { {t!("snippets-intro")} }
            }
        }
    }
}
