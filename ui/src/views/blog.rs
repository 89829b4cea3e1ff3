use dioxus::prelude::*;

use crate::components::Container;
use crate::core::meta::PageMetaOverrides;
use crate::t;

#[component]
pub fn Blog() -> Element {
    let meta = PageMetaOverrides::titled("Blog – Manu Arora").with_description(
        "Thoughts on the software industry, programming, tech, and my personal life.",
    );

    rsx! {
        Container { meta,
            section { class: "page page-blog",
                h1 { {t!("blog-title")} }
                p { {t!("blog-intro")} }
            }
        }
    }
}
