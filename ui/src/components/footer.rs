use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::config::site;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let config = site();
    let year = OffsetDateTime::now_utc().year();
    let rights = t!(
        "footer-rights",
        year = year,
        name = config.identity.site_name.as_str()
    );

    rsx! {
        footer { class: "footer",
            if !config.footer.is_empty() {
                div { class: "footer__links", aria_label: t!("footer-elsewhere"),
                    for link in config.footer.iter() {
                        a {
                            key: "{link.href}",
                            class: "footer__link",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
            p { class: "footer__rights", "{rights}" }
        }
    }
}
