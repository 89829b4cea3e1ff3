use dioxus::prelude::*;

use crate::core::meta::{HeadTag, MetaAttr};

/// Pushes resolved head tags into the document head.
#[component]
pub fn SiteHead(tags: Vec<HeadTag>) -> Element {
    rsx! {
        {tags.into_iter().map(render_tag)}
    }
}

fn render_tag(tag: HeadTag) -> Element {
    let key = tag.key();
    match tag {
        HeadTag::Title(title) => rsx! {
            document::Title { key: "{key}", "{title}" }
        },
        HeadTag::Meta {
            attr: MetaAttr::Name,
            key: name,
            content,
        } => rsx! {
            document::Meta { key: "{key}", name: name.to_string(), content }
        },
        HeadTag::Meta {
            attr: MetaAttr::Property,
            key: property,
            content,
        } => rsx! {
            document::Meta { key: "{key}", property: property.to_string(), content }
        },
        HeadTag::Link { rel, href } => rsx! {
            document::Link { key: "{key}", rel: rel.to_string(), href }
        },
    }
}
