use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::hover::{HighlightTrack, LinkSlot};
use crate::core::nav::NAV_LINKS;
use crate::i18n;
use crate::providers::{use_highlight_motion, use_router_bridge};

/// The nav entries with a single hover highlight that slides between them.
///
/// Entries are measured once mounted and again on hover, so the highlight
/// follows layout changes. Without measurements (SSR) it stays hidden.
#[component]
pub fn NavLinks() -> Element {
    let mut track = use_signal(HighlightTrack::default);
    let mut list = use_signal(|| None::<Rc<MountedData>>);
    let mut items = use_signal(|| vec![None::<Rc<MountedData>>; NAV_LINKS.len()]);
    let extents = use_signal(|| vec![None::<LinkSlot>; NAV_LINKS.len()]);
    let motion = use_highlight_motion();
    let router = use_router_bridge();

    let frame = track.read().frame(&extents.read());

    rsx! {
        div {
            class: "navbar__links",
            onmounted: move |evt: MountedEvent| async move {
                let data = evt.data();
                list.set(Some(data.clone()));
                for index in 0..NAV_LINKS.len() {
                    let item = items.peek().get(index).cloned().flatten();
                    if let Some(slot) = measure(Some(data.clone()), item).await {
                        record(extents, index, slot);
                    }
                }
            },

            span {
                class: highlight_class(frame.visible),
                "data-layout-id": motion.layout_id,
                style: motion.style(&frame),
                aria_hidden: "true",
            }

            for (index, link) in NAV_LINKS.iter().enumerate() {
                span {
                    key: "{link.link}",
                    class: "navbar__item",
                    onmounted: move |evt: MountedEvent| async move {
                        let data = evt.data();
                        if let Some(entry) = items.write().get_mut(index) {
                            *entry = Some(data.clone());
                        }
                        let container = list.peek().clone();
                        if let Some(slot) = measure(container, Some(data)).await {
                            record(extents, index, slot);
                        }
                    },
                    onmouseenter: move |_| async move {
                        track.with_mut(|t| t.enter(index));
                        let container = list.peek().clone();
                        let item = items.peek().get(index).cloned().flatten();
                        if let Some(slot) = measure(container, item).await {
                            record(extents, index, slot);
                        }
                    },
                    onmouseleave: move |_| track.with_mut(|t| t.leave()),

                    {(router.link)(link.href(), rsx! {
                        span { class: "navbar__label", {i18n::label(link.label_id)} }
                    })}
                }
            }
        }
    }
}

/// Position of `item` relative to `container`, once both are mounted.
async fn measure(
    container: Option<Rc<MountedData>>,
    item: Option<Rc<MountedData>>,
) -> Option<LinkSlot> {
    let (container, item) = (container?, item?);
    let origin = container.get_client_rect().await.ok()?;
    let rect = item.get_client_rect().await.ok()?;
    Some(LinkSlot {
        left: rect.origin.x - origin.origin.x,
        width: rect.size.width,
    })
}

fn record(mut extents: Signal<Vec<Option<LinkSlot>>>, index: usize, slot: LinkSlot) {
    if extents.peek().get(index).copied().flatten() == Some(slot) {
        return;
    }
    if let Some(entry) = extents.write().get_mut(index) {
        *entry = Some(slot);
    }
}

fn highlight_class(visible: bool) -> &'static str {
    if visible {
        "navbar__highlight navbar__highlight--active"
    } else {
        "navbar__highlight"
    }
}
