use crate::core::{fragment_target, ScrollConfig};
use crate::dom;
use web_sys as web;

fn scroll_to_fragment(document: &web::Document, href: &str) {
    let Some(target) = fragment_target(href).and_then(|id| document.get_element_by_id(id)) else {
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Smooth-scroll every in-page anchor. Returns the number of anchors wired.
pub fn wire_smooth_scroll(document: &web::Document, cfg: &ScrollConfig) -> usize {
    let anchors = dom::query_all(document, &cfg.anchor_selector);
    for anchor in &anchors {
        let doc = document.clone();
        let anchor_for_handler = anchor.clone();
        dom::add_listener(anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            // href is read at click time; markup may rewrite it after load
            if let Some(href) = anchor_for_handler.get_attribute("href") {
                scroll_to_fragment(&doc, &href);
            }
        });
    }
    anchors.len()
}
