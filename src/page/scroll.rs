use crate::core::page::{anchor_scroll_target, show_scroll_top};
use crate::dom::{self, EventListener};
use wasm_bindgen::JsCast;
use web_sys as web;

fn navbar_height(document: &web::Document) -> f64 {
    dom::query(document, ".navbar")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|n| n.offset_height() as f64)
        .unwrap_or(0.0)
}

/// In-page anchors scroll smoothly and stop just below the fixed navbar.
pub fn init_smooth_scroll(document: &web::Document) {
    let anchors: Vec<web::Element> = dom::query_all_in_document(document, "a[href^=\"#\"]");
    for anchor in anchors {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector
            if href.len() < 2 {
                return;
            }
            let Some(target) = dom::query(&doc, &href)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            let top = anchor_scroll_target(target.offset_top() as f64, navbar_height(&doc));
            dom::smooth_scroll_to(top);
        });
    }
}

pub fn init_scroll_to_top(document: &web::Document) {
    let Some(button) = document.get_element_by_id("scrollToTop") else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let shown = button.clone();
    EventListener::new(&window, "scroll", move |_| {
        dom::set_class(&shown, "show", show_scroll_top(dom::scroll_y()));
    })
    .forget();
    dom::add_click_listener(&button, |_| dom::smooth_scroll_to(0.0));
}
