use crate::constants::{ORIENTATION_SETTLE_MS, RESIZE_DEBOUNCE_MS};
use crate::core::{responsive_container_size, responsive_font_size, DEFAULT_CONTAINER_SELECTOR};
use crate::dom::{self, Debounce, EventListener};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Size the helix container and the mobile font variable for the viewport.
fn apply(document: &web::Document) {
    let viewport = dom::viewport_width();
    if let Some(container) = dom::query(document, DEFAULT_CONTAINER_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let (w, h) = responsive_container_size(viewport);
        dom::set_style(&container, "width", &format!("{w}px"));
        dom::set_style(&container, "height", &format!("{h}px"));
    }
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        dom::set_style(&root, "--font-size-mobile", responsive_font_size(viewport));
    }
}

pub fn init(document: &web::Document) {
    apply(document);
    let Some(window) = web::window() else {
        return;
    };

    let debounce = Debounce::default();
    let doc = document.clone();
    EventListener::new(&window, "resize", move |_| {
        let doc = doc.clone();
        debounce.call(RESIZE_DEBOUNCE_MS, move || apply(&doc));
    })
    .forget();

    let doc = document.clone();
    EventListener::new(&window, "orientationchange", move |_| {
        let doc = doc.clone();
        dom::set_timeout(ORIENTATION_SETTLE_MS, move || apply(&doc));
    })
    .forget();
}
