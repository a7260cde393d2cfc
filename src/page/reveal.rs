use crate::constants::{REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;
use crate::events::visibility::ViewportObserver;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cards and headers start hidden and shifted down, then fade in once.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let elements: Vec<web::HtmlElement> = dom::query_all_in_document(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }
    let observer = ViewportObserver::new(
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let target = entry.target();
            if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                dom::set_style(el, "opacity", "1");
                dom::set_style(el, "transform", "translateY(0)");
            }
            observer.unobserve(&target);
        },
    )?;

    let offset = format!("translateY({REVEAL_OFFSET_PX}px)");
    for el in &elements {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", &offset);
        dom::set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(el);
    }
    observer.forget();
    Ok(())
}
