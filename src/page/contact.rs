use crate::constants::CONTACT_ACK_MESSAGE;
use crate::dom::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Submissions are acknowledged locally; nothing leaves the page.
pub fn init(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let target = form.clone();
    EventListener::new(&form, "submit", move |ev| {
        ev.prevent_default();
        if let Some(w) = web::window() {
            _ = w.alert_with_message(CONTACT_ACK_MESSAGE);
        }
        target.reset();
        log::info!("[contact] form acknowledged");
    })
    .forget();
}
