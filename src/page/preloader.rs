use crate::constants::PRELOADER_HIDE_DELAY_MS;
use crate::dom;
use web_sys as web;

pub fn init(document: &web::Document) {
    let Some(preloader) = document.get_element_by_id("preloader") else {
        return;
    };
    let body = document.body();
    dom::set_timeout(PRELOADER_HIDE_DELAY_MS, move || {
        dom::set_class(&preloader, "hidden", true);
        if let Some(body) = &body {
            dom::set_class(body, "loaded", true);
        }
        preloader.remove();
    });
}
