//! Landing-page behaviours around the helix. Each one is wired once and
//! skips silently when its elements are absent.

use crate::core::{CursorProfile, WidgetConfig};
use web_sys as web;

mod contact;
mod cursor;
mod nav;
mod preloader;
mod responsive;
mod reveal;
mod scroll;
mod sections;

pub fn init(document: &web::Document, config: &WidgetConfig) {
    preloader::init(document);
    nav::init(document, config.nav);
    responsive::init(document);
    scroll::init_smooth_scroll(document);
    scroll::init_scroll_to_top(document);
    contact::init(document);
    if let Err(e) = reveal::init(document) {
        log::error!("[page] scroll reveal: {:?}", e);
    }
    if let Err(e) = sections::init(document) {
        log::error!("[page] lazy sections: {:?}", e);
    }
    if config.cursor == CursorProfile::Custom {
        cursor::init(document);
    }
}
