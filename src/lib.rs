#![cfg(target_arch = "wasm32")]
use crate::core::HelixError;
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;
mod render;
mod widget;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("phylodive-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let (config, container) = widget::load_config(&document);

    page::init(&document, &config);

    match widget::HelixWidget::mount(container, config) {
        Ok(_widget) => {}
        Err(e) if e.downcast_ref::<HelixError>().is_some() => {
            log::warn!("[helix] skipped: {e}");
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
