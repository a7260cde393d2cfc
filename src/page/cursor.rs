use crate::constants::{
    CURSOR_DOT_HALF_PX, CURSOR_DOT_SMOOTHING, CURSOR_FOLLOWER_HALF_PX, CURSOR_FOLLOWER_SMOOTHING,
    CURSOR_HOVER_BACKGROUND, CURSOR_HOVER_SELECTOR, CURSOR_REST_BACKGROUND,
};
use crate::core::approach;
use crate::dom::{self, EventListener};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Trail {
    dot: web::HtmlElement,
    follower: web::HtmlElement,
    pointer: Cell<Vec2>,
    dot_pos: Cell<Vec2>,
    follower_pos: Cell<Vec2>,
    hovering: Cell<bool>,
    running: Cell<bool>,
}

impl Trail {
    fn set_hovering(&self, on: bool) {
        self.hovering.set(on);
        let background = if on {
            CURSOR_HOVER_BACKGROUND
        } else {
            CURSOR_REST_BACKGROUND
        };
        dom::set_style(&self.dot, "background", background);
    }

    fn step(&self) {
        let target = self.pointer.get();
        let dot = approach(self.dot_pos.get(), target, CURSOR_DOT_SMOOTHING);
        let follower = approach(self.follower_pos.get(), target, CURSOR_FOLLOWER_SMOOTHING);
        self.dot_pos.set(dot);
        self.follower_pos.set(follower);

        let scale = if self.hovering.get() { " scale(1.5)" } else { "" };
        dom::set_style(
            &self.dot,
            "transform",
            &format!(
                "translate({}px, {}px){scale}",
                dot.x - CURSOR_DOT_HALF_PX,
                dot.y - CURSOR_DOT_HALF_PX
            ),
        );
        dom::set_style(
            &self.follower,
            "transform",
            &format!(
                "translate({}px, {}px)",
                follower.x - CURSOR_FOLLOWER_HALF_PX,
                follower.y - CURSOR_FOLLOWER_HALF_PX
            ),
        );
    }
}

fn create_div(document: &web::Document, class: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    document.body()?.append_child(&el).ok()?;
    el.dyn_into::<web::HtmlElement>().ok()
}

fn tab_hidden(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Hidden
}

/// Two smoothed elements trail the pointer. Updates pause while the tab is
/// hidden and resume when it is shown again.
pub fn init(document: &web::Document) {
    let (Some(dot), Some(follower)) = (
        create_div(document, "custom-cursor"),
        create_div(document, "custom-cursor-follower"),
    ) else {
        return;
    };
    let trail = Rc::new(Trail {
        dot,
        follower,
        pointer: Cell::new(Vec2::ZERO),
        dot_pos: Cell::new(Vec2::ZERO),
        follower_pos: Cell::new(Vec2::ZERO),
        hovering: Cell::new(false),
        running: Cell::new(false),
    });

    let t = trail.clone();
    EventListener::new(document, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            t.pointer
                .set(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }
    })
    .forget();

    for el in dom::query_all_in_document::<web::Element>(document, CURSOR_HOVER_SELECTOR) {
        let t = trail.clone();
        EventListener::new(&el, "mouseenter", move |_| t.set_hovering(true)).forget();
        let t = trail.clone();
        EventListener::new(&el, "mouseleave", move |_| t.set_hovering(false)).forget();
    }

    // rAF loop; the closure holds itself for the lifetime of the page
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let t = trail.clone();
    let doc = document.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if tab_hidden(&doc) {
            t.running.set(false);
            return;
        }
        t.step();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));

    let doc = document.clone();
    let restart = tick.clone();
    let t = trail.clone();
    EventListener::new(document, "visibilitychange", move |_| {
        if !tab_hidden(&doc) && !t.running.get() {
            t.running.set(true);
            request_frame(&restart);
        }
    })
    .forget();

    trail.running.set(true);
    request_frame(&tick);
    log::info!("[cursor] custom cursor enabled");
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
