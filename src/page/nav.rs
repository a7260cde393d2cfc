use crate::constants::{MOBILE_NAV_MAX_WIDTH, NAV_SCROLL_THROTTLE_MS};
use crate::core::page::{active_section, navbar_scrolled};
use crate::core::NavProfile;
use crate::dom::{self, Debounce, EventListener};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct Menu {
    hamburger: web::Element,
    panel: web::Element,
    body: Option<web::HtmlElement>,
    lock_scroll: bool,
}

impl Menu {
    fn is_open(&self) -> bool {
        self.hamburger.class_list().contains("active")
    }

    fn set_open(&self, open: bool) {
        dom::set_class(&self.hamburger, "active", open);
        dom::set_class(&self.panel, "active", open);
        if self.lock_scroll {
            if let Some(body) = &self.body {
                dom::set_style(body, "overflow", if open { "hidden" } else { "" });
            }
        }
    }

    fn contains(&self, node: &web::Node) -> bool {
        self.hamburger.contains(Some(node)) || self.panel.contains(Some(node))
    }
}

pub fn init(document: &web::Document, profile: NavProfile) {
    let full = profile == NavProfile::Full;
    let links: Vec<web::Element> = dom::query_all_in_document(document, ".nav-link");

    let menu = match (dom::query(document, ".hamburger"), dom::query(document, ".nav-menu")) {
        (Some(hamburger), Some(panel)) => Some(Menu {
            hamburger,
            panel,
            body: document.body(),
            lock_scroll: full,
        }),
        _ => None,
    };

    if let Some(menu) = &menu {
        let toggle = menu.clone();
        dom::add_click_listener(&menu.hamburger, move |ev| {
            ev.stop_propagation();
            toggle.set_open(!toggle.is_open());
        });

        for link in &links {
            let m = menu.clone();
            dom::add_click_listener(link, move |_| {
                if m.is_open() {
                    m.set_open(false);
                }
            });
        }

        if dom::viewport_width() <= MOBILE_NAV_MAX_WIDTH {
            let m = menu.clone();
            dom::add_click_listener(document, move |ev| {
                let inside = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::Node>().ok())
                    .is_some_and(|node| m.contains(&node));
                if !inside && m.is_open() {
                    m.set_open(false);
                }
            });
        }
    }

    let Some(window) = web::window() else {
        return;
    };
    let navbar = dom::query(document, ".navbar");
    let doc = document.clone();
    let debounce = Debounce::default();
    EventListener::new(&window, "scroll", move |_| {
        let navbar = navbar.clone();
        let links = links.clone();
        let doc = doc.clone();
        debounce.call(NAV_SCROLL_THROTTLE_MS, move || {
            let scroll_y = dom::scroll_y();
            if let Some(nav) = &navbar {
                dom::set_class(nav, "scrolled", navbar_scrolled(scroll_y));
                if full {
                    highlight_active_link(&doc, nav, &links, scroll_y);
                }
            }
        });
    })
    .forget();
    log::info!("[nav] {:?} profile", profile);
}

fn highlight_active_link(
    document: &web::Document,
    navbar: &web::Element,
    links: &[web::Element],
    scroll_y: f64,
) {
    let navbar_height = navbar
        .dyn_ref::<web::HtmlElement>()
        .map(|n| n.offset_height() as f64)
        .unwrap_or(0.0);
    let sections: Vec<(String, f64)> =
        dom::query_all_in_document::<web::HtmlElement>(document, "section[id]")
            .into_iter()
            .map(|s| (s.id(), s.offset_top() as f64))
            .collect();
    let tops: Vec<(&str, f64)> = sections.iter().map(|(id, top)| (id.as_str(), *top)).collect();
    let current = active_section(&tops, scroll_y, navbar_height).unwrap_or("");
    let href = format!("#{current}");
    for link in links {
        let active =
            !current.is_empty() && link.get_attribute("href").as_deref() == Some(href.as_str());
        dom::set_class(link, "active", active);
    }
}
