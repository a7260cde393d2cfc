use crate::constants::{LAZY_SECTION_ROOT_MARGIN, LAZY_SECTION_SELECTOR, LAZY_SECTION_THRESHOLD};
use crate::core::page::{
    StatCounter, PIPELINE_ARROW_EXTRA_MS, PIPELINE_STEP_DELAY_MS, STAT_COUNTER_INTERVAL_MS,
};
use crate::dom::{self, EventListener};
use crate::events::visibility::ViewportObserver;
use web_sys as web;

/// Sections other than the hero get `loaded` the first time they scroll into
/// view, and run their entrance effect once.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let sections: Vec<web::Element> = dom::query_all_in_document(document, LAZY_SECTION_SELECTOR);
    if sections.is_empty() {
        return Ok(());
    }
    let observer = ViewportObserver::new(
        LAZY_SECTION_THRESHOLD,
        Some(LAZY_SECTION_ROOT_MARGIN),
        |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let section = entry.target();
            dom::set_class(&section, "loaded", true);
            match section.id().as_str() {
                "importance" => run_stat_counters(&section),
                "pipeline" => stagger_pipeline(&section),
                "features" => wire_feature_cards(&section),
                _ => {}
            }
            observer.unobserve(&section);
        },
    )?;
    for section in &sections {
        observer.observe(section);
    }
    observer.forget();
    Ok(())
}

fn run_stat_counters(section: &web::Element) {
    for stat in dom::query_all::<web::Element>(section, ".stat-number") {
        let label = stat.text_content().unwrap_or_default();
        if let Some(counter) = StatCounter::parse(&label) {
            count_up(stat, counter);
        }
    }
}

fn count_up(stat: web::Element, counter: StatCounter) {
    dom::set_timeout(STAT_COUNTER_INTERVAL_MS, move || {
        let mut counter = counter;
        stat.set_text_content(Some(&counter.step()));
        if !counter.is_done() {
            count_up(stat, counter);
        }
    });
}

fn stagger_pipeline(section: &web::Element) {
    let steps: Vec<web::HtmlElement> = dom::query_all(section, ".pipeline-step");
    for (i, step) in steps.into_iter().enumerate() {
        dom::set_timeout(i as i32 * PIPELINE_STEP_DELAY_MS, move || {
            dom::set_style(&step, "opacity", "1");
            dom::set_style(&step, "transform", "translateY(0) scale(1)");
        });
    }
    let arrows: Vec<web::HtmlElement> = dom::query_all(section, ".pipeline-arrow");
    for (i, arrow) in arrows.into_iter().enumerate() {
        let delay = i as i32 * PIPELINE_STEP_DELAY_MS + PIPELINE_ARROW_EXTRA_MS;
        dom::set_timeout(delay, move || {
            dom::set_style(&arrow, "opacity", "1");
            dom::set_style(&arrow, "transform", "translateX(0)");
        });
    }
}

fn wire_feature_cards(section: &web::Element) {
    for card in dom::query_all::<web::HtmlElement>(section, ".feature-card") {
        let lifted = card.clone();
        EventListener::new(&card, "mouseenter", move |_| {
            dom::set_style(&lifted, "transform", "translateY(-10px) scale(1.02)");
        })
        .forget();
        let rested = card.clone();
        EventListener::new(&card, "mouseleave", move |_| {
            dom::set_style(&rested, "transform", "translateY(0) scale(1)");
        })
        .forget();
    }
}
