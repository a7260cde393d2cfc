// Host-side tests for the page behaviour decisions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod page {
    include!("../src/core/page.rs");
}

use page::*;

const SECTIONS: [(&str, f64); 5] = [
    ("home", 0.0),
    ("importance", 900.0),
    ("pipeline", 1800.0),
    ("features", 2700.0),
    ("contact", 3600.0),
];

#[test]
fn navbar_and_scroll_button_thresholds() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(50.0));
    assert!(navbar_scrolled(51.0));
    assert!(!show_scroll_top(300.0));
    assert!(show_scroll_top(301.0));
}

#[test]
fn home_is_active_near_the_top() {
    assert_eq!(active_section(&SECTIONS, 0.0, 80.0), Some("home"));
    assert_eq!(active_section(&SECTIONS, 399.0, 80.0), Some("home"));
}

#[test]
fn active_section_accounts_for_the_navbar() {
    // 900 - (80 + 50) = 770
    assert_eq!(active_section(&SECTIONS, 769.0, 80.0), Some("home"));
    assert_eq!(active_section(&SECTIONS, 770.0, 80.0), Some("importance"));
    assert_eq!(active_section(&SECTIONS, 2600.0, 80.0), Some("features"));
    assert_eq!(active_section(&SECTIONS, 10_000.0, 80.0), Some("contact"));
}

#[test]
fn no_section_is_active_when_none_has_been_reached() {
    let sections = [("importance", 5000.0)];
    assert_eq!(active_section(&sections, 1000.0, 80.0), None);
}

#[test]
fn anchor_target_stops_below_the_navbar() {
    assert_eq!(anchor_scroll_target(900.0, 80.0), 820.0);
    assert_eq!(anchor_scroll_target(40.0, 80.0), 0.0);
}

#[test]
fn stat_counter_reaches_its_label_in_fifty_steps() {
    let mut counter = StatCounter::parse("95%").unwrap();
    assert_eq!(counter.label(), "0%");
    let mut last = String::new();
    let mut steps = 0u32;
    while !counter.is_done() {
        last = counter.step();
        steps += 1;
        assert!(steps <= STAT_COUNTER_STEPS);
    }
    assert_eq!(steps, STAT_COUNTER_STEPS);
    assert_eq!(last, "95%");
}

#[test]
fn stat_counter_keeps_its_suffix() {
    let mut millions = StatCounter::parse("10M").unwrap();
    assert_eq!(millions.step(), "0M");
    let mut plain = StatCounter::parse("1,200").unwrap();
    while !plain.is_done() {
        plain.step();
    }
    assert_eq!(plain.label(), "1200");
}

#[test]
fn stat_counter_labels_never_decrease() {
    let mut counter = StatCounter::parse("37").unwrap();
    let mut previous = 0u64;
    while !counter.is_done() {
        let value: u64 = counter.step().parse().unwrap();
        assert!(value >= previous);
        previous = value;
    }
    assert_eq!(previous, 37);
}

#[test]
fn labels_without_digits_are_left_alone() {
    assert!(StatCounter::parse("many").is_none());
    assert!(StatCounter::parse("").is_none());
}

#[test]
fn zero_target_finishes_immediately() {
    let mut counter = StatCounter::parse("0%").unwrap();
    assert!(counter.is_done());
    assert_eq!(counter.step(), "0%");
}
