// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_constants_are_positive() {
    assert!(HELIX_RADIUS > 0.0);
    assert!(HELIX_HEIGHT > 0.0);
    assert!(HELIX_TURNS > 0.0);
    assert!(HELIX_SAMPLES_PER_TURN > 0);
    assert!(HELIX_CROSS_LINK_STRIDE > 0);
    assert!(SPHERE_SEGMENTS >= 3 && SPHERE_RINGS >= 2);
    assert!(LINK_SEGMENTS >= 3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn primitives_are_small_relative_to_the_helix() {
    // Neighbouring spheres on a strand should not overlap
    let spacing = std::f32::consts::TAU * HELIX_RADIUS / HELIX_SAMPLES_PER_TURN as f32;
    assert!(2.0 * SPHERE_RADIUS < spacing);
    assert!(LINK_RADIUS < SPHERE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_amplitudes_are_gentle() {
    assert!(ROTATION_PER_FRAME > 0.0 && ROTATION_PER_FRAME < 0.1);
    assert!(BOB_AMPLITUDE > 0.0 && BOB_AMPLITUDE < HELIX_HEIGHT * 0.1);
    assert!(SPHERE_PULSE_AMPLITUDE > 0.0 && SPHERE_PULSE_AMPLITUDE < 1.0);
    assert!(LINK_SCALE_AMPLITUDE > 0.0 && LINK_SCALE_AMPLITUDE < 1.0);
    // Link opacity must stay within [0, 1] over a full pulse
    assert!(LINK_OPACITY_BASE - LINK_OPACITY_AMPLITUDE >= 0.0);
    assert!(LINK_OPACITY_BASE + LINK_OPACITY_AMPLITUDE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_valid_filter_gains() {
    for k in [TILT_SMOOTHING, CURSOR_DOT_SMOOTHING, CURSOR_FOLLOWER_SMOOTHING] {
        assert!(k > 0.0 && k <= 1.0);
    }
    // The follower trails the dot
    assert!(CURSOR_FOLLOWER_SMOOTHING < CURSOR_DOT_SMOOTHING);
    assert!(MAX_TILT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_budget_fits_inside_the_throttled_interval() {
    assert!(TARGET_FPS > 0.0);
    let interval_ms = 1000.0 / TARGET_FPS as f64;
    assert!(FRAME_BUDGET_MS < interval_ms);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_settings_are_in_range() {
    assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
    assert!((0.0..=1.0).contains(&LAZY_SECTION_THRESHOLD));
    assert!(REVEAL_OFFSET_PX > 0.0);
    assert!(RESIZE_DEBOUNCE_MS > 0 && PRELOADER_HIDE_DELAY_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_helix() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    let half_height_visible = CAMERA_Z * (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
    assert!(half_height_visible > HELIX_HEIGHT * 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sample_cap_admits_the_default_helix() {
    let default_total = (HELIX_TURNS * HELIX_SAMPLES_PER_TURN as f32).round() as usize;
    assert!(MAX_TOTAL_SAMPLES >= default_total);
}
