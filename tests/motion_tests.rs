// Host-side tests for the per-frame motion driver and pulse functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}

use constants::*;
use glam::{Vec2, Vec3};
use motion::*;
use std::collections::HashSet;

#[test]
fn zero_elapsed_leaves_state_bit_equal() {
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.set_pointer(Vec2::new(0.5, -0.25));
    assert_eq!(driver.advance(1.0, 0.033), FrameOutcome::Advanced);
    let before = *driver.state();
    assert_eq!(driver.advance(2.0, 0.0), FrameOutcome::Skipped);
    assert_eq!(*driver.state(), before);
}

#[test]
fn clock_anomalies_are_skipped() {
    let mut driver = MotionDriver::new(MotionParams::default());
    let before = *driver.state();
    for (now, elapsed) in [
        (1.0, -0.01),
        (1.0, f64::NAN),
        (1.0, f64::INFINITY),
        (f64::NAN, 0.033),
    ] {
        assert_eq!(driver.advance(now, elapsed), FrameOutcome::Skipped);
    }
    assert_eq!(*driver.state(), before);
}

#[test]
fn rotation_advances_a_fixed_step_per_accepted_frame() {
    let mut driver = MotionDriver::new(MotionParams::default());
    for i in 1..=10 {
        driver.advance(i as f64 * 0.033, 0.033);
    }
    assert!((driver.state().rotation - 10.0 * ROTATION_PER_FRAME).abs() < 1e-6);
}

#[test]
fn rotation_wraps_into_a_full_turn() {
    let params = MotionParams {
        rotation_per_frame: 4.0,
        ..MotionParams::default()
    };
    let mut driver = MotionDriver::new(params);
    for i in 1..=5 {
        driver.advance(i as f64, 1.0);
        let r = driver.state().rotation;
        assert!((0.0..std::f32::consts::TAU).contains(&r));
    }
}

#[test]
fn bob_follows_wall_clock_time() {
    let mut driver = MotionDriver::new(MotionParams::default());
    let now = 3.0_f64;
    driver.advance(now, 0.033);
    let expected = BOB_AMPLITUDE * ((now * BOB_FREQUENCY as f64).sin() as f32);
    assert!((driver.state().bob_offset - expected).abs() < 1e-6);
    assert!(driver.state().bob_offset.abs() <= BOB_AMPLITUDE);
}

#[test]
fn tilt_converges_without_overshoot() {
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.set_pointer(Vec2::new(1.0, 1.0));
    let target = driver.state().tilt_target;
    assert!(target.length() <= MAX_TILT + 1e-6);

    let mut previous_gap = (target - driver.state().tilt).length();
    for i in 1..=400 {
        driver.advance(i as f64 * 0.033, 0.033);
        let tilt = driver.state().tilt;
        // Each component approaches from one side and never passes the target
        assert!(tilt.x <= target.x + 1e-6 && tilt.y <= target.y + 1e-6);
        let gap = (target - tilt).length();
        assert!(gap <= previous_gap + 1e-7);
        previous_gap = gap;
    }
    assert!(previous_gap < 1e-4);

    // Once converged it stays converged
    for i in 401..=450 {
        driver.advance(i as f64 * 0.033, 0.033);
        assert!((target - driver.state().tilt).length() < 1e-4);
    }
}

#[test]
fn pointer_input_is_clamped() {
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.set_pointer(Vec2::new(5.0, -9.0));
    let s = driver.state();
    assert!(s.tilt_target.length() <= MAX_TILT + 1e-6);
    assert_eq!(s.parallax_target, Vec2::new(1.0, -1.0) * PARALLAX_PER_POINTER);
}

#[test]
fn pointer_axes_map_to_pitch_and_yaw() {
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.set_pointer(Vec2::new(0.5, 0.0));
    assert_eq!(driver.state().tilt_target, Vec2::new(0.0, 0.5 * TILT_PER_POINTER));
    driver.set_pointer(Vec2::new(0.0, -0.5));
    assert_eq!(driver.state().tilt_target, Vec2::new(-0.5 * TILT_PER_POINTER, 0.0));
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.set_pointer(Vec2::new(0.2, 0.2));
    let before = *driver.state();
    driver.set_pointer(Vec2::new(f32::NAN, 0.0));
    assert_eq!(*driver.state(), before);
}

#[test]
fn clearing_the_pointer_eases_back_to_neutral() {
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.set_pointer(Vec2::new(1.0, 0.0));
    for i in 1..=50 {
        driver.advance(i as f64 * 0.033, 0.033);
    }
    assert!(driver.state().tilt.length() > 0.0);
    driver.clear_pointer();
    for i in 51..=600 {
        driver.advance(i as f64 * 0.033, 0.033);
    }
    assert!(driver.state().tilt.length() < 1e-4);
    assert!(driver.state().parallax.length() < 1e-3);
}

#[test]
fn camera_eye_follows_parallax() {
    let mut driver = MotionDriver::new(MotionParams::default());
    assert_eq!(driver.camera_eye(8.0), Vec3::new(0.0, 0.0, 8.0));
    driver.set_pointer(Vec2::new(1.0, 0.0));
    driver.advance(1.0, 0.033);
    let eye = driver.camera_eye(8.0);
    assert!(eye.x > 0.0 && eye.y == 0.0 && eye.z == 8.0);
}

#[test]
fn sphere_phases_are_distinct_across_indices_and_strands() {
    let params = MotionParams::default();
    let mut seen = HashSet::new();
    for strand in [Strand::A, Strand::B] {
        for i in 0..128 {
            let phase = sphere_phase(&params, strand, i, 1.25);
            assert!(seen.insert(phase.to_bits()), "duplicate phase at {i}");
        }
    }
}

#[test]
fn strand_b_pulses_half_a_cycle_behind() {
    let params = MotionParams::default();
    for i in [0usize, 7, 63] {
        let a = sphere_scale(&params, Strand::A, i, 2.0);
        let b = sphere_scale(&params, Strand::B, i, 2.0);
        // sin(x + pi) = -sin(x)
        assert!(((a - 1.0) + (b - 1.0)).abs() < 1e-5);
    }
}

#[test]
fn pulses_stay_within_their_amplitudes() {
    let params = MotionParams::default();
    for k in 0..32 {
        for step in 0..100 {
            let t = step as f64 * 0.1;
            let pulse = link_pulse(&params, k, t);
            assert!((pulse.scale_x - 1.0).abs() <= LINK_SCALE_AMPLITUDE + 1e-6);
            assert!((pulse.opacity - LINK_OPACITY_BASE).abs() <= LINK_OPACITY_AMPLITUDE + 1e-6);
            let s = sphere_scale(&params, Strand::A, k, t);
            assert!((s - 1.0).abs() <= SPHERE_PULSE_AMPLITUDE + 1e-6);
        }
    }
}

#[test]
fn still_params_freeze_spin_bob_and_pulse() {
    let params = MotionParams::still();
    let mut driver = MotionDriver::new(params);
    for i in 1..=20 {
        driver.advance(i as f64 * 0.5, 0.5);
    }
    assert_eq!(driver.state().rotation, 0.0);
    assert_eq!(driver.state().bob_offset, 0.0);
    assert_eq!(driver.sphere_scale(Strand::A, 3), 1.0);
    assert_eq!(driver.link_pulse(3).scale_x, 1.0);
    assert_eq!(driver.link_pulse(3).opacity, LINK_OPACITY_BASE);
    // Tilt still responds
    assert!(params.smoothing > 0.0 && params.tilt_per_pointer > 0.0);
}

#[test]
fn group_transform_places_the_bob_offset() {
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.advance(1.0, 0.033);
    let origin = driver.group_transform().transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(0.0, driver.state().bob_offset, 0.0)).length() < 1e-6);
}

#[test]
fn reset_restores_defaults() {
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.set_pointer(Vec2::ONE);
    driver.advance(1.0, 0.033);
    driver.reset();
    assert_eq!(*driver.state(), MotionState::default());
}

#[test]
fn pointer_maps_to_normalized_device_coordinates() {
    let origin = Vec2::new(100.0, 50.0);
    let size = Vec2::new(400.0, 500.0);
    let centre = pointer_to_ndc(Vec2::new(300.0, 300.0), origin, size).unwrap();
    assert!(centre.length() < 1e-6);
    let top_left = pointer_to_ndc(origin, origin, size).unwrap();
    assert_eq!(top_left, Vec2::new(-1.0, 1.0));
    let bottom_right = pointer_to_ndc(origin + size, origin, size).unwrap();
    assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
    assert_eq!(pointer_to_ndc(origin, origin, Vec2::new(0.0, 10.0)), None);
}

#[test]
fn link_phases_are_distinct_across_links() {
    let params = MotionParams::default();
    let mut seen = HashSet::new();
    for k in 0..32 {
        let phase = link_phase(&params, k, 1.25);
        assert!(seen.insert(phase.to_bits()), "duplicate phase at {k}");
    }
    // Neighbouring links are one stagger apart
    let step = link_phase(&params, 1, 0.0) - link_phase(&params, 0, 0.0);
    assert!((step - LINK_PULSE_STAGGER).abs() < 1e-6);
}
