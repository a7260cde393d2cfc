// Per-frame motion for the helix group.
//
// Rotation advances by a fixed increment per accepted frame. Bob and pulse
// values are pure functions of wall-clock time, so pausing and resuming the
// loop never causes a jump. Pointer tilt and camera parallax follow their
// targets through a first-order filter.

use super::constants::*;
use glam::{Mat4, Quat, Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub rotation_per_frame: f32,
    pub bob_amplitude: f32,
    pub bob_frequency: f32,
    pub sphere_pulse_speed: f32,
    pub sphere_pulse_stagger: f32,
    pub sphere_pulse_amplitude: f32,
    pub link_pulse_speed: f32,
    pub link_pulse_stagger: f32,
    pub link_scale_amplitude: f32,
    pub link_opacity_base: f32,
    pub link_opacity_amplitude: f32,
    pub tilt_per_pointer: f32,
    pub max_tilt: f32,
    pub smoothing: f32,
    pub parallax_per_pointer: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            rotation_per_frame: ROTATION_PER_FRAME,
            bob_amplitude: BOB_AMPLITUDE,
            bob_frequency: BOB_FREQUENCY,
            sphere_pulse_speed: SPHERE_PULSE_SPEED,
            sphere_pulse_stagger: SPHERE_PULSE_STAGGER,
            sphere_pulse_amplitude: SPHERE_PULSE_AMPLITUDE,
            link_pulse_speed: LINK_PULSE_SPEED,
            link_pulse_stagger: LINK_PULSE_STAGGER,
            link_scale_amplitude: LINK_SCALE_AMPLITUDE,
            link_opacity_base: LINK_OPACITY_BASE,
            link_opacity_amplitude: LINK_OPACITY_AMPLITUDE,
            tilt_per_pointer: TILT_PER_POINTER,
            max_tilt: MAX_TILT,
            smoothing: TILT_SMOOTHING,
            parallax_per_pointer: PARALLAX_PER_POINTER,
        }
    }
}

impl MotionParams {
    /// Reduced-motion variant: no spin, bob or pulse. Pointer tilt stays.
    pub fn still() -> Self {
        Self {
            rotation_per_frame: 0.0,
            bob_amplitude: 0.0,
            sphere_pulse_amplitude: 0.0,
            link_scale_amplitude: 0.0,
            link_opacity_amplitude: 0.0,
            ..Self::default()
        }
    }
}

/// Which strand a sphere belongs to. Strand B pulses half a cycle behind A.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strand {
    A,
    B,
}

impl Strand {
    #[inline]
    fn phase_offset(self) -> f32 {
        match self {
            Strand::A => 0.0,
            Strand::B => PI,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub rotation: f32,
    pub bob_offset: f32,
    pub tilt_target: Vec2,
    pub tilt: Vec2,
    pub parallax_target: Vec2,
    pub parallax: Vec2,
    pub time_sec: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Advanced,
    /// Clock anomaly (non-positive or non-finite elapsed time); nothing changed.
    Skipped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkPulse {
    pub scale_x: f32,
    pub opacity: f32,
}

pub struct MotionDriver {
    pub params: MotionParams,
    state: MotionState,
}

impl MotionDriver {
    pub fn new(params: MotionParams) -> Self {
        Self {
            params,
            state: MotionState::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = MotionState::default();
    }

    /// Feed a pointer position normalized to [-1, 1] on each axis (+y up).
    pub fn set_pointer(&mut self, pointer: Vec2) {
        if !pointer.is_finite() {
            return;
        }
        let p = pointer.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        let cfg = &self.params;
        // x tilt follows vertical pointer motion, y tilt follows horizontal
        self.state.tilt_target =
            (Vec2::new(p.y, p.x) * cfg.tilt_per_pointer).clamp_length_max(cfg.max_tilt);
        self.state.parallax_target = p * cfg.parallax_per_pointer;
    }

    /// Pointer left the container; ease back to neutral.
    pub fn clear_pointer(&mut self) {
        self.state.tilt_target = Vec2::ZERO;
        self.state.parallax_target = Vec2::ZERO;
    }

    pub fn advance(&mut self, now_sec: f64, elapsed_sec: f64) -> FrameOutcome {
        if !now_sec.is_finite() || !elapsed_sec.is_finite() || elapsed_sec <= 0.0 {
            return FrameOutcome::Skipped;
        }
        let p = self.params;
        let s = &mut self.state;
        s.time_sec = now_sec;
        s.rotation = (s.rotation + p.rotation_per_frame).rem_euclid(TAU);
        s.bob_offset = p.bob_amplitude * ((now_sec * p.bob_frequency as f64).sin() as f32);
        let k = p.smoothing.clamp(f32::EPSILON, 1.0);
        s.tilt = approach(s.tilt, s.tilt_target, k);
        s.parallax = approach(s.parallax, s.parallax_target, k);
        FrameOutcome::Advanced
    }

    /// Group transform: bob, then pointer tilt about X, then spin about Y.
    pub fn group_transform(&self) -> Mat4 {
        let s = &self.state;
        Mat4::from_rotation_translation(
            Quat::from_rotation_x(s.tilt.x) * Quat::from_rotation_y(s.rotation + s.tilt.y),
            Vec3::new(0.0, s.bob_offset, 0.0),
        )
    }

    /// Camera eye for a fixed look-at on the origin.
    pub fn camera_eye(&self, distance: f32) -> Vec3 {
        Vec3::new(self.state.parallax.x, self.state.parallax.y, distance)
    }

    #[inline]
    pub fn sphere_scale(&self, strand: Strand, index: usize) -> f32 {
        sphere_scale(&self.params, strand, index, self.state.time_sec)
    }

    #[inline]
    pub fn link_pulse(&self, link: usize) -> LinkPulse {
        link_pulse(&self.params, link, self.state.time_sec)
    }
}

/// One step of the first-order filter `current += (target - current) * factor`.
#[inline]
pub fn approach(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

#[inline]
pub fn sphere_phase(params: &MotionParams, strand: Strand, index: usize, time_sec: f64) -> f32 {
    (time_sec * params.sphere_pulse_speed as f64) as f32
        + index as f32 * params.sphere_pulse_stagger
        + strand.phase_offset()
}

#[inline]
pub fn sphere_scale(params: &MotionParams, strand: Strand, index: usize, time_sec: f64) -> f32 {
    1.0 + sphere_phase(params, strand, index, time_sec).sin() * params.sphere_pulse_amplitude
}

#[inline]
pub fn link_phase(params: &MotionParams, link: usize, time_sec: f64) -> f32 {
    (time_sec * params.link_pulse_speed as f64) as f32 + link as f32 * params.link_pulse_stagger
}

#[inline]
pub fn link_pulse(params: &MotionParams, link: usize, time_sec: f64) -> LinkPulse {
    let s = link_phase(params, link, time_sec).sin();
    LinkPulse {
        scale_x: 1.0 + s * params.link_scale_amplitude,
        opacity: (params.link_opacity_base + s * params.link_opacity_amplitude).clamp(0.0, 1.0),
    }
}

/// Map a client-space pointer position onto `[-1, 1]²` over a rectangle, +y up.
/// Degenerate rectangles yield `None`.
pub fn pointer_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if !(rect_size.x > 0.0 && rect_size.y > 0.0) || !client.is_finite() {
        return None;
    }
    let uv = (client - rect_origin) / rect_size;
    Some(Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0))
}
