// Shared helix geometry and motion tuning constants.

// Helix geometry
pub const HELIX_RADIUS: f32 = 1.5;
pub const HELIX_HEIGHT: f32 = 8.0;
pub const HELIX_TURNS: f32 = 4.0;
pub const HELIX_SAMPLES_PER_TURN: u32 = 32;
pub const HELIX_CROSS_LINK_STRIDE: u32 = 4;
// Upper bound on samples per strand; keeps instance buffers small
pub const MAX_TOTAL_SAMPLES: usize = 4096;

// Primitive sizing
pub const SPHERE_RADIUS: f32 = 0.1;
pub const SPHERE_SEGMENTS: u32 = 8; // around the equator
pub const SPHERE_RINGS: u32 = 6; // pole to pole
pub const LINK_RADIUS: f32 = 0.02;
pub const LINK_SEGMENTS: u32 = 8;

// Continuous rotation (radians per accepted frame)
pub const ROTATION_PER_FRAME: f32 = 0.002;

// Vertical bob: amplitude * sin(t * frequency), t in seconds
pub const BOB_AMPLITUDE: f32 = 0.15;
pub const BOB_FREQUENCY: f32 = 0.5;

// Strand sphere pulse
pub const SPHERE_PULSE_SPEED: f32 = 1.5; // rad/s
pub const SPHERE_PULSE_STAGGER: f32 = 0.08; // rad per index
pub const SPHERE_PULSE_AMPLITUDE: f32 = 0.1;

// Cross-link pulse
pub const LINK_PULSE_SPEED: f32 = 1.0; // rad/s
pub const LINK_PULSE_STAGGER: f32 = 0.2; // rad per link
pub const LINK_SCALE_AMPLITUDE: f32 = 0.08;
pub const LINK_OPACITY_BASE: f32 = 0.6;
pub const LINK_OPACITY_AMPLITUDE: f32 = 0.15;

// Pointer tilt
pub const TILT_PER_POINTER: f32 = 0.3; // radians at the container edge
pub const MAX_TILT: f32 = 0.3;
pub const TILT_SMOOTHING: f32 = 0.05; // fraction of the remaining gap per frame
pub const PARALLAX_PER_POINTER: f32 = 2.0; // camera world units at the container edge

// Frame pacing
pub const TARGET_FPS: f32 = 30.0;

// Palette (sRGB hex, converted to linear when uploaded)
pub const STRAND_A_HEX: u32 = 0x67e8f9;
pub const STRAND_B_HEX: u32 = 0x06b6d4;
pub const LINK_HEX: u32 = 0xf0f9ff;
pub const STRAND_OPACITY: f32 = 0.9;
pub const BACKBONE_OPACITY: f32 = 0.6;
pub const SHININESS: f32 = 100.0;
