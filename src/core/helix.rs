// Double-helix geometry.
//
// Two strands are sampled from the same parametric curve, the second shifted
// by half a turn, so `a[i]` and `b[i]` always sit at the same height on
// opposite sides of the central axis. Cross-links join the strands at a fixed
// index stride.

use super::constants::{
    HELIX_CROSS_LINK_STRIDE, HELIX_HEIGHT, HELIX_RADIUS, HELIX_SAMPLES_PER_TURN, HELIX_TURNS,
    MAX_TOTAL_SAMPLES,
};
use super::error::HelixError;
use glam::{Quat, Vec3};
use std::f32::consts::{PI, TAU};

/// Default long axis of a connecting primitive (cylinder meshes are built along +Y).
pub const LINK_AXIS: Vec3 = Vec3::Y;

/// Validated helix parameters. Construct with [`HelixConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixConfig {
    radius: f32,
    height: f32,
    turn_count: f32,
    samples_per_turn: u32,
    cross_link_stride: u32,
}

impl Default for HelixConfig {
    /// The shipped parameters: 4 turns of 32 samples, a link every 4th sample.
    fn default() -> Self {
        Self {
            radius: HELIX_RADIUS,
            height: HELIX_HEIGHT,
            turn_count: HELIX_TURNS,
            samples_per_turn: HELIX_SAMPLES_PER_TURN,
            cross_link_stride: HELIX_CROSS_LINK_STRIDE,
        }
    }
}

impl HelixConfig {
    pub fn new(
        radius: f32,
        height: f32,
        turn_count: f32,
        samples_per_turn: u32,
        cross_link_stride: u32,
    ) -> Result<Self, HelixError> {
        for (name, v) in [("radius", radius), ("height", height), ("turn_count", turn_count)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(HelixError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {v}"
                )));
            }
        }
        if samples_per_turn == 0 {
            return Err(HelixError::InvalidConfig(
                "samples_per_turn must be at least 1".into(),
            ));
        }
        if cross_link_stride == 0 {
            return Err(HelixError::InvalidConfig(
                "cross_link_stride must be at least 1".into(),
            ));
        }
        let total = (turn_count as f64 * samples_per_turn as f64).round();
        if !total.is_finite() || total < 2.0 || total > MAX_TOTAL_SAMPLES as f64 {
            return Err(HelixError::InvalidConfig(format!(
                "turn_count * samples_per_turn must yield 2..={MAX_TOTAL_SAMPLES} samples, got {total}"
            )));
        }
        Ok(Self {
            radius,
            height,
            turn_count,
            samples_per_turn,
            cross_link_stride,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
    #[inline]
    pub fn turn_count(&self) -> f32 {
        self.turn_count
    }
    #[inline]
    pub fn samples_per_turn(&self) -> u32 {
        self.samples_per_turn
    }
    #[inline]
    pub fn cross_link_stride(&self) -> u32 {
        self.cross_link_stride
    }

    /// Number of samples per strand.
    #[inline]
    pub fn total_samples(&self) -> usize {
        (self.turn_count as f64 * self.samples_per_turn as f64).round() as usize
    }

    /// Number of cross-links, `ceil(total_samples / stride)`.
    #[inline]
    pub fn cross_link_count(&self) -> usize {
        self.total_samples().div_ceil(self.cross_link_stride as usize)
    }
}

/// Two index-aligned point sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Strands {
    pub a: Vec<Vec3>,
    pub b: Vec<Vec3>,
}

impl Strands {
    #[inline]
    pub fn len(&self) -> usize {
        self.a.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// Connecting element between `a[index]` and `b[index]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossLink {
    pub index: usize,
    pub midpoint: Vec3,
    /// Unit vector from strand A to strand B.
    pub orientation: Vec3,
    /// Shortest-arc rotation taking [`LINK_AXIS`] onto `orientation`.
    pub rotation: Quat,
    pub length: f32,
}

/// Sample both strands of the helix.
pub fn sample_strands(cfg: &HelixConfig) -> Strands {
    let n = cfg.total_samples();
    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f32 / n as f32;
        let angle = t * cfg.turn_count * TAU;
        let y = (t - 0.5) * cfg.height;
        a.push(Vec3::new(cfg.radius * angle.cos(), y, cfg.radius * angle.sin()));
        let opposite = angle + PI;
        b.push(Vec3::new(
            cfg.radius * opposite.cos(),
            y,
            cfg.radius * opposite.sin(),
        ));
    }
    Strands { a, b }
}

/// Indices `0, stride, 2*stride, ...` below `len`.
#[inline]
pub fn cross_link_indices(len: usize, stride: u32) -> impl Iterator<Item = usize> {
    (0..len).step_by(stride.max(1) as usize)
}

/// Build a cross-link at every `stride`-th sample.
pub fn select_cross_links(strands: &Strands, stride: u32) -> Vec<CrossLink> {
    cross_link_indices(strands.len(), stride)
        .map(|i| {
            let (pa, pb) = (strands.a[i], strands.b[i]);
            let span = pb - pa;
            let orientation = span.normalize_or_zero();
            CrossLink {
                index: i,
                midpoint: pa.lerp(pb, 0.5),
                orientation,
                rotation: Quat::from_rotation_arc(LINK_AXIS, orientation),
                length: span.length(),
            }
        })
        .collect()
}

/// Line segments joining consecutive samples on each strand, strand A first.
pub fn backbone_segments(strands: &Strands) -> Vec<[Vec3; 2]> {
    let per = strands.len().saturating_sub(1);
    let mut out = Vec::with_capacity(per * 2);
    for pts in [&strands.a, &strands.b] {
        out.extend(pts.windows(2).map(|w| [w[0], w[1]]));
    }
    out
}
