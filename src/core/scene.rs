// Group-local instance data for the helix.
//
// The layout is computed once from a [`HelixConfig`]; each accepted frame
// only rewrites per-instance transforms and colours from the motion state.

use super::constants::*;
use super::helix::{
    backbone_segments, sample_strands, select_cross_links, CrossLink, HelixConfig, Strands,
};
use super::motion::{MotionDriver, Strand};
use glam::{Mat4, Quat, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Linear RGB colours for the three element kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub strand_a: [f32; 3],
    pub strand_b: [f32; 3],
    pub link: [f32; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            strand_a: srgb_hex_to_linear(STRAND_A_HEX),
            strand_b: srgb_hex_to_linear(STRAND_B_HEX),
            link: srgb_hex_to_linear(LINK_HEX),
        }
    }
}

#[inline]
fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` (sRGB) to linear RGB in [0, 1].
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let ch = |shift: u32| srgb_channel_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [ch(16), ch(8), ch(0)]
}

#[inline]
fn rgba(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a]
}

pub struct SceneLayout {
    pub strands: Strands,
    pub links: Vec<CrossLink>,
    pub palette: Palette,
}

impl SceneLayout {
    pub fn build(cfg: &HelixConfig, palette: Palette) -> Self {
        let strands = sample_strands(cfg);
        let links = select_cross_links(&strands, cfg.cross_link_stride());
        Self {
            strands,
            links,
            palette,
        }
    }

    /// Spheres for both strands: strand A first, then strand B.
    #[inline]
    pub fn sphere_count(&self) -> usize {
        self.strands.len() * 2
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Static backbone line list in group space.
    pub fn backbone_vertices(&self) -> Vec<LineVertex> {
        let per_strand = self.strands.len().saturating_sub(1);
        backbone_segments(&self.strands)
            .into_iter()
            .enumerate()
            .flat_map(|(i, [p0, p1])| {
                let rgb = if i < per_strand {
                    self.palette.strand_a
                } else {
                    self.palette.strand_b
                };
                let color = rgba(rgb, BACKBONE_OPACITY);
                [
                    LineVertex {
                        position: p0.to_array(),
                        color,
                    },
                    LineVertex {
                        position: p1.to_array(),
                        color,
                    },
                ]
            })
            .collect()
    }

    pub fn write_sphere_instances(&self, driver: &MotionDriver, out: &mut Vec<InstanceData>) {
        out.clear();
        for (strand, points, rgb) in [
            (Strand::A, &self.strands.a, self.palette.strand_a),
            (Strand::B, &self.strands.b, self.palette.strand_b),
        ] {
            let color = rgba(rgb, STRAND_OPACITY);
            out.extend(points.iter().enumerate().map(|(i, p)| {
                let s = driver.sphere_scale(strand, i).max(0.0);
                InstanceData {
                    model: Mat4::from_scale_rotation_translation(Vec3::splat(s), Quat::IDENTITY, *p)
                        .to_cols_array_2d(),
                    color,
                }
            }));
        }
    }

    /// Links use a unit cylinder (radius 1, height 1 along +Y).
    pub fn write_link_instances(&self, driver: &MotionDriver, out: &mut Vec<InstanceData>) {
        out.clear();
        out.extend(self.links.iter().enumerate().map(|(k, link)| {
            let pulse = driver.link_pulse(k);
            let thickness = LINK_RADIUS * pulse.scale_x.max(0.0);
            InstanceData {
                model: Mat4::from_scale_rotation_translation(
                    Vec3::new(thickness, link.length, LINK_RADIUS),
                    link.rotation,
                    link.midpoint,
                )
                .to_cols_array_2d(),
                color: rgba(self.palette.link, pulse.opacity),
            }
        }));
    }
}
