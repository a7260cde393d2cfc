// Host-side tests for instance layout and the shared primitives.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod helix {
    include!("../src/core/helix.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod mesh {
    include!("../src/core/mesh.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;
use constants::*;
use error::HelixError;
use glam::{Mat4, Vec3, Vec4};
use helix::HelixConfig;
use mesh::*;
use motion::{MotionDriver, MotionParams};
use scene::*;

fn layout() -> SceneLayout {
    SceneLayout::build(&HelixConfig::default(), Palette::default())
}

#[test]
fn layout_counts_follow_the_config() {
    let layout = layout();
    assert_eq!(layout.sphere_count(), 256);
    assert_eq!(layout.link_count(), 32);
    assert_eq!(layout.backbone_vertices().len(), 2 * 2 * 127);
}

#[test]
fn sphere_instances_sit_on_the_strands() {
    let layout = layout();
    let driver = MotionDriver::new(MotionParams::default());
    let mut out = Vec::new();
    layout.write_sphere_instances(&driver, &mut out);
    assert_eq!(out.len(), layout.sphere_count());

    let n = layout.strands.len();
    for (i, inst) in out.iter().enumerate() {
        let model = Mat4::from_cols_array_2d(&inst.model);
        let expected = if i < n {
            layout.strands.a[i]
        } else {
            layout.strands.b[i - n]
        };
        assert!((model.transform_point3(Vec3::ZERO) - expected).length() < 1e-5);
        assert_eq!(inst.color[3], STRAND_OPACITY);
    }
    assert_eq!(out[0].color[..3], layout.palette.strand_a[..]);
    assert_eq!(out[n].color[..3], layout.palette.strand_b[..]);
}

#[test]
fn writing_instances_replaces_previous_contents() {
    let layout = layout();
    let driver = MotionDriver::new(MotionParams::default());
    let mut out = Vec::new();
    layout.write_sphere_instances(&driver, &mut out);
    layout.write_sphere_instances(&driver, &mut out);
    assert_eq!(out.len(), layout.sphere_count());
}

#[test]
fn link_instances_span_the_pair_they_join() {
    let layout = layout();
    let mut driver = MotionDriver::new(MotionParams::default());
    driver.advance(1.0, 0.033);
    let mut out = Vec::new();
    layout.write_link_instances(&driver, &mut out);
    assert_eq!(out.len(), layout.link_count());

    for (k, (inst, link)) in out.iter().zip(&layout.links).enumerate() {
        let model = Mat4::from_cols_array_2d(&inst.model);
        // The unit cylinder's end caps land on the two strand samples
        let top = model.transform_point3(Vec3::new(0.0, 0.5, 0.0));
        let bottom = model.transform_point3(Vec3::new(0.0, -0.5, 0.0));
        let (a, b) = (layout.strands.a[link.index], layout.strands.b[link.index]);
        assert!((top - b).length() < 1e-4, "link {k}");
        assert!((bottom - a).length() < 1e-4, "link {k}");
        assert_eq!(inst.color[3], driver.link_pulse(k).opacity);
    }
}

#[test]
fn backbone_colours_follow_their_strand() {
    let layout = layout();
    let verts = layout.backbone_vertices();
    let half = verts.len() / 2;
    assert_eq!(verts[0].color[..3], layout.palette.strand_a[..]);
    assert_eq!(verts[half].color[..3], layout.palette.strand_b[..]);
    assert!(verts.iter().all(|v| v.color[3] == BACKBONE_OPACITY));
}

#[test]
fn hex_colours_convert_to_linear() {
    assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let white = srgb_hex_to_linear(0xffffff);
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    // sRGB mid grey is about 0.214 linear
    let grey = srgb_hex_to_linear(0x808080);
    assert!((grey[0] - 0.2158).abs() < 1e-3);
    let cyan = srgb_hex_to_linear(STRAND_B_HEX);
    assert!(cyan[0] < cyan[1] && cyan[1] < cyan[2]);
}

#[test]
fn sphere_mesh_counts_and_normals() {
    let mesh = uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_RINGS);
    let (seg, rings) = (SPHERE_SEGMENTS as usize, SPHERE_RINGS as usize);
    assert_eq!(mesh.vertices.len(), (rings + 1) * seg);
    assert_eq!(mesh.indices.len(), rings * seg * 6);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        assert!((p.length() - SPHERE_RADIUS).abs() < 1e-5);
    }
}

#[test]
fn cylinder_mesh_is_a_unit_tube_along_y() {
    let mesh = cylinder(1.0, 1.0, LINK_SEGMENTS);
    let seg = LINK_SEGMENTS as usize;
    assert_eq!(mesh.vertices.len(), 2 * seg);
    assert_eq!(mesh.indices.len(), seg * 6);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        assert!((p.y.abs() - 0.5).abs() < 1e-6);
        assert!((Vec3::new(p.x, 0.0, p.z).length() - 1.0).abs() < 1e-5);
        assert_eq!(v.normal[1], 0.0);
    }
}

#[test]
fn camera_projects_the_origin_to_the_centre() {
    let camera = Camera::new(8.0, 75f32.to_radians(), 0.8);
    let clip = camera.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn zero_sized_containers_are_rejected() {
    assert_eq!(aspect_ratio(0.0, 500.0), Err(HelixError::MissingContainer));
    assert_eq!(aspect_ratio(400.0, 0.0), Err(HelixError::MissingContainer));
    assert_eq!(aspect_ratio(f64::NAN, 10.0), Err(HelixError::MissingContainer));
    assert!((aspect_ratio(400.0, 500.0).unwrap() - 0.8).abs() < 1e-6);
}
