// Low-poly primitives shared by every instance of a kind.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) {
        self.vertices.push(MeshVertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
    }
}

/// UV sphere centred on the origin.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let segments = segments.clamp(3, 64);
    let rings = rings.clamp(2, 64);
    let mut mesh = MeshData::default();

    for ring in 0..=rings {
        let phi = ring as f32 / rings as f32 * PI;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();
        for seg in 0..segments {
            let theta = seg as f32 / segments as f32 * TAU;
            let p = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            mesh.push(p, p.normalize_or_zero());
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let next = (seg + 1) % segments;
            let i0 = (ring * segments + seg) as u16;
            let i1 = (ring * segments + next) as u16;
            let i2 = ((ring + 1) * segments + seg) as u16;
            let i3 = ((ring + 1) * segments + next) as u16;
            mesh.indices.extend_from_slice(&[i0, i1, i3, i0, i3, i2]);
        }
    }
    mesh
}

/// Open cylinder along +Y, centred on the origin. Links are too thin for caps
/// to be visible.
pub fn cylinder(radius: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.clamp(3, 64);
    let half = height * 0.5;
    let mut mesh = MeshData::default();

    for i in 0..segments {
        let theta = i as f32 / segments as f32 * TAU;
        let n = Vec3::new(theta.cos(), 0.0, theta.sin());
        mesh.push(Vec3::new(n.x * radius, -half, n.z * radius), n);
        mesh.push(Vec3::new(n.x * radius, half, n.z * radius), n);
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        let b0 = (i * 2) as u16;
        let t0 = b0 + 1;
        let b1 = (next * 2) as u16;
        let t1 = b1 + 1;
        mesh.indices.extend_from_slice(&[b0, t0, t1, b0, t1, b1]);
    }
    mesh
}
