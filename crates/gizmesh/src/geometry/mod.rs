//! Gizmo geometry generation
//!
//! Procedural meshes for the handle shapes. Every builder works in a
//! canonical frame with the handle axis along +X; [`permute_axis`] maps that
//! frame onto Y or Z with a cyclic coordinate swap, which keeps triangle
//! winding intact.
//!
//! The builders are pure and deterministic, so [`ShapeLibrary`] generates
//! each element's mesh once and reuses it every frame.

mod shapes;

pub use shapes::{
    ShapeLibrary, center_box, plane_quad, rotation_ring, scale_mace, translation_arrow,
};

use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;

/// Position and normal of one generated vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GeometryVertex {
    /// Position in the canonical frame.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
}

/// Indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryMesh {
    /// Vertex list.
    pub vertices: Vec<GeometryVertex>,
    /// Counter-clockwise triangles, indices into `vertices`.
    pub triangles: Vec<[u32; 3]>,
}

impl GeometryMesh {
    /// Append another mesh, offsetting its indices.
    pub fn append(&mut self, other: &GeometryMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|[a, b, c]| [a + base, b + base, c + base]),
        );
    }

    /// Copy with every position and normal passed through [`permute_axis`].
    pub fn permuted(&self, axis: usize) -> GeometryMesh {
        GeometryMesh {
            vertices: self
                .vertices
                .iter()
                .map(|v| GeometryVertex {
                    position: permute_axis(v.position, axis),
                    normal: permute_axis(v.normal, axis),
                })
                .collect(),
            triangles: self.triangles.clone(),
        }
    }
}

/// Cyclically swap coordinates so that +X lands on axis `axis`.
///
/// `0` is the identity, `1` maps X to Y, `2` maps X to Z. The swaps are
/// proper rotations.
pub fn permute_axis(v: [f32; 3], axis: usize) -> [f32; 3] {
    match axis % 3 {
        0 => v,
        1 => [v[2], v[0], v[1]],
        _ => [v[1], v[2], v[0]],
    }
}

/// Revolve a profile around +X.
///
/// `profile` holds `(along, radius)` pairs. Each consecutive pair becomes a
/// band of `slices` quads with flat normals across the band. Bands whose
/// ends both sit on the axis are skipped.
pub fn make_lathed(profile: &[[f32; 2]], slices: u32) -> GeometryMesh {
    let mut mesh = GeometryMesh::default();
    let slices = slices.max(3);

    for pair in profile.windows(2) {
        let [a0, r0] = pair[0];
        let [a1, r1] = pair[1];
        if r0 == 0.0 && r1 == 0.0 {
            continue;
        }

        // Outward normal of the segment in the (along, radius) plane
        let (da, dr) = (a1 - a0, r1 - r0);
        let len = (da * da + dr * dr).sqrt();
        if len == 0.0 {
            continue;
        }
        let (n_along, n_radius) = (-dr / len, da / len);

        let base_index = mesh.vertices.len() as u32;
        for i in 0..=slices {
            let angle = (i as f32 / slices as f32) * TAU;
            let (sin, cos) = angle.sin_cos();
            let normal = [n_along, n_radius * cos, n_radius * sin];

            mesh.vertices.push(GeometryVertex {
                position: [a0, r0 * cos, r0 * sin],
                normal,
            });
            mesh.vertices.push(GeometryVertex {
                position: [a1, r1 * cos, r1 * sin],
                normal,
            });
        }

        for i in 0..slices {
            let i0 = base_index + i * 2;
            let i1 = base_index + i * 2 + 1;
            let i2 = base_index + (i + 1) * 2;
            let i3 = base_index + (i + 1) * 2 + 1;
            if r0 != 0.0 {
                mesh.triangles.push([i0, i2, i1]);
            }
            if r1 != 0.0 {
                mesh.triangles.push([i1, i2, i3]);
            }
        }
    }

    mesh
}

/// Axis-aligned box with one quad per face.
pub fn make_box(min: [f32; 3], max: [f32; 3]) -> GeometryMesh {
    let mut mesh = GeometryMesh::default();

    for axis in 0..3 {
        let u = (axis + 1) % 3;
        let v = (axis + 2) % 3;
        for positive in [false, true] {
            let mut normal = [0.0; 3];
            normal[axis] = if positive { 1.0 } else { -1.0 };

            let corner = |cu: f32, cv: f32| {
                let mut p = [0.0; 3];
                p[axis] = if positive { max[axis] } else { min[axis] };
                p[u] = cu;
                p[v] = cv;
                GeometryVertex {
                    position: p,
                    normal,
                }
            };

            // u x v == axis, so this order is counter-clockwise seen from +axis
            let mut quad = [
                corner(min[u], min[v]),
                corner(max[u], min[v]),
                corner(max[u], max[v]),
                corner(min[u], max[v]),
            ];
            if !positive {
                quad.reverse();
            }

            let base_index = mesh.vertices.len() as u32;
            mesh.vertices.extend_from_slice(&quad);
            mesh.triangles.push([base_index, base_index + 1, base_index + 2]);
            mesh.triangles.push([base_index, base_index + 2, base_index + 3]);
        }
    }

    mesh
}

/// Torus lying in the YZ plane (axis +X), centered at the origin.
pub fn make_torus(
    major_radius: f32,
    minor_radius: f32,
    ring_segments: u32,
    tube_segments: u32,
) -> GeometryMesh {
    let mut mesh = GeometryMesh::default();
    let ring_segments = ring_segments.max(3);
    let tube_segments = tube_segments.max(3);

    for i in 0..=ring_segments {
        let u = (i as f32 / ring_segments as f32) * TAU;
        let (sin_u, cos_u) = u.sin_cos();
        let radial = [0.0, cos_u, sin_u];

        for j in 0..=tube_segments {
            let v = (j as f32 / tube_segments as f32) * TAU;
            let (sin_v, cos_v) = v.sin_cos();
            let normal = [sin_v, cos_v * radial[1], cos_v * radial[2]];
            let position = [
                minor_radius * normal[0],
                major_radius * radial[1] + minor_radius * normal[1],
                major_radius * radial[2] + minor_radius * normal[2],
            ];
            mesh.vertices.push(GeometryVertex { position, normal });
        }
    }

    let stride = tube_segments + 1;
    for i in 0..ring_segments {
        for j in 0..tube_segments {
            let a = i * stride + j;
            let b = (i + 1) * stride + j;
            let c = (i + 1) * stride + j + 1;
            let d = i * stride + j + 1;
            mesh.triangles.push([a, b, d]);
            mesh.triangles.push([b, c, d]);
        }
    }

    mesh
}
