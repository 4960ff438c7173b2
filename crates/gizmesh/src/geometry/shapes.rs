//! Handle shape recipes

use super::{GeometryMesh, make_box, make_lathed, make_torus};
use crate::constants::gizmo;
use crate::element::Element;

/// Translation arrow along +X: shaft, head cone and back caps.
pub fn translation_arrow() -> GeometryMesh {
    make_lathed(
        &[
            [gizmo::SHAFT_START, 0.0],
            [gizmo::SHAFT_START, gizmo::SHAFT_RADIUS],
            [gizmo::HEAD_START, gizmo::SHAFT_RADIUS],
            [gizmo::HEAD_START, gizmo::HEAD_RADIUS],
            [gizmo::ARROW_LENGTH, 0.0],
        ],
        gizmo::SEGMENTS,
    )
}

/// Rotation ring around +X.
pub fn rotation_ring() -> GeometryMesh {
    make_torus(
        gizmo::RING_RADIUS,
        gizmo::RING_TUBE_RADIUS,
        gizmo::RING_SEGMENTS,
        gizmo::RING_TUBE_SEGMENTS,
    )
}

/// Scale handle along +X: a thin shaft ending in a cube.
pub fn scale_mace() -> GeometryMesh {
    let mut mesh = make_lathed(
        &[
            [gizmo::SHAFT_START, 0.0],
            [gizmo::SHAFT_START, gizmo::SHAFT_RADIUS],
            [gizmo::SCALE_SHAFT_END, gizmo::SHAFT_RADIUS],
            [gizmo::SCALE_SHAFT_END, 0.0],
        ],
        gizmo::SEGMENTS,
    );
    let h = gizmo::SCALE_TIP_HALF_EXTENT;
    mesh.append(&make_box(
        [gizmo::SCALE_SHAFT_END, -h, -h],
        [gizmo::SCALE_TIP_END, h, h],
    ));
    mesh
}

/// Planar translation quad with normal +X, spanning the YZ quadrant.
pub fn plane_quad() -> GeometryMesh {
    let t = gizmo::PLANE_HALF_THICKNESS;
    make_box(
        [-t, gizmo::PLANE_MIN, gizmo::PLANE_MIN],
        [t, gizmo::PLANE_MAX, gizmo::PLANE_MAX],
    )
}

/// View-plane translation box at the center.
pub fn center_box() -> GeometryMesh {
    let h = gizmo::CENTER_HALF_EXTENT;
    make_box([-h; 3], [h; 3])
}

/// Canonical meshes for every [`Element`], generated once.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    meshes: Vec<GeometryMesh>,
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeLibrary {
    /// Build every element mesh.
    pub fn new() -> Self {
        let arrow = translation_arrow();
        let quad = plane_quad();
        let ring = rotation_ring();
        let mace = scale_mace();

        let meshes = Element::ALL
            .iter()
            .map(|element| {
                let canonical = match element {
                    Element::TranslateX | Element::TranslateY | Element::TranslateZ => &arrow,
                    Element::TranslateYZ | Element::TranslateZX | Element::TranslateXY => &quad,
                    Element::TranslateView => return center_box(),
                    Element::RotateX | Element::RotateY | Element::RotateZ => &ring,
                    Element::ScaleX | Element::ScaleY | Element::ScaleZ => &mace,
                };
                canonical.permuted(element.axis_index().unwrap_or(0))
            })
            .collect();

        Self { meshes }
    }

    /// Mesh for `element`, already oriented onto its axis.
    pub fn mesh(&self, element: Element) -> &GeometryMesh {
        &self.meshes[element.index()]
    }
}
