//! Frame buffer assembly
//!
//! Each handle call records a [`DrawCommand`]. At the end of the frame the
//! [`FrameAssembler`] places the cached element meshes with each command's
//! gizmo frame, colours them by highlight state, and concatenates everything
//! into one vertex buffer and one index buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::config::GizmoColors;
use crate::element::{Element, HandleKind};
use crate::frame::GizmoFrame;
use crate::geometry::ShapeLibrary;

/// Gizmo vertex data, ready for upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GizmoVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space unit normal.
    pub normal: [f32; 3],
    /// Linear RGBA.
    pub color: [f32; 4],
}

/// Highlight state of one drawn handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Nothing highlighted
    #[default]
    None,
    /// Pointer is over this element
    Hovered(Element),
    /// This element is being dragged
    Active(Element),
}

/// One handle to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Which handle
    pub kind: HandleKind,
    /// Placement after this frame's update
    pub frame: GizmoFrame,
    /// Highlighted element
    pub highlight: Highlight,
}

/// Accumulates draw commands and owns the assembled buffers
#[derive(Debug, Default)]
pub struct FrameAssembler {
    commands: Vec<DrawCommand>,
    vertices: Vec<GizmoVertex>,
    triangles: Vec<[u32; 3]>,
}

impl FrameAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the recorded commands and the assembled buffers.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.vertices.clear();
        self.triangles.clear();
    }

    /// Record a handle to draw.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Rebuild the buffers from the recorded commands.
    ///
    /// Running it twice without new commands produces the same buffers.
    pub fn assemble(&mut self, shapes: &ShapeLibrary, colors: &GizmoColors) {
        self.vertices.clear();
        self.triangles.clear();

        for command in &self.commands {
            let matrix = command.frame.matrix();
            let orientation = command.frame.orientation;

            for &element in command.kind.elements() {
                let color = element_color(element, command.highlight, colors);
                let mesh = shapes.mesh(element);
                let base_index = self.vertices.len() as u32;

                self.vertices.extend(mesh.vertices.iter().map(|v| GizmoVertex {
                    position: matrix.transform_point3(Vec3::from(v.position)).to_array(),
                    normal: (orientation * Vec3::from(v.normal)).to_array(),
                    color,
                }));
                self.triangles.extend(
                    mesh.triangles
                        .iter()
                        .map(|[a, b, c]| [a + base_index, b + base_index, c + base_index]),
                );
            }
        }

        tracing::trace!(
            "Assembled {} gizmos: {} vertices, {} triangles",
            self.commands.len(),
            self.vertices.len(),
            self.triangles.len()
        );
    }

    /// Read-only view of the assembled buffers.
    pub fn buffers(&self) -> GizmoBuffers<'_> {
        GizmoBuffers {
            vertices: &self.vertices,
            triangles: &self.triangles,
        }
    }
}

/// Colour of `element` given its handle's highlight state.
fn element_color(element: Element, highlight: Highlight, colors: &GizmoColors) -> [f32; 4] {
    let mut color = match highlight {
        Highlight::Active(active) if active == element => colors.active,
        Highlight::Hovered(hovered) if hovered == element => colors.hover,
        _ => colors.axis(element.axis_index()),
    };
    if element.is_plane() {
        color[3] *= colors.plane_alpha;
    }
    color
}

/// Borrowed view of one frame's gizmo geometry.
///
/// Valid until the owning system starts the next frame.
#[derive(Debug, Clone, Copy)]
pub struct GizmoBuffers<'a> {
    vertices: &'a [GizmoVertex],
    triangles: &'a [[u32; 3]],
}

impl<'a> GizmoBuffers<'a> {
    /// Vertex list.
    pub fn vertices(&self) -> &'a [GizmoVertex] {
        self.vertices
    }

    /// Triangle list.
    pub fn triangles(&self) -> &'a [[u32; 3]] {
        self.triangles
    }

    /// Flattened index list, three per triangle.
    pub fn indices(&self) -> &'a [u32] {
        bytemuck::cast_slice(self.triangles)
    }

    /// Raw vertex bytes for upload.
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Raw index bytes for upload.
    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.triangles)
    }

    /// Size of one vertex in bytes.
    pub fn vertex_stride(&self) -> usize {
        std::mem::size_of::<GizmoVertex>()
    }

    /// Size of one index in bytes.
    pub fn index_stride(&self) -> usize {
        std::mem::size_of::<u32>()
    }

    /// True when no geometry was produced.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn command(kind: HandleKind, center: Vec3, highlight: Highlight) -> DrawCommand {
        DrawCommand {
            kind,
            frame: GizmoFrame::new(center, Quat::IDENTITY, 1.0),
            highlight,
        }
    }

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<GizmoVertex>(), 40);
        assert_eq!(std::mem::offset_of!(GizmoVertex, normal), 12);
        assert_eq!(std::mem::offset_of!(GizmoVertex, color), 24);
    }

    #[test]
    fn test_assemble_offsets_and_places() {
        let shapes = ShapeLibrary::new();
        let colors = GizmoColors::default();
        let mut assembler = FrameAssembler::new();
        assembler.push(command(HandleKind::Rotation, Vec3::ZERO, Highlight::None));
        assembler.push(command(HandleKind::Scale, Vec3::new(10.0, 0.0, 0.0), Highlight::None));
        assembler.assemble(&shapes, &colors);

        let buffers = assembler.buffers();
        let count = buffers.vertices().len() as u32;
        assert!(buffers.indices().iter().all(|&i| i < count));
        assert_eq!(buffers.indices().len(), buffers.triangles().len() * 3);
        assert_eq!(buffers.vertex_bytes().len(), buffers.vertices().len() * 40);
        assert_eq!(buffers.index_bytes().len(), buffers.indices().len() * 4);

        // Scale handle vertices sit around the second center
        let ring_vertices: usize = HandleKind::Rotation
            .elements()
            .iter()
            .map(|&e| shapes.mesh(e).vertices.len())
            .sum();
        for v in &buffers.vertices()[ring_vertices..] {
            assert!(v.position[0] > 8.0);
        }
    }

    #[test]
    fn test_assemble_is_repeatable() {
        let shapes = ShapeLibrary::new();
        let colors = GizmoColors::default();
        let mut assembler = FrameAssembler::new();
        assembler.push(command(HandleKind::Translation, Vec3::ONE, Highlight::None));
        assembler.assemble(&shapes, &colors);
        let first = assembler.buffers().vertex_bytes().to_vec();
        assembler.assemble(&shapes, &colors);
        assert_eq!(assembler.buffers().vertex_bytes(), first.as_slice());
    }

    #[test]
    fn test_highlight_colors() {
        let colors = GizmoColors::default();
        let hovered = Highlight::Hovered(Element::TranslateX);
        assert_eq!(element_color(Element::TranslateX, hovered, &colors), colors.hover);
        assert_eq!(element_color(Element::TranslateY, hovered, &colors), colors.y_axis);
        let active = Highlight::Active(Element::RotateZ);
        assert_eq!(element_color(Element::RotateZ, active, &colors), colors.active);
        assert_eq!(element_color(Element::TranslateView, Highlight::None, &colors), colors.view);
        let plane = element_color(Element::TranslateXY, Highlight::None, &colors);
        assert_eq!(plane[3], colors.z_axis[3] * colors.plane_alpha);
    }

    #[test]
    fn test_clear_empties_buffers() {
        let shapes = ShapeLibrary::new();
        let mut assembler = FrameAssembler::new();
        assembler.push(command(HandleKind::Scale, Vec3::ZERO, Highlight::None));
        assembler.assemble(&shapes, &GizmoColors::default());
        assert!(!assembler.buffers().is_empty());
        assembler.clear();
        assert!(assembler.buffers().is_empty());
        assert!(assembler.commands().is_empty());
    }
}
