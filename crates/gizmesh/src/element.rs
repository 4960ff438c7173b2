//! Handle kinds and their sub-elements

use glam::Vec3;

/// Which kind of manipulation a handle performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandleKind {
    /// Arrows, plane quads and a view-plane box
    #[default]
    Translation,
    /// One ring per axis
    Rotation,
    /// Cube-tipped shafts
    Scale,
}

impl HandleKind {
    /// Sub-elements drawn and hit-tested for this kind, in draw order.
    pub fn elements(&self) -> &'static [Element] {
        match self {
            HandleKind::Translation => &[
                Element::TranslateX,
                Element::TranslateY,
                Element::TranslateZ,
                Element::TranslateYZ,
                Element::TranslateZX,
                Element::TranslateXY,
                Element::TranslateView,
            ],
            HandleKind::Rotation => &[Element::RotateX, Element::RotateY, Element::RotateZ],
            HandleKind::Scale => &[Element::ScaleX, Element::ScaleY, Element::ScaleZ],
        }
    }
}

/// One draggable part of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Arrow along X
    TranslateX,
    /// Arrow along Y
    TranslateY,
    /// Arrow along Z
    TranslateZ,
    /// Quad in the YZ plane (normal X)
    TranslateYZ,
    /// Quad in the ZX plane (normal Y)
    TranslateZX,
    /// Quad in the XY plane (normal Z)
    TranslateXY,
    /// Center box, drags in the camera-facing plane
    TranslateView,
    /// Ring around X
    RotateX,
    /// Ring around Y
    RotateY,
    /// Ring around Z
    RotateZ,
    /// Cube-tipped shaft along X
    ScaleX,
    /// Cube-tipped shaft along Y
    ScaleY,
    /// Cube-tipped shaft along Z
    ScaleZ,
}

impl Element {
    /// Every element, indexed by [`Element::index`].
    pub const ALL: [Element; 13] = [
        Element::TranslateX,
        Element::TranslateY,
        Element::TranslateZ,
        Element::TranslateYZ,
        Element::TranslateZX,
        Element::TranslateXY,
        Element::TranslateView,
        Element::RotateX,
        Element::RotateY,
        Element::RotateZ,
        Element::ScaleX,
        Element::ScaleY,
        Element::ScaleZ,
    ];

    /// Dense index into [`Element::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The axis this element is tied to: its direction for arrows, rings and
    /// scale shafts, its normal for plane quads. `None` for the view handle.
    pub fn axis_index(&self) -> Option<usize> {
        match self {
            Element::TranslateX | Element::TranslateYZ | Element::RotateX | Element::ScaleX => {
                Some(0)
            }
            Element::TranslateY | Element::TranslateZX | Element::RotateY | Element::ScaleY => {
                Some(1)
            }
            Element::TranslateZ | Element::TranslateXY | Element::RotateZ | Element::ScaleZ => {
                Some(2)
            }
            Element::TranslateView => None,
        }
    }

    /// Local-frame unit axis, zero for the view handle.
    pub fn local_axis(&self) -> Vec3 {
        match self.axis_index() {
            Some(0) => Vec3::X,
            Some(1) => Vec3::Y,
            Some(2) => Vec3::Z,
            _ => Vec3::ZERO,
        }
    }

    /// Handle kind owning this element.
    pub fn kind(&self) -> HandleKind {
        match self {
            Element::TranslateX
            | Element::TranslateY
            | Element::TranslateZ
            | Element::TranslateYZ
            | Element::TranslateZX
            | Element::TranslateXY
            | Element::TranslateView => HandleKind::Translation,
            Element::RotateX | Element::RotateY | Element::RotateZ => HandleKind::Rotation,
            Element::ScaleX | Element::ScaleY | Element::ScaleZ => HandleKind::Scale,
        }
    }

    /// True for the planar translation quads.
    pub fn is_plane(&self) -> bool {
        matches!(
            self,
            Element::TranslateYZ | Element::TranslateZX | Element::TranslateXY
        )
    }
}
