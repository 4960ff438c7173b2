//! Immediate-mode handle calls
//!
//! Call these between [`GizmoSystem::begin`] and [`GizmoSystem::end`], once
//! per gizmo per frame. Each call hit-tests the pointer, advances the
//! handle's state machine, writes the dragged result into `transform`, and
//! queues the handle for drawing. The return value is true iff `transform`
//! was modified this frame.
//!
//! The `*_in` variants take `transform` relative to an optional parent
//! frame. The handle is drawn and dragged in world space and the result is
//! written back relative to the parent, so a child object can be moved
//! without the caller converting between frames.

use gizmesh_math::{RigidTransform, Trs};

use crate::element::HandleKind;
use crate::hash::HandleId;
use crate::interaction::HandleRequest;
use crate::system::GizmoSystem;

/// Translation handle: axis arrows, plane quads and a view-plane box.
///
/// With `is_local` the axes follow `transform.rotation`, otherwise they are
/// world aligned.
pub fn translation(
    system: &mut GizmoSystem,
    id: HandleId,
    transform: &mut Trs,
    is_local: bool,
) -> bool {
    translation_in(system, id, None, transform, is_local)
}

/// [`translation`] for a `transform` relative to `parent`.
///
/// With `is_local` the axes follow the composed world rotation.
pub fn translation_in(
    system: &mut GizmoSystem,
    id: HandleId,
    parent: Option<&RigidTransform>,
    transform: &mut Trs,
    is_local: bool,
) -> bool {
    system.manipulate(
        HandleRequest {
            id,
            kind: HandleKind::Translation,
            local: is_local,
            uniform: false,
        },
        parent,
        transform,
    )
}

/// Rotation handle: one ring per axis.
///
/// With `is_local` the rings follow `transform.rotation`, otherwise they are
/// world aligned. The result is `delta * rotation` in both cases.
pub fn rotation(
    system: &mut GizmoSystem,
    id: HandleId,
    transform: &mut Trs,
    is_local: bool,
) -> bool {
    rotation_in(system, id, None, transform, is_local)
}

/// [`rotation`] for a `transform` relative to `parent`.
pub fn rotation_in(
    system: &mut GizmoSystem,
    id: HandleId,
    parent: Option<&RigidTransform>,
    transform: &mut Trs,
    is_local: bool,
) -> bool {
    system.manipulate(
        HandleRequest {
            id,
            kind: HandleKind::Rotation,
            local: is_local,
            uniform: false,
        },
        parent,
        transform,
    )
}

/// Scale handle along the object's own axes.
///
/// With `is_uniform` every scale component is multiplied by the dragged
/// ratio; otherwise only the dragged axis changes.
pub fn scale(
    system: &mut GizmoSystem,
    id: HandleId,
    transform: &mut Trs,
    is_uniform: bool,
) -> bool {
    scale_in(system, id, None, transform, is_uniform)
}

/// [`scale`] for a `transform` relative to `parent`.
pub fn scale_in(
    system: &mut GizmoSystem,
    id: HandleId,
    parent: Option<&RigidTransform>,
    transform: &mut Trs,
    is_uniform: bool,
) -> bool {
    system.manipulate(
        HandleRequest {
            id,
            kind: HandleKind::Scale,
            local: true,
            uniform: is_uniform,
        },
        parent,
        transform,
    )
}
