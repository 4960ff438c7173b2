//! The per-frame gizmo driver
//!
//! Usage is strictly `begin → handle::* → end`:
//!
//! ```
//! use gizmesh::{GizmoSystem, HandleId, Trs, handle};
//! use glam::{Quat, Vec3};
//!
//! let mut gizmos = GizmoSystem::default();
//! let mut object = Trs::IDENTITY;
//! let id = HandleId::from_name("object");
//!
//! let camera = Vec3::new(0.0, 0.0, 5.0);
//! gizmos.begin(camera, Quat::IDENTITY, camera, Vec3::NEG_Z, false);
//! handle::translation(&mut gizmos, id, &mut object, false);
//! let buffers = gizmos.end();
//! assert!(!buffers.is_empty());
//! ```

use gizmesh_math::{Ray, RigidTransform, Trs};
use glam::{Quat, Vec3};

use crate::buffer::{DrawCommand, FrameAssembler, GizmoBuffers};
use crate::config::GizmoConfig;
use crate::element::Element;
use crate::frame::FrameState;
use crate::geometry::ShapeLibrary;
use crate::hash::HandleId;
use crate::interaction::{HandleRequest, InteractionMap};

/// Owns every piece of gizmo state: configuration, cached shapes, the
/// per-id interaction map and the frame buffers.
#[derive(Debug)]
pub struct GizmoSystem {
    config: GizmoConfig,
    shapes: ShapeLibrary,
    interactions: InteractionMap,
    assembler: FrameAssembler,
    frame: Option<FrameState>,
    frame_index: u64,
    last_button: bool,
}

impl Default for GizmoSystem {
    fn default() -> Self {
        Self::new(GizmoConfig::default())
    }
}

impl GizmoSystem {
    /// Create a system with the given configuration.
    pub fn new(config: GizmoConfig) -> Self {
        Self {
            config,
            shapes: ShapeLibrary::new(),
            interactions: InteractionMap::new(),
            assembler: FrameAssembler::new(),
            frame: None,
            frame_index: 0,
            last_button: false,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect with the next handle call.
    pub fn set_config(&mut self, config: GizmoConfig) {
        self.config = config;
    }

    /// Start a frame.
    ///
    /// Stores the camera pose and pointer state and drops the previous
    /// frame's buffers. No hit testing happens here.
    pub fn begin(
        &mut self,
        camera_position: Vec3,
        camera_rotation: Quat,
        ray_origin: Vec3,
        ray_direction: Vec3,
        button: bool,
    ) {
        debug_assert!(self.frame.is_none(), "begin called twice without end");

        self.frame_index += 1;
        let pressed = button && !self.last_button;
        self.last_button = button;

        self.frame = Some(FrameState {
            camera_position,
            camera_rotation: camera_rotation.normalize(),
            ray: Ray::new(ray_origin, ray_direction),
            button,
            pressed,
            index: self.frame_index,
        });

        if let Some(after) = self.config.evict_after_frames {
            self.interactions.evict(self.frame_index, after);
        }
        self.assembler.clear();
    }

    /// Run one handle for this frame. Returns true if `transform` changed.
    ///
    /// With a `parent`, `transform` is relative to it: the handle is placed
    /// and dragged in world space and the result is written back relative
    /// to the parent.
    pub(crate) fn manipulate(
        &mut self,
        request: HandleRequest,
        parent: Option<&RigidTransform>,
        transform: &mut Trs,
    ) -> bool {
        debug_assert!(self.frame.is_some(), "handle call outside begin/end");
        let Some(frame) = self.frame else {
            return false;
        };

        let mut world = match parent {
            Some(parent) => parent.apply_trs(transform),
            None => *transform,
        };
        let outcome = self
            .interactions
            .update(&frame, &self.config, request, &mut world);
        if outcome.changed {
            *transform = match parent {
                Some(parent) => parent.inverse().apply_trs(&world),
                None => world,
            };
        }

        self.assembler.push(DrawCommand {
            kind: request.kind,
            frame: outcome.frame,
            highlight: outcome.highlight,
        });
        outcome.changed
    }

    /// Finish the frame and assemble its buffers.
    ///
    /// The returned view borrows the system, so it cannot outlive the frame.
    pub fn end(&mut self) -> GizmoBuffers<'_> {
        debug_assert!(self.frame.is_some(), "end called without begin");
        self.frame = None;
        self.assembler.assemble(&self.shapes, &self.config.colors);
        self.assembler.buffers()
    }

    /// Buffers of the last finished frame.
    pub fn buffers(&self) -> GizmoBuffers<'_> {
        self.assembler.buffers()
    }

    /// Whether `id` is being dragged.
    pub fn is_dragging(&self, id: HandleId) -> bool {
        self.interactions
            .get(id)
            .is_some_and(|state| state.is_dragging())
    }

    /// Sub-element of `id` under the pointer, if not dragging.
    pub fn hovered(&self, id: HandleId) -> Option<Element> {
        self.interactions.get(id).and_then(|state| state.hovered())
    }

    /// Id currently dragging, if any.
    pub fn active_id(&self) -> Option<HandleId> {
        self.interactions.active()
    }

    /// Number of ids with retained interaction state.
    pub fn tracked_handles(&self) -> usize {
        self.interactions.len()
    }
}
