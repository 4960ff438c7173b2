//! Per-handle interaction state machine
//!
//! Every handle id owns an [`InteractionState`] that moves through
//! `Idle → Hovered → Dragging → Idle`. One generic machine drives all three
//! handle kinds; the kind only decides which [`DeltaRule`] the drag uses.
//!
//! A drag starts on the frame the button goes down over a sub-element and
//! locks that sub-element and its drag plane until the button is released.
//! While one id drags, every other id is inert.

mod rules;

pub use rules::{DeltaRule, DragAnchor, DragPlane, axis_drag_plane_normal};

use std::collections::HashMap;

use gizmesh_math::Trs;
use glam::Quat;

use crate::buffer::Highlight;
use crate::collision::pick;
use crate::config::GizmoConfig;
use crate::element::{Element, HandleKind};
use crate::frame::{FrameState, GizmoFrame};
use crate::hash::HandleId;

/// Where a handle is in its interaction cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    /// Pointer is not over the handle
    #[default]
    Idle,
    /// Pointer is over a sub-element, button not pressed on it
    Hovered(Element),
    /// Sub-element is being dragged
    Dragging(DragAnchor),
}

/// State retained for one handle id
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    /// Current phase
    pub phase: Phase,
    /// Last frame index this id was used in
    pub last_seen_frame: u64,
}

impl InteractionState {
    /// Hovered sub-element, if any.
    pub fn hovered(&self) -> Option<Element> {
        match self.phase {
            Phase::Hovered(element) => Some(element),
            _ => None,
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }
}

/// One handle call's parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRequest {
    /// Handle identity
    pub id: HandleId,
    /// Which handle to run
    pub kind: HandleKind,
    /// Orient the handle axes by the object's rotation
    pub local: bool,
    /// Scale every component by one ratio (scale handles only)
    pub uniform: bool,
}

/// Result of one state machine step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// The transform was modified
    pub changed: bool,
    /// Gizmo placement after the update, for drawing
    pub frame: GizmoFrame,
    /// Sub-element to highlight
    pub highlight: Highlight,
}

/// Interaction states keyed by handle id
#[derive(Debug, Default)]
pub struct InteractionMap {
    states: HashMap<HandleId, InteractionState>,
    active: Option<HandleId>,
}

impl InteractionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `id`, if it was ever used.
    pub fn get(&self, id: HandleId) -> Option<&InteractionState> {
        self.states.get(&id)
    }

    /// Id currently dragging, if any.
    pub fn active(&self) -> Option<HandleId> {
        self.active
    }

    /// Number of retained states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when no state is retained.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Run one frame of the state machine for `request`, updating `transform`
    /// in place.
    pub fn update(
        &mut self,
        frame: &FrameState,
        config: &GizmoConfig,
        request: HandleRequest,
        transform: &mut Trs,
    ) -> Outcome {
        let id = request.id;
        let blocked = self.active.is_some_and(|active| active != id);
        let state = self.states.entry(id).or_default();
        state.last_seen_frame = frame.index;

        if blocked {
            state.phase = Phase::Idle;
            return Outcome {
                changed: false,
                frame: gizmo_frame(frame, config, request, transform),
                highlight: Highlight::None,
            };
        }

        if let Phase::Dragging(anchor) = state.phase {
            if frame.button {
                let mut changed = false;
                if let Some(point) = anchor.plane.intersect(&frame.ray) {
                    let next = anchor.apply(point, &config.snap);
                    changed = next != *transform;
                    *transform = next;
                }
                return Outcome {
                    changed,
                    frame: gizmo_frame(frame, config, request, transform),
                    highlight: Highlight::Active(anchor.element),
                };
            }

            tracing::debug!("Released {:?} on handle {:?}", anchor.element, id);
            state.phase = Phase::Idle;
            self.active = None;
        }

        let gizmo = gizmo_frame(frame, config, request, transform);
        let hit = pick(request.kind, &gizmo.to_local(&frame.ray)).map(|(element, _)| element);

        if let Some(element) = hit
            && frame.pressed
            && let Some(anchor) =
                DragAnchor::start(element, &gizmo, frame, transform, request.uniform)
        {
            tracing::debug!("Started dragging {:?} on handle {:?}", element, id);
            state.phase = Phase::Dragging(anchor);
            self.active = Some(id);
            return Outcome {
                changed: false,
                frame: gizmo,
                highlight: Highlight::Active(element),
            };
        }

        let phase = hit.map_or(Phase::Idle, Phase::Hovered);
        if phase != state.phase {
            tracing::trace!("Handle {:?} hover: {:?}", id, hit);
            state.phase = phase;
        }

        Outcome {
            changed: false,
            frame: gizmo,
            highlight: hit.map_or(Highlight::None, Highlight::Hovered),
        }
    }

    /// Drop states that skipped more than `after` frames before `current_frame`.
    ///
    /// Runs before any handle call of `current_frame`, so a state used in the
    /// previous frame has skipped none. An evicted dragging state also
    /// releases the active drag.
    pub fn evict(&mut self, current_frame: u64, after: u32) {
        let active = &mut self.active;
        self.states.retain(|id, state| {
            let skipped = current_frame
                .saturating_sub(state.last_seen_frame)
                .saturating_sub(1);
            let keep = skipped <= u64::from(after);
            if !keep && state.is_dragging() {
                tracing::warn!("Evicting handle {:?} in the middle of a drag", id);
                if *active == Some(*id) {
                    *active = None;
                }
            }
            keep
        });
    }
}

/// Placement of the gizmo for `transform` this frame.
///
/// Scale handles always follow the object's rotation, since scale is applied
/// along the object's own axes.
fn gizmo_frame(
    frame: &FrameState,
    config: &GizmoConfig,
    request: HandleRequest,
    transform: &Trs,
) -> GizmoFrame {
    let local = request.local || request.kind == HandleKind::Scale;
    let orientation = if local {
        transform.rotation
    } else {
        Quat::IDENTITY
    };
    let scale = config
        .sizing
        .scale_for(frame.camera_position, transform.translation);
    GizmoFrame::new(transform.translation, orientation, scale)
}
