//! Per-frame input snapshot and the placement of one gizmo

use gizmesh_math::{Ray, safe_normalize};
use glam::{Mat4, Quat, Vec3};

/// Camera pose, pointer ray and button state for one frame.
///
/// Built by [`crate::GizmoSystem::begin`] and dropped by
/// [`crate::GizmoSystem::end`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Camera position in world space.
    pub camera_position: Vec3,
    /// Camera orientation.
    pub camera_rotation: Quat,
    /// Pointer ray in world space.
    pub ray: Ray,
    /// Button held this frame.
    pub button: bool,
    /// Button went down this frame (was up the frame before).
    pub pressed: bool,
    /// Monotonic frame counter.
    pub index: u64,
}

impl FrameState {
    /// Normal of the camera-facing plane.
    ///
    /// The sign does not matter for plane intersection, so this is the
    /// camera's local Z whichever way the camera looks along it.
    pub fn view_normal(&self) -> Vec3 {
        let normal = safe_normalize(self.camera_rotation.normalize() * Vec3::Z);
        if normal == Vec3::ZERO {
            safe_normalize(self.ray.direction)
        } else {
            normal
        }
    }
}

/// Where a gizmo sits this frame: center, axis orientation and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoFrame {
    /// World-space center (the manipulated object's position).
    pub center: Vec3,
    /// Orientation of the handle axes.
    pub orientation: Quat,
    /// World units per gizmo unit.
    pub scale: f32,
}

impl GizmoFrame {
    /// Create a frame, normalizing the orientation.
    pub fn new(center: Vec3, orientation: Quat, scale: f32) -> Self {
        Self {
            center,
            orientation: orientation.normalize(),
            scale,
        }
    }

    /// World direction of local axis `index`.
    pub fn axis(&self, index: usize) -> Vec3 {
        let local = match index {
            0 => Vec3::X,
            1 => Vec3::Y,
            _ => Vec3::Z,
        };
        self.orientation * local
    }

    /// Bring a world ray into the gizmo's unscaled local frame.
    pub fn to_local(&self, ray: &Ray) -> Ray {
        let inverse = self.orientation.conjugate();
        Ray::new(
            inverse * (ray.origin - self.center) / self.scale,
            inverse * ray.direction,
        )
    }

    /// Convert a local ray parameter back to world distance.
    pub fn to_world_distance(&self, t: f32) -> f32 {
        t * self.scale
    }

    /// Local-to-world matrix used to place the handle meshes.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation,
            self.center,
        )
    }
}
