//! Drag planes and the delta rules that turn pointer motion into transforms

use gizmesh_math::{Ray, Trs, safe_normalize};
use glam::{Quat, Vec3};

use crate::collision::ray_plane_intersection;
use crate::config::SnapConfig;
use crate::constants::interaction::{MIN_SCALE, PARALLEL_EPSILON};
use crate::element::Element;
use crate::frame::{FrameState, GizmoFrame};

/// Plane the pointer ray is intersected with while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPlane {
    /// Point on the plane (the gizmo center at drag start).
    pub origin: Vec3,
    /// Unit normal.
    pub normal: Vec3,
}

impl DragPlane {
    /// Where `ray` crosses the plane, if it does in front of its origin.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        ray_plane_intersection(ray.origin, ray.direction, self.origin, self.normal)
    }
}

/// Plane containing `axis` that faces the camera as much as possible.
///
/// `n = axis × (axis × (center − camera))`. Falls back to any plane through
/// the axis when the camera looks straight down it.
pub fn axis_drag_plane_normal(axis: Vec3, center: Vec3, camera_position: Vec3) -> Vec3 {
    let to_center = center - camera_position;
    let normal = safe_normalize(axis.cross(axis.cross(to_center)));
    if normal == Vec3::ZERO {
        tracing::warn!(
            "Drag axis {:?} is parallel to the view direction, using an arbitrary plane",
            axis
        );
        axis.any_orthonormal_vector()
    } else {
        normal
    }
}

/// How the offset between the click point and the current point becomes a
/// new transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaRule {
    /// Move along one world axis by the projected offset
    AxisProjection {
        /// Unit drag axis
        axis: Vec3,
    },
    /// Move freely within a plane spanned by two unit axes
    PlaneProjection {
        /// First in-plane axis
        u: Vec3,
        /// Second in-plane axis
        v: Vec3,
    },
    /// Rotate about an axis by the signed angle swept around the center
    AngleAboutAxis {
        /// Unit rotation axis
        axis: Vec3,
    },
    /// Scale by the ratio of the current to the initial distance along an axis
    RatioFromOrigin {
        /// Unit axis the ratio is measured along
        axis: Vec3,
        /// Scale component driven by this handle
        component: usize,
        /// Apply the ratio to every component
        uniform: bool,
    },
}

/// Everything captured on the first frame of a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Sub-element being dragged; locked until release
    pub element: Element,
    /// Delta rule for the element
    pub rule: DeltaRule,
    /// Plane intersected every frame of the drag
    pub plane: DragPlane,
    /// Pointer ray hit on `plane` at drag start
    pub click_point: Vec3,
    /// Transform at drag start; deltas are always applied to it
    pub snapshot: Trs,
}

impl DragAnchor {
    /// Capture an anchor for `element`, or `None` if the pointer ray does not
    /// cross the element's drag plane.
    pub fn start(
        element: Element,
        gizmo: &GizmoFrame,
        state: &FrameState,
        transform: &Trs,
        uniform: bool,
    ) -> Option<Self> {
        let center = gizmo.center;
        let (rule, normal) = match element {
            Element::TranslateX | Element::TranslateY | Element::TranslateZ => {
                let axis = gizmo.axis(element.axis_index()?);
                let normal = axis_drag_plane_normal(axis, center, state.camera_position);
                (DeltaRule::AxisProjection { axis }, normal)
            }
            Element::TranslateYZ | Element::TranslateZX | Element::TranslateXY => {
                let i = element.axis_index()?;
                let rule = DeltaRule::PlaneProjection {
                    u: gizmo.axis((i + 1) % 3),
                    v: gizmo.axis((i + 2) % 3),
                };
                (rule, gizmo.axis(i))
            }
            Element::TranslateView => {
                let rotation = state.camera_rotation.normalize();
                let rule = DeltaRule::PlaneProjection {
                    u: rotation * Vec3::X,
                    v: rotation * Vec3::Y,
                };
                (rule, state.view_normal())
            }
            Element::RotateX | Element::RotateY | Element::RotateZ => {
                let axis = gizmo.axis(element.axis_index()?);
                (DeltaRule::AngleAboutAxis { axis }, axis)
            }
            Element::ScaleX | Element::ScaleY | Element::ScaleZ => {
                let component = element.axis_index()?;
                let axis = gizmo.axis(component);
                let normal = axis_drag_plane_normal(axis, center, state.camera_position);
                let rule = DeltaRule::RatioFromOrigin {
                    axis,
                    component,
                    uniform,
                };
                (rule, normal)
            }
        };

        let plane = DragPlane {
            origin: center,
            normal,
        };
        let click_point = plane.intersect(&state.ray)?;

        Some(Self {
            element,
            rule,
            plane,
            click_point,
            snapshot: transform.normalized(),
        })
    }

    /// Transform for the pointer now hitting the drag plane at `point`.
    pub fn apply(&self, point: Vec3, snap: &SnapConfig) -> Trs {
        self.rule.apply(self, point, snap)
    }
}

impl DeltaRule {
    /// Apply the rule to `anchor.snapshot` for the current plane point.
    pub fn apply(&self, anchor: &DragAnchor, point: Vec3, snap: &SnapConfig) -> Trs {
        let mut result = anchor.snapshot;
        let offset = point - anchor.click_point;

        match *self {
            DeltaRule::AxisProjection { axis } => {
                let distance = snap_value(offset.dot(axis), snap.translation);
                result.translation += axis * distance;
            }
            DeltaRule::PlaneProjection { u, v } => {
                let du = snap_value(offset.dot(u), snap.translation);
                let dv = snap_value(offset.dot(v), snap.translation);
                result.translation += u * du + v * dv;
            }
            DeltaRule::AngleAboutAxis { axis } => {
                let from = reject(anchor.click_point - anchor.plane.origin, axis);
                let to = reject(point - anchor.plane.origin, axis);
                if from.length_squared() < PARALLEL_EPSILON
                    || to.length_squared() < PARALLEL_EPSILON
                {
                    return result;
                }
                let angle = axis.dot(from.cross(to)).atan2(from.dot(to));
                let angle = snap_value(angle, snap.rotation_degrees.map(f32::to_radians));
                let delta = Quat::from_axis_angle(axis, angle);
                result.rotation = (delta * result.rotation).normalize();
            }
            DeltaRule::RatioFromOrigin {
                axis,
                component,
                uniform,
            } => {
                let initial = (anchor.click_point - anchor.plane.origin).dot(axis);
                if initial.abs() < PARALLEL_EPSILON {
                    return result;
                }
                let current = (point - anchor.plane.origin).dot(axis);
                let ratio = snap_value(current / initial, snap.scale);
                if uniform {
                    result.scale *= ratio;
                } else {
                    result.scale[component] *= ratio;
                }
                result.scale = result.scale.max(Vec3::splat(MIN_SCALE));
            }
        }

        result
    }
}

/// Component of `v` perpendicular to the unit vector `axis`.
fn reject(v: Vec3, axis: Vec3) -> Vec3 {
    v - axis * v.dot(axis)
}

/// Round `value` to the nearest multiple of `step`; no-op without a valid step.
fn snap_value(value: f32, step: Option<f32>) -> f32 {
    match step {
        Some(step) if step > 0.0 && step.is_finite() => (value / step).round() * step,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gizmesh_math::{NEARLY_EPSILON, nearly, nearly_quat, nearly_vec3};
    use std::f32::consts::FRAC_PI_2;

    fn frame_state(camera_position: Vec3, origin: Vec3, direction: Vec3) -> FrameState {
        FrameState {
            camera_position,
            camera_rotation: Quat::IDENTITY,
            ray: Ray::new(origin, direction),
            button: true,
            pressed: true,
            index: 1,
        }
    }

    fn start(element: Element, state: &FrameState, uniform: bool) -> Option<DragAnchor> {
        let gizmo = GizmoFrame::new(Vec3::ZERO, Quat::IDENTITY, 1.0);
        DragAnchor::start(element, &gizmo, state, &Trs::IDENTITY, uniform)
    }

    /// Camera on +Z looking down -Z through `(x, y)`
    fn from_front(x: f32, y: f32) -> FrameState {
        frame_state(Vec3::new(0.0, 0.0, 5.0), Vec3::new(x, y, 5.0), Vec3::NEG_Z)
    }

    #[test]
    fn test_axis_plane_faces_camera() {
        let normal = axis_drag_plane_normal(Vec3::X, Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert!(nearly_vec3(normal, Vec3::Z, NEARLY_EPSILON));
        let normal = axis_drag_plane_normal(Vec3::X, Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0));
        assert!(nearly_vec3(normal, Vec3::Y, NEARLY_EPSILON));
    }

    #[test]
    fn test_axis_plane_degenerate_view() {
        let normal = axis_drag_plane_normal(Vec3::X, Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        assert!(nearly(normal.length(), 1.0, NEARLY_EPSILON));
        assert!(normal.dot(Vec3::X).abs() < NEARLY_EPSILON);
    }

    #[test]
    fn test_axis_projection() {
        let anchor = start(Element::TranslateX, &from_front(1.0, 0.0), false).unwrap();
        assert!(nearly_vec3(anchor.click_point, Vec3::X, NEARLY_EPSILON));

        // Off-axis motion is dropped
        let moved = anchor.apply(Vec3::new(3.0, 0.7, 0.0), &SnapConfig::default());
        assert!(nearly_vec3(moved.translation, Vec3::new(2.0, 0.0, 0.0), NEARLY_EPSILON));
    }

    #[test]
    fn test_translation_snapping() {
        let anchor = start(Element::TranslateX, &from_front(1.0, 0.0), false).unwrap();
        let snap = SnapConfig {
            translation: Some(0.5),
            ..Default::default()
        };
        let moved = anchor.apply(Vec3::new(1.8, 0.0, 0.0), &snap);
        assert!(nearly_vec3(moved.translation, Vec3::new(1.0, 0.0, 0.0), NEARLY_EPSILON));
    }

    #[test]
    fn test_plane_projection() {
        let anchor = start(Element::TranslateXY, &from_front(0.5, 0.5), false).unwrap();
        let moved = anchor.apply(Vec3::new(1.5, -0.5, 0.0), &SnapConfig::default());
        assert!(nearly_vec3(moved.translation, Vec3::new(1.0, -1.0, 0.0), NEARLY_EPSILON));
    }

    #[test]
    fn test_view_plane_projection() {
        let anchor = start(Element::TranslateView, &from_front(0.05, 0.0), false).unwrap();
        assert!(nearly_vec3(anchor.plane.normal, Vec3::Z, NEARLY_EPSILON));
        let moved = anchor.apply(Vec3::new(1.05, 2.0, 0.0), &SnapConfig::default());
        assert!(nearly_vec3(moved.translation, Vec3::new(1.0, 2.0, 0.0), NEARLY_EPSILON));
    }

    #[test]
    fn test_angle_sign_follows_right_hand_rule() {
        let r = 1.05 * std::f32::consts::FRAC_1_SQRT_2;
        let state = frame_state(Vec3::new(0.0, 5.0, 0.0), Vec3::new(r, 5.0, r), Vec3::NEG_Y);
        let anchor = start(Element::RotateY, &state, false).unwrap();
        let rotated = anchor.apply(Vec3::new(r, 0.0, -r), &SnapConfig::default());
        let expected = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2) * Trs::IDENTITY.rotation;
        assert!(nearly_quat(rotated.rotation, expected, NEARLY_EPSILON));
    }

    #[test]
    fn test_rotation_snapping() {
        let anchor = start(Element::RotateZ, &from_front(1.0, 0.0), false).unwrap();
        let snap = SnapConfig {
            rotation_degrees: Some(45.0),
            ..Default::default()
        };
        // 50 degrees snaps to 45
        let (sin, cos) = 50f32.to_radians().sin_cos();
        let rotated = anchor.apply(Vec3::new(cos, sin, 0.0), &snap);
        let expected = Quat::from_axis_angle(Vec3::Z, 45f32.to_radians());
        assert!(nearly_quat(rotated.rotation, expected, NEARLY_EPSILON));
    }

    #[test]
    fn test_angle_at_center_keeps_rotation() {
        let anchor = start(Element::RotateZ, &from_front(1.0, 0.0), false).unwrap();
        let rotated = anchor.apply(Vec3::ZERO, &SnapConfig::default());
        assert_eq!(rotated.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_ratio_single_axis() {
        let camera = Vec3::new(1.125, 0.0, 5.0);
        let state = frame_state(camera, camera, Vec3::NEG_Z);
        let anchor = start(Element::ScaleX, &state, false).unwrap();
        let scaled = anchor.apply(Vec3::new(2.25, 0.3, 0.0), &SnapConfig::default());
        assert!(nearly_vec3(scaled.scale, Vec3::new(2.0, 1.0, 1.0), NEARLY_EPSILON));
    }

    #[test]
    fn test_ratio_floor() {
        let camera = Vec3::new(1.125, 0.0, 5.0);
        let state = frame_state(camera, camera, Vec3::NEG_Z);
        let anchor = start(Element::ScaleX, &state, true).unwrap();
        let scaled = anchor.apply(Vec3::new(-1.0, 0.0, 0.0), &SnapConfig::default());
        assert_eq!(scaled.scale, Vec3::splat(MIN_SCALE));
        let scaled = anchor.apply(Vec3::ZERO, &SnapConfig::default());
        assert_eq!(scaled.scale, Vec3::splat(MIN_SCALE));
    }

    #[test]
    fn test_start_needs_plane_hit() {
        // Ray pointing away from the drag plane
        let state = frame_state(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 5.0), Vec3::Z);
        assert!(start(Element::TranslateX, &state, false).is_none());
    }

    #[test]
    fn test_snap_value() {
        assert_eq!(snap_value(1.3, None), 1.3);
        assert_eq!(snap_value(1.3, Some(0.0)), 1.3);
        assert_eq!(snap_value(1.3, Some(0.5)), 1.5);
        assert_eq!(snap_value(-1.2, Some(0.5)), -1.0);
    }
}
