//! Transform value types
//!
//! [`Trs`] is the translation/rotation/scale triple a gizmo manipulates.
//! [`RigidTransform`] drops the scale and composes like a matrix.

use std::ops::Mul;

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::DEGENERATE_EPSILON;

/// Translation, rotation and scale of one object.
///
/// The rotation is expected to be unit length. Use [`Trs::normalized`]
/// before reading it if it may have drifted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trs {
    /// Position.
    pub translation: Vec3,
    /// Orientation (unit quaternion).
    pub rotation: Quat,
    /// Per-axis scale, positive.
    pub scale: Vec3,
}

impl Default for Trs {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Trs {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform from its three parts.
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Copy with the rotation renormalized.
    pub fn normalized(&self) -> Self {
        Self {
            rotation: self.rotation.normalize(),
            ..*self
        }
    }

    /// Compose into an affine matrix, `T * R * S`.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation.normalize(),
            self.translation,
        )
    }

    /// Decompose an affine matrix back into translation, rotation and scale.
    ///
    /// Translation comes from the fourth column, scale from the magnitudes of
    /// the upper-left columns, rotation from those columns once normalized.
    /// Negative scale cannot be told apart from a rotation and is reported
    /// as positive.
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let translation = matrix.w_axis.truncate();
        let columns = [
            matrix.x_axis.truncate(),
            matrix.y_axis.truncate(),
            matrix.z_axis.truncate(),
        ];
        let scale = Vec3::new(
            columns[0].length(),
            columns[1].length(),
            columns[2].length(),
        );

        let unit = |column: Vec3, length: f32| {
            if length * length <= DEGENERATE_EPSILON {
                Vec3::ZERO
            } else {
                column / length
            }
        };
        let basis = Mat3::from_cols(
            unit(columns[0], scale.x),
            unit(columns[1], scale.y),
            unit(columns[2], scale.z),
        );
        let rotation = if basis.determinant().abs() <= DEGENERATE_EPSILON {
            Quat::IDENTITY
        } else {
            Quat::from_mat3(&basis).normalize()
        };

        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Transform a point from object space to parent space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.translation
    }

    /// Transform a direction (no translation) from object space.
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * (vector * self.scale)
    }

    /// The rigid part of this transform.
    pub fn rigid(&self) -> RigidTransform {
        RigidTransform::new(self.translation, self.rotation)
    }
}

/// Rotation followed by translation, without scale.
///
/// Multiplication follows the matrix convention: `(a * b)` applies `b`
/// first, then `a`. [`RigidTransform::then`] reads left to right instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    /// Translation applied after rotating.
    pub translation: Vec3,
    /// Rotation (unit quaternion).
    pub rotation: Quat,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigidTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a rigid transform.
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Map a point through the transform.
    pub fn apply_position(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    /// Rotate a direction.
    pub fn apply_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }

    /// The inverse transform.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.conjugate();
        Self {
            translation: -(rotation * self.translation),
            rotation,
        }
    }

    /// Carry `trs`, expressed in this transform's local frame, out to its
    /// parent space. Scale passes through unchanged.
    pub fn apply_trs(&self, trs: &Trs) -> Trs {
        Trs::new(
            self.apply_position(trs.translation),
            (self.rotation * trs.rotation).normalize(),
            trs.scale,
        )
    }

    /// Apply `self`, then `next`.
    pub fn then(self, next: Self) -> Self {
        next * self
    }

    /// Affine matrix form.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }
}

impl Mul for RigidTransform {
    type Output = RigidTransform;

    fn mul(self, rhs: RigidTransform) -> RigidTransform {
        RigidTransform {
            translation: self.rotation * rhs.translation + self.translation,
            rotation: (self.rotation * rhs.rotation).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NEARLY_EPSILON, nearly_quat, nearly_vec3};

    fn assert_trs_nearly(a: &Trs, b: &Trs) {
        assert!(
            nearly_vec3(a.translation, b.translation, NEARLY_EPSILON),
            "translation {:?} != {:?}",
            a.translation,
            b.translation
        );
        assert!(
            nearly_quat(a.rotation, b.rotation, NEARLY_EPSILON),
            "rotation {:?} != {:?}",
            a.rotation,
            b.rotation
        );
        assert!(
            nearly_vec3(a.scale, b.scale, NEARLY_EPSILON),
            "scale {:?} != {:?}",
            a.scale,
            b.scale
        );
    }

    #[test]
    fn test_decompose_translation() {
        let trs = Trs::from_matrix(&Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(trs.translation, Vec3::new(1.0, 2.0, 3.0));
        assert!(nearly_quat(trs.rotation, Quat::IDENTITY, NEARLY_EPSILON));
        assert_eq!(trs.scale, Vec3::ONE);
    }

    #[test]
    fn test_decompose_rotation_translation() {
        let rotation = Quat::from_axis_angle(Vec3::X, 1.0);
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::from_quat(rotation);
        let trs = Trs::from_matrix(&m);
        assert!(nearly_vec3(
            trs.translation,
            Vec3::new(1.0, 2.0, 3.0),
            NEARLY_EPSILON
        ));
        assert!(nearly_quat(trs.rotation, rotation, NEARLY_EPSILON));
    }

    #[test]
    fn test_decompose_full() {
        let expected = Trs::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_axis_angle(Vec3::X, 1.0),
            Vec3::new(1.0, 2.0, 3.0),
        );
        let m = Mat4::from_translation(expected.translation)
            * Mat4::from_quat(expected.rotation)
            * Mat4::from_scale(expected.scale);
        assert_trs_nearly(&Trs::from_matrix(&m), &expected);
    }

    #[test]
    fn test_compose_decompose_round_trip() {
        let axes = [
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            Vec3::new(-0.3, 0.5, 0.8).normalize(),
        ];
        let scales = [
            Vec3::ONE,
            Vec3::splat(0.25),
            Vec3::new(0.5, 2.0, 4.0),
            Vec3::new(3.0, 0.1, 1.5),
        ];
        for (i, axis) in axes.iter().enumerate() {
            for (j, scale) in scales.iter().enumerate() {
                let angle = 0.4 + i as f32 * 0.9 + j as f32 * 0.3;
                let trs = Trs::new(
                    Vec3::new(i as f32 - 2.0, j as f32 * 0.5, -1.5),
                    Quat::from_axis_angle(*axis, angle),
                    *scale,
                );
                assert_trs_nearly(&Trs::from_matrix(&trs.matrix()), &trs);
            }
        }
    }

    #[test]
    fn test_transform_point_matches_matrix() {
        let trs = Trs::new(
            Vec3::new(0.0, 1.0, 2.0),
            Quat::from_axis_angle(Vec3::Z, 0.5),
            Vec3::new(2.0, 1.0, 0.5),
        );
        let p = Vec3::new(1.0, -1.0, 3.0);
        assert!(nearly_vec3(
            trs.transform_point(p),
            trs.matrix().transform_point3(p),
            NEARLY_EPSILON
        ));
    }

    #[test]
    fn test_rigid_apply_position() {
        let a = RigidTransform::new(
            Vec3::X,
            Quat::from_axis_angle(Vec3::X, 90f32.to_radians()),
        );
        let p = a.apply_position(Vec3::new(1.0, 2.0, 3.0));
        assert!(nearly_vec3(p, Vec3::new(2.0, -3.0, 2.0), NEARLY_EPSILON));
    }

    #[test]
    fn test_rigid_apply_trs() {
        let parent = RigidTransform::new(
            Vec3::X,
            Quat::from_axis_angle(Vec3::Z, 90f32.to_radians()),
        );
        let local = Trs::new(Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY, Vec3::splat(3.0));
        let world = parent.apply_trs(&local);
        assert!(nearly_vec3(world.translation, Vec3::new(1.0, 2.0, 0.0), NEARLY_EPSILON));
        assert!(nearly_quat(world.rotation, parent.rotation, NEARLY_EPSILON));
        assert_eq!(world.scale, Vec3::splat(3.0));
        assert_trs_nearly(&parent.inverse().apply_trs(&world), &local);
    }

    #[test]
    fn test_rigid_composition_order() {
        let a = RigidTransform::new(
            Vec3::X,
            Quat::from_axis_angle(Vec3::X, 90f32.to_radians()),
        );
        let b = RigidTransform::new(
            Vec3::X,
            Quat::from_axis_angle(Vec3::Y, 90f32.to_radians()),
        );
        let c = a.then(b).apply_position(Vec3::X);
        assert!(nearly_vec3(c, Vec3::new(1.0, 0.0, -2.0), NEARLY_EPSILON));

        let p = Vec3::new(0.3, -0.7, 1.1);
        assert!(nearly_vec3(
            (a * b).apply_position(p),
            a.apply_position(b.apply_position(p)),
            NEARLY_EPSILON
        ));
    }

    #[test]
    fn test_rigid_inverse() {
        let t = RigidTransform::new(
            Vec3::new(1.0, -2.0, 0.5),
            Quat::from_axis_angle(Vec3::new(1.0, 1.0, 1.0).normalize(), 1.2),
        );
        let p = Vec3::new(4.0, 5.0, 6.0);
        assert!(nearly_vec3(
            t.inverse().apply_position(t.apply_position(p)),
            p,
            1e-4
        ));
    }
}
