//! Ray type used for picking and drag-plane intersection

use glam::{Mat4, Vec3};

use crate::safe_normalize;

/// A half-line starting at `origin` and running along `direction`.
///
/// [`Ray::new`] normalizes the direction. A zero direction stays zero, and
/// every intersection routine treats such a ray as hitting nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point of the ray.
    pub origin: Vec3,
    /// Unit direction, or zero for a degenerate ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: safe_normalize(direction),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// True when the direction has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }

    /// Transform the ray by an affine matrix, renormalizing the direction.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self::new(
            matrix.transform_point3(self.origin),
            matrix.transform_vector3(self.direction),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NEARLY_EPSILON, nearly_vec3};

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.direction, Vec3::NEG_Z);
        assert_eq!(ray.point_at(2.0), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_zero_direction_is_degenerate() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert!(ray.is_degenerate());
        assert_eq!(ray.point_at(10.0), Vec3::ONE);
    }

    #[test]
    fn test_transformed() {
        let m = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0))
            * Mat4::from_scale(Vec3::splat(2.0));
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X).transformed(&m);
        assert!(nearly_vec3(ray.origin, Vec3::new(1.0, 2.0, 0.0), NEARLY_EPSILON));
        assert!(nearly_vec3(ray.direction, Vec3::X, NEARLY_EPSILON));
    }
}
