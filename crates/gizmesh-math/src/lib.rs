//! gizmesh linear-algebra kernel
//!
//! Value types shared by the gizmo engine, layered on top of `glam`.
//!
//! # Module Structure
//!
//! ```text
//! gizmesh-math/
//! ├── ray.rs        # Ray (origin + direction)
//! ├── transform.rs  # Trs (compose/decompose) and RigidTransform
//! └── lib.rs        # Tolerance helpers, safe normalization
//! ```
//!
//! `glam` provides the vector, quaternion and matrix primitives. This crate
//! only adds what the gizmo needs beyond them: a TRS triple whose
//! decomposition follows the column-magnitude rule, a rigid transform with
//! explicit composition order, and guarded normalization.

pub mod ray;
pub mod transform;

pub use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
pub use ray::Ray;
pub use transform::{RigidTransform, Trs};

/// Squared-length threshold below which a vector is treated as zero.
pub const DEGENERATE_EPSILON: f32 = 1e-12;

/// Default absolute tolerance for approximate comparisons.
pub const NEARLY_EPSILON: f32 = 1e-5;

/// Normalize `v`, returning [`Vec3::ZERO`] for zero-length input.
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq <= DEGENERATE_EPSILON || !len_sq.is_finite() {
        Vec3::ZERO
    } else {
        v / len_sq.sqrt()
    }
}

/// Absolute-tolerance float comparison.
pub fn nearly(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Component-wise absolute-tolerance comparison.
pub fn nearly_vec3(a: Vec3, b: Vec3, epsilon: f32) -> bool {
    (a - b).abs().max_element() <= epsilon
}

/// Compare two rotations, treating `q` and `-q` as the same rotation.
pub fn nearly_quat(a: Quat, b: Quat, epsilon: f32) -> bool {
    let a = Vec4::from(a);
    let b = Vec4::from(b);
    (a - b).abs().max_element() <= epsilon || (a + b).abs().max_element() <= epsilon
}
