//! Gizmo collision detection utilities
//!
//! Ray-casting against the analytic shapes behind each handle element:
//! cylinders for arrows, bounded plane quads, boxes, and tori for rings.
//! All functions return the ray parameter `t` of the nearest hit with
//! `t >= 0`, or `None`. A zero-length ray direction never hits.

use gizmesh_math::Ray;
use glam::{Vec2, Vec3};

use crate::constants::{gizmo, interaction};
use crate::element::{Element, HandleKind};

/// Ray-cylinder intersection test.
///
/// Tests if a ray intersects with a finite cylinder defined by its axis
/// endpoints and radius.
///
/// # Algorithm
///
/// 1. **Infinite cylinder intersection**: Projects the ray and cylinder axis
///    into the plane perpendicular to the cylinder axis, then solves the
///    resulting 2D quadratic equation.
///
/// 2. **Finite bounds check**: Verifies that the intersection point lies
///    between `cylinder_start` and `cylinder_end`. The far root is tried
///    when the near one falls behind the ray or outside the bounds, so a
///    steep ray entering past an end cap still hits the side.
///
/// A ray running parallel to the axis has no side intersection and
/// reports `None`.
///
/// # Returns
///
/// * `Some(t)` - The ray parameter at the closest intersection point.
/// * `None` - If the ray does not intersect the cylinder.
pub fn ray_cylinder_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    cylinder_start: Vec3,
    cylinder_end: Vec3,
    radius: f32,
) -> Option<f32> {
    let cylinder_length = (cylinder_end - cylinder_start).length();
    if cylinder_length <= f32::EPSILON {
        return None;
    }
    let cylinder_axis = (cylinder_end - cylinder_start) / cylinder_length;

    // d = ray_dir - (ray_dir · axis) * axis
    let d = ray_dir - cylinder_axis * ray_dir.dot(cylinder_axis);
    // o = (ray_origin - cylinder_start) projected the same way
    let o = (ray_origin - cylinder_start)
        - cylinder_axis * (ray_origin - cylinder_start).dot(cylinder_axis);

    // Quadratic coefficients: at² + bt + c = 0
    let a = d.dot(d);
    if a <= interaction::PARALLEL_EPSILON {
        return None;
    }
    let b = 2.0 * d.dot(o);
    let c = o.dot(o) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    [(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)]
        .into_iter()
        .find(|&t| {
            let projection = (ray_origin + ray_dir * t - cylinder_start).dot(cylinder_axis);
            t >= 0.0 && (0.0..=cylinder_length).contains(&projection)
        })
}

/// Ray parameter where the ray crosses a plane, if in front of the origin.
pub fn ray_plane_distance(
    ray_origin: Vec3,
    ray_dir: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let denom = ray_dir.dot(plane_normal);
    // Ray is nearly parallel to the plane
    if denom.abs() < interaction::PARALLEL_EPSILON {
        return None;
    }

    let t = (plane_point - ray_origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;
    }
    Some(t)
}

/// Ray-plane intersection point.
pub fn ray_plane_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<Vec3> {
    ray_plane_distance(ray_origin, ray_dir, plane_point, plane_normal)
        .map(|t| ray_origin + ray_dir * t)
}

/// Ray against an axis-aligned quad lying in the plane `p[axis] == 0`.
///
/// The quad covers `[min, max]` on both remaining axes.
pub fn ray_quad_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    axis: usize,
    min: f32,
    max: f32,
) -> Option<f32> {
    let mut normal = Vec3::ZERO;
    normal[axis] = 1.0;
    let t = ray_plane_distance(ray_origin, ray_dir, Vec3::ZERO, normal)?;
    let hit = ray_origin + ray_dir * t;
    let u = hit[(axis + 1) % 3];
    let v = hit[(axis + 2) % 3];
    if (min..=max).contains(&u) && (min..=max).contains(&v) {
        Some(t)
    } else {
        None
    }
}

/// Ray-box intersection using the slab method.
///
/// A ray starting inside the box hits at `t = 0`.
pub fn ray_aabb_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    min: Vec3,
    max: Vec3,
) -> Option<f32> {
    if ray_dir == Vec3::ZERO {
        return None;
    }

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for i in 0..3 {
        if ray_dir[i].abs() < interaction::PARALLEL_EPSILON {
            if ray_origin[i] < min[i] || ray_origin[i] > max[i] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / ray_dir[i];
        let mut t0 = (min[i] - ray_origin[i]) * inv;
        let mut t1 = (max[i] - ray_origin[i]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Signed distance from `p` to a torus centered at the origin with axis +X.
fn torus_distance(p: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let q = Vec2::new(Vec2::new(p.y, p.z).length() - major_radius, p.x);
    q.length() - minor_radius
}

/// Ray-torus intersection for a torus centered at the origin with axis +X.
///
/// # Algorithm
///
/// Sphere tracing: the torus distance function never overestimates, so
/// stepping along the ray by the current distance cannot skip the surface.
/// Steps never drop below [`interaction::TORUS_MIN_STEP`], otherwise a ray
/// grazing the tube converges too slowly to land on it. The march starts
/// where the ray enters the bounding sphere and gives up after
/// [`interaction::TORUS_MAX_STEPS`] steps or once it leaves the sphere.
///
/// `ray_dir` must be normalized.
pub fn ray_torus_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    major_radius: f32,
    minor_radius: f32,
) -> Option<f32> {
    if ray_dir == Vec3::ZERO {
        return None;
    }

    // Clip the march to the bounding sphere
    let bound = major_radius + minor_radius;
    let b = ray_origin.dot(ray_dir);
    let c = ray_origin.length_squared() - bound * bound;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let t_exit = -b + root;
    if t_exit < 0.0 {
        return None;
    }
    let mut t = (-b - root).max(0.0);

    for _ in 0..interaction::TORUS_MAX_STEPS {
        let distance = torus_distance(ray_origin + ray_dir * t, major_radius, minor_radius);
        if distance < interaction::TORUS_HIT_EPSILON {
            return Some(t);
        }
        t += distance.max(interaction::TORUS_MIN_STEP);
        if t > t_exit {
            return None;
        }
    }

    None
}

/// Hit-test one element in the gizmo's local, unscaled frame.
pub fn element_intersection(element: Element, ray: &Ray) -> Option<f32> {
    if ray.is_degenerate() {
        return None;
    }
    let (origin, dir) = (ray.origin, ray.direction);
    let axis = element.local_axis();

    match element {
        Element::TranslateX | Element::TranslateY | Element::TranslateZ => {
            ray_cylinder_intersection(
                origin,
                dir,
                axis * gizmo::SHAFT_START,
                axis * gizmo::ARROW_LENGTH,
                gizmo::ARROW_HIT_RADIUS,
            )
        }
        Element::TranslateYZ | Element::TranslateZX | Element::TranslateXY => {
            ray_quad_intersection(
                origin,
                dir,
                element.axis_index()?,
                gizmo::PLANE_MIN,
                gizmo::PLANE_MAX,
            )
        }
        Element::TranslateView => ray_aabb_intersection(
            origin,
            dir,
            Vec3::splat(-gizmo::CENTER_HALF_EXTENT),
            Vec3::splat(gizmo::CENTER_HALF_EXTENT),
        ),
        Element::RotateX | Element::RotateY | Element::RotateZ => {
            // Rotate the ray so the ring axis lines up with +X
            let swizzle = |v: Vec3| match element.axis_index() {
                Some(1) => Vec3::new(v.y, v.z, v.x),
                Some(2) => Vec3::new(v.z, v.x, v.y),
                _ => v,
            };
            ray_torus_intersection(
                swizzle(origin),
                swizzle(dir),
                gizmo::RING_RADIUS,
                gizmo::RING_HIT_RADIUS,
            )
        }
        Element::ScaleX | Element::ScaleY | Element::ScaleZ => {
            let h = gizmo::SCALE_TIP_HALF_EXTENT;
            let mut min = Vec3::splat(-h);
            let mut max = Vec3::splat(h);
            let i = element.axis_index()?;
            min[i] = gizmo::SHAFT_START;
            max[i] = gizmo::SCALE_TIP_END;
            ray_aabb_intersection(origin, dir, min, max)
        }
    }
}

/// Find the element of `kind` hit first by a local-frame ray.
///
/// Returns the element with the smallest ray parameter. Earlier elements in
/// [`HandleKind::elements`] win exact ties.
pub fn pick(kind: HandleKind, ray: &Ray) -> Option<(Element, f32)> {
    let mut closest: Option<(Element, f32)> = None;

    for &element in kind.elements() {
        if let Some(t) = element_intersection(element, ray)
            && closest.is_none_or(|(_, best)| t < best)
        {
            closest = Some((element, t));
        }
    }

    closest
}
