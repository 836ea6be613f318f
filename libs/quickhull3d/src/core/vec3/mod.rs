//! Thin wrapper around `glam::DVec3` shared across the engine.
//!
//! A point is a `Vec3` used as a position; both share the representation.
//! glam already provides add, subtract, scale, dot, cross, length and
//! distance. The helpers here cover what the hull needs beyond that.

use config::constants::DOUBLE_PREC;

pub use glam::DVec3 as Vec3;

/// Normalizes `v`, leaving it untouched when its squared length is already
/// within `2 * DOUBLE_PREC` of one.
///
/// Repeated normalization of a unit normal therefore never drifts.
///
/// # Examples
/// ```
/// use quickhull3d::core::vec3::{normalize, Vec3};
/// let n = normalize(Vec3::new(0.0, 3.0, 4.0));
/// assert!((n.length() - 1.0).abs() < 1e-15);
/// assert_eq!(normalize(Vec3::X), Vec3::X);
/// ```
pub fn normalize(v: Vec3) -> Vec3 {
    let len_sqr = v.length_squared();
    let err = len_sqr - 1.0;
    if err > 2.0 * DOUBLE_PREC || err < -(2.0 * DOUBLE_PREC) {
        v / len_sqr.sqrt()
    } else {
        v
    }
}

/// Squared distance from `p` to the infinite line through `origin` with unit
/// direction `dir`, together with the cross product used to measure it.
///
/// The cross product is the (unnormalized) normal of the plane spanned by the
/// line and `p`.
///
/// # Examples
/// ```
/// use quickhull3d::core::vec3::{line_distance_squared, Vec3};
/// let (d2, _) = line_distance_squared(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, Vec3::X);
/// assert_eq!(d2, 4.0);
/// ```
pub fn line_distance_squared(p: Vec3, origin: Vec3, dir: Vec3) -> (f64, Vec3) {
    let xprod = dir.cross(p - origin);
    (xprod.length_squared(), xprod)
}

/// Sum over the three axes of the largest absolute coordinate of the box
/// `[min, max]`.
///
/// # Examples
/// ```
/// use quickhull3d::core::vec3::{coordinate_magnitude, Vec3};
/// let m = coordinate_magnitude(Vec3::new(-2.0, 0.0, -1.0), Vec3::new(1.0, 3.0, 0.5));
/// assert_eq!(m, 2.0 + 3.0 + 1.0);
/// ```
pub fn coordinate_magnitude(min: Vec3, max: Vec3) -> f64 {
    max.abs().max(min.abs()).element_sum()
}
