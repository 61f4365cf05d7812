//! Vector kernel on top of `glam::DVec3`.
//!
//! Everything here is a pure function of its arguments. The arithmetic is
//! delegated to `glam`; the wrappers name the operations the synthesizer is
//! written in terms of and add the checked normalization.

use config::constants::GlobalConfig;

use crate::error::{GeometryError, GeometryResult};

pub use glam::DVec3 as Vec3;

/// Componentwise sum.
///
/// # Examples
/// ```
/// use disc_geometry::vec3::{sum, Vec3};
/// assert_eq!(sum(Vec3::X, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
/// ```
#[inline]
pub fn sum(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Componentwise difference `a - b`.
#[inline]
pub fn diff(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Componentwise negation.
#[inline]
pub fn inv(a: Vec3) -> Vec3 {
    -a
}

/// Right-handed cross product. Parallel inputs give the zero vector.
///
/// # Examples
/// ```
/// use disc_geometry::vec3::{cross, Vec3};
/// assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
/// assert_eq!(cross(Vec3::X, Vec3::X * 2.0), Vec3::ZERO);
/// ```
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Dot product.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

/// Euclidean distance between two points.
///
/// # Examples
/// ```
/// use disc_geometry::vec3::{distance, Vec3};
/// assert_eq!(distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)), 5.0);
/// ```
#[inline]
pub fn distance(p: Vec3, q: Vec3) -> f64 {
    p.distance(q)
}

/// Arithmetic mean of three points.
#[inline]
pub fn centroid(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v0 + v1 + v2) / 3.0
}

/// Unnormalized triangle normal `(v1 - v0) x (v2 - v0)`.
///
/// Its length is twice the triangle area. Counter-clockwise winding seen
/// from outside gives an outward normal.
///
/// # Examples
/// ```
/// use disc_geometry::vec3::{triangle_normal, Vec3};
/// let n = triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert_eq!(n, Vec3::Z);
/// ```
#[inline]
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    cross(diff(v1, v0), diff(v2, v0))
}

/// Returns true if `v` has unit length within the default tolerance,
/// [`NORMALIZATION_TOLERANCE`](config::constants::NORMALIZATION_TOLERANCE).
#[inline]
pub fn is_normalized(v: Vec3) -> bool {
    GlobalConfig::default().is_unit_length(v.length())
}

/// Returns `v` scaled to unit length.
///
/// Fails with [`GeometryError::DegenerateVector`] when the length is zero or
/// not finite, or when the result misses unit length by more than the default
/// tolerance.
///
/// # Examples
/// ```
/// use disc_geometry::vec3::{normalize, Vec3};
/// let n = normalize(Vec3::new(0.0, 3.0, 4.0)).unwrap();
/// assert!((n.length() - 1.0).abs() < 1e-12);
/// assert!(normalize(Vec3::ZERO).is_err());
/// ```
pub fn normalize(v: Vec3) -> GeometryResult<Vec3> {
    normalize_with(v, &GlobalConfig::default())
}

/// [`normalize`] checked against the tolerance of `config`.
pub fn normalize_with(v: Vec3, config: &GlobalConfig) -> GeometryResult<Vec3> {
    let length = v.length();
    if length == 0.0 || !length.is_finite() {
        return Err(GeometryError::DegenerateVector { length });
    }
    let unit = v / length;
    if !config.is_unit_length(unit.length()) {
        return Err(GeometryError::DegenerateVector { length });
    }
    Ok(unit)
}
