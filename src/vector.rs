//! Vector helpers on top of `glam::Vec3A`.
//!
//! Addition, subtraction, scaling, dot and cross products and magnitude are
//! the plain glam operators. This module adds the operations whose degenerate
//! inputs need an explicit policy: a zero-length vector has no direction, so
//! [`normalize`] and [`cos_between`] report it as `None` instead of producing
//! NaN.

use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are unbounded while shading; they are only clamped to the 0-255
/// display range when a pixel is written.
pub type Color = Vec3A;

/// Squared lengths below this are treated as zero.
const MIN_LENGTH_SQUARED: f32 = 1e-12;

/// Scale `v` to unit length.
///
/// Returns `None` for zero-length or non-finite vectors.
pub fn normalize(v: Vec3A) -> Option<Vec3A> {
    let length_squared = v.length_squared();
    if !length_squared.is_finite() || length_squared < MIN_LENGTH_SQUARED {
        return None;
    }
    Some(v / length_squared.sqrt())
}

/// Mirror `ray` about `normal`: `2 * dot(normal, ray) * normal - ray`.
///
/// `ray` points away from the surface (towards the light or the viewer), so
/// the result also points away from the surface.
pub fn reflect(ray: Vec3A, normal: Vec3A) -> Vec3A {
    2.0 * normal.dot(ray) * normal - ray
}

/// Cosine of the angle between `a` and `b`.
///
/// Returns `None` when either vector has zero length.
pub fn cos_between(a: Vec3A, b: Vec3A) -> Option<f32> {
    let denominator = a.length() * b.length();
    if !denominator.is_finite() || denominator * denominator < MIN_LENGTH_SQUARED {
        return None;
    }
    Some(a.dot(b) / denominator)
}
