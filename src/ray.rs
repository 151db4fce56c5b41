//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// This is the camera position for primary rays, or a surface point for
    /// shadow and reflection rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized. Primary rays point at the projection
    /// plane, so `t = 1` lands on the viewport; shadow rays towards a point
    /// light span the whole segment to the light over `t ∈ [0, 1]`.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }

    /// True if the ray cannot be traced: non-finite components or a
    /// zero-length direction.
    pub fn is_degenerate(&self) -> bool {
        !self.origin.is_finite()
            || !self.direction.is_finite()
            || self.direction.length_squared() == 0.0
    }
}
