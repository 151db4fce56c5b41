//! Sphere primitive for ray tracing.
//!
//! Intersection solves the full quadratic and hands both roots back to the
//! caller, which picks the nearest one inside its parameter range.

use glam::Vec3A;

use crate::error::{Result, SceneError};
use crate::material::Material;
use crate::ray::Ray;
use crate::vector;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere, always positive.
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails for a non-positive radius or a non-finite center.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Result<Self> {
        if !center.is_finite() {
            return Err(SceneError::NonFinite("sphere center"));
        }
        if !radius.is_finite() {
            return Err(SceneError::NonFinite("sphere radius"));
        }
        if radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Both ray parameters where the ray crosses the sphere surface.
    ///
    /// Substituting r(t) into |p - center|² = r² gives a·t² + b·t + c = 0 with
    /// `CO = origin - center`, `a = D·D`, `b = 2·CO·D`, `c = CO·CO - r²`.
    /// Returns `None` when the discriminant is negative or the direction is
    /// zero; a tangent ray yields two equal roots.
    pub fn intersect(&self, r: &Ray) -> Option<(f32, f32)> {
        let co = r.origin - self.center;

        let a = r.direction.dot(r.direction);
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * co.dot(r.direction);
        let c = co.dot(co) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || !discriminant.is_finite() {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);
        Some((t1, t2))
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: Vec3A) -> Option<Vec3A> {
        vector::normalize(p - self.center)
    }
}
