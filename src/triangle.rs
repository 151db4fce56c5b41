//! Triangle primitive for ray tracing.
//!
//! The ray is first intersected with the triangle's plane, then the hit point
//! is classified with sub-area ratios: each vertex weight is the area of the
//! sub-triangle opposite that vertex divided by the full area.

use glam::Vec3A;

use crate::error::{Result, SceneError};
use crate::material::Material;
use crate::ray::Ray;
use crate::vector;

/// Slack allowed on the sum of the unsigned sub-area ratios.
pub const BARYCENTRIC_TOLERANCE: f32 = 1e-4;

/// Flat triangle defined by three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vec3A; 3],
    normal: Vec3A,
    /// Material properties determining light interaction.
    pub material: Material,
}

impl Triangle {
    /// Create a triangle and precompute its face normal.
    ///
    /// The normal is `normalize((v2 - v0) × (v1 - v0))`: vertices listed
    /// clockwise as seen by the viewer give a normal facing the viewer.
    /// Winding is the caller's responsibility; the normal is never flipped
    /// per hit.
    pub fn new(vertices: [Vec3A; 3], material: Material) -> Result<Self> {
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(SceneError::NonFinite("triangle vertex"));
        }

        let [v0, v1, v2] = vertices;
        let e1 = v1 - v0;
        let e2 = v2 - v0;
        let face = e2.cross(e1);

        // |e1 × e2|² = |e1|²|e2|² sin²θ, so this bounds the angle between edges
        if face.length_squared() <= f32::EPSILON * e1.length_squared() * e2.length_squared() {
            return Err(SceneError::DegenerateTriangle);
        }
        let normal = vector::normalize(face).ok_or(SceneError::DegenerateTriangle)?;

        Ok(Self {
            vertices,
            normal,
            material,
        })
    }

    /// The three vertices in construction order.
    pub fn vertices(&self) -> &[Vec3A; 3] {
        &self.vertices
    }

    /// Unit face normal, fixed at construction.
    pub fn normal(&self) -> Vec3A {
        self.normal
    }

    /// Ray parameter of the hit, if the ray crosses the triangle at `t >= 0`.
    ///
    /// Misses when the ray runs parallel to the plane, the plane lies behind
    /// the origin, or the plane hit falls outside the triangle.
    pub fn intersect(&self, r: &Ray) -> Option<f32> {
        let [v0, _, _] = self.vertices;

        let denominator = r.direction.dot(self.normal);
        if denominator == 0.0 {
            return None;
        }
        let t = (v0 - r.origin).dot(self.normal) / denominator;
        if !t.is_finite() || t < 0.0 {
            return None;
        }

        // Unsigned sub-areas cover the face exactly once only for points
        // inside it; outside an edge they overcount by twice the excess.
        let coverage: f32 = self.barycentric(r.at(t)).iter().map(|w| w.abs()).sum();

        if (coverage - 1.0).abs() <= BARYCENTRIC_TOLERANCE {
            Some(t)
        } else {
            None
        }
    }

    /// Weights of `p` with respect to v0, v1 and v2.
    ///
    /// Each weight is the signed area of the sub-triangle opposite a vertex,
    /// divided by the area of the whole triangle. Points outside an edge get
    /// a negative weight for the vertex across that edge.
    pub fn barycentric(&self, p: Vec3A) -> [f32; 3] {
        let [v0, v1, v2] = self.vertices;
        let face = (v1 - v0).cross(v2 - v0);
        let area = face.length_squared();

        let (pa, pb, pc) = (v0 - p, v1 - p, v2 - p);
        [
            pb.cross(pc).dot(face) / area,
            pc.cross(pa).dot(face) / area,
            pa.cross(pb).dot(face) / area,
        ]
    }
}
