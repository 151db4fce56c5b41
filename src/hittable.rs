//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives, the closed
//! [`Primitive`] variant the scene stores, and the scene-wide
//! [`closest_intersection`] query used for both visibility and shadows.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so pixels can be traced in parallel
/// against a shared scene.
pub trait Hittable: Sync + Send {
    /// Smallest ray parameter in `ray_t` where the ray meets the object.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<f32>;
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<f32> {
        let (t1, t2) = self.intersect(r)?;
        [t1, t2]
            .into_iter()
            .filter(|t| ray_t.admits(*t))
            .reduce(f32::min)
    }
}

impl Hittable for Triangle {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<f32> {
        self.intersect(r).filter(|t| ray_t.admits(*t))
    }
}

/// Any object a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A sphere.
    Sphere(Sphere),
    /// A flat triangle.
    Triangle(Triangle),
}

impl Primitive {
    /// Surface material of the object.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => &sphere.material,
            Primitive::Triangle(triangle) => &triangle.material,
        }
    }

    /// Unit surface normal at a point on the object.
    ///
    /// Spheres use the outward radial direction; triangles return their
    /// precomputed face normal regardless of `p`.
    pub fn normal_at(&self, p: Vec3A) -> Option<Vec3A> {
        match self {
            Primitive::Sphere(sphere) => sphere.normal_at(p),
            Primitive::Triangle(triangle) => Some(triangle.normal()),
        }
    }
}

impl Hittable for Primitive {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<f32> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(r, ray_t),
            Primitive::Triangle(triangle) => triangle.hit(r, ray_t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

/// How thoroughly [`closest_intersection`] searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitMode {
    /// Find the hit with the smallest `t`.
    Nearest,
    /// Stop at the first qualifying hit; only its existence is meaningful.
    Any,
}

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Object that was hit
    pub object: &'a Primitive,
    /// Ray parameter of the intersection point
    pub t: f32,
}

/// Intersect a ray with every object, keeping hits in `ray_t`.
///
/// In [`HitMode::Nearest`] the returned record has the smallest `t`; ties go
/// to the object listed first. In [`HitMode::Any`] the scan stops at the first
/// qualifying hit, which need not be the closest.
pub fn closest_intersection<'a>(
    objects: &'a [Primitive],
    r: &Ray,
    ray_t: Interval,
    mode: HitMode,
) -> Option<HitRecord<'a>> {
    let mut closest: Option<HitRecord<'a>> = None;

    for object in objects {
        let closest_so_far = closest.map_or(ray_t.max, |rec| rec.t);
        if let Some(t) = object.hit(r, ray_t.with_max(closest_so_far)) {
            closest = Some(HitRecord { object, t });
            if mode == HitMode::Any {
                break;
            }
        }
    }

    closest
}
