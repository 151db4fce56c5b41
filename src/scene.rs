//! Immutable scene description for a single render.
//!
//! A [`Scene`] is assembled through [`SceneBuilder`] from already validated
//! spheres, triangles and lights. Once built it is never mutated, so it can be
//! shared by reference across rendering threads.

use log::debug;

use crate::hittable::{self, HitMode, HitRecord, Primitive};
use crate::interval::Interval;
use crate::light::Light;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::triangle::Triangle;
use crate::vector::Color;

/// Objects, lights and background color of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    objects: Vec<Primitive>,
    lights: Vec<Light>,
    background: Color,
}

impl Scene {
    /// Start building a scene with the given background color.
    pub fn builder(background: Color) -> SceneBuilder {
        SceneBuilder {
            objects: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Every object, in insertion order.
    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> impl Iterator<Item = &Sphere> {
        self.objects.iter().filter_map(|object| match object {
            Primitive::Sphere(sphere) => Some(sphere),
            Primitive::Triangle(_) => None,
        })
    }

    /// Triangles in insertion order.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.objects.iter().filter_map(|object| match object {
            Primitive::Triangle(triangle) => Some(triangle),
            Primitive::Sphere(_) => None,
        })
    }

    /// All lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Color returned for rays that escape the scene.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Intersect `r` with the scene; see [`hittable::closest_intersection`].
    pub fn closest_intersection(&self, r: &Ray, ray_t: Interval, mode: HitMode) -> Option<HitRecord<'_>> {
        hittable::closest_intersection(&self.objects, r, ray_t, mode)
    }
}

/// Incremental builder for [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    objects: Vec<Primitive>,
    lights: Vec<Light>,
    background: Color,
}

impl SceneBuilder {
    /// Add a sphere.
    pub fn sphere(mut self, sphere: Sphere) -> Self {
        self.objects.push(Primitive::Sphere(sphere));
        self
    }

    /// Add a triangle.
    pub fn triangle(mut self, triangle: Triangle) -> Self {
        self.objects.push(Primitive::Triangle(triangle));
        self
    }

    /// Add a light.
    pub fn light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Freeze the scene.
    pub fn build(self) -> Scene {
        debug!(
            "Scene built: {} objects, {} lights",
            self.objects.len(),
            self.lights.len()
        );
        Scene {
            objects: self.objects,
            lights: self.lights,
            background: self.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use glam::Vec3A;

    #[test]
    fn test_builder_keeps_order_and_kinds() {
        let material = Material::matte(Color::splat(255.0)).unwrap();
        let scene = Scene::builder(Color::ZERO)
            .sphere(Sphere::new(Vec3A::new(0.0, 0.0, 3.0), 1.0, material).unwrap())
            .triangle(
                Triangle::new(
                    [Vec3A::new(1.0, 0.0, 5.0), Vec3A::new(0.0, 1.0, 5.0), Vec3A::new(-1.0, 0.0, 5.0)],
                    material,
                )
                .unwrap(),
            )
            .sphere(Sphere::new(Vec3A::new(0.0, 0.0, 8.0), 2.0, material).unwrap())
            .light(Light::ambient(Color::splat(0.2)).unwrap())
            .build();

        assert_eq!(scene.objects().len(), 3);
        assert_eq!(scene.spheres().count(), 2);
        assert_eq!(scene.triangles().count(), 1);
        assert_eq!(scene.spheres().nth(1).unwrap().radius, 2.0);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.background(), Color::ZERO);
    }

    #[test]
    fn test_scene_is_shareable_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Scene>();
    }
}
