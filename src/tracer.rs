//! Recursive ray tracing.
//!
//! A traced ray resolves to the color of the nearest surface it hits: local
//! shading from [`compute_lighting`], blended with a mirror reflection traced
//! one level deeper when the surface is reflective.

use log::trace;

use crate::hittable::HitMode;
use crate::interval::Interval;
use crate::lighting::{compute_lighting, SURFACE_EPSILON};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{self, Color};

/// Color seen along `r` within `ray_t`.
///
/// `depth` is the number of mirror bounces still allowed. At depth 0 the
/// local shading is returned without recursing, whatever the reflectivity.
/// Rays that hit nothing, and degenerate rays, return the scene background.
pub fn trace_ray(scene: &Scene, r: &Ray, ray_t: Interval, depth: u32) -> Color {
    if r.is_degenerate() {
        trace!("Degenerate ray {:?}, using background", r);
        return scene.background();
    }

    let Some(rec) = scene.closest_intersection(r, ray_t, HitMode::Nearest) else {
        return scene.background();
    };

    let point = r.at(rec.t);
    let Some(normal) = rec.object.normal_at(point) else {
        trace!("No surface normal at {:?}, using background", point);
        return scene.background();
    };

    let material = rec.object.material();
    let view = -r.direction;
    let local = material.color * compute_lighting(scene, point, normal, view, material.specular);

    let reflective = material.reflective;
    if reflective <= 0.0 || depth == 0 {
        return local;
    }

    let reflected_ray = Ray::new(point, vector::reflect(view, normal));
    let reflected = trace_ray(scene, &reflected_ray, Interval::from_min(SURFACE_EPSILON), depth - 1);

    local * (1.0 - reflective) + reflected * reflective
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::material::Material;
    use crate::sphere::Sphere;
    use glam::Vec3A;

    const RED: Color = Color::new(255.0, 0.0, 0.0);
    const BLUE: Color = Color::new(0.0, 0.0, 255.0);
    const SKY: Color = Color::new(10.0, 20.0, 30.0);

    fn primary(direction: Vec3A) -> Ray {
        Ray::new(Vec3A::ZERO, direction)
    }

    /// Mirror sphere ahead of the camera, blue matte sphere behind the camera
    /// on the reflected path.
    fn mirror_scene(reflective: f32) -> Scene {
        Scene::builder(SKY)
            .sphere(Sphere::new(Vec3A::new(0.0, 0.0, 3.0), 1.0, Material::new(RED, None, reflective).unwrap()).unwrap())
            .sphere(Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 1.0, Material::matte(BLUE).unwrap()).unwrap())
            .light(Light::ambient(Color::splat(0.5)).unwrap())
            .build()
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = mirror_scene(0.5);
        let color = trace_ray(&scene, &primary(Vec3A::Y), Interval::from_min(1.0), 3);
        assert_eq!(color, SKY);
    }

    #[test]
    fn test_degenerate_ray_returns_background() {
        let scene = mirror_scene(0.5);
        let color = trace_ray(&scene, &primary(Vec3A::ZERO), Interval::from_min(1.0), 3);
        assert_eq!(color, SKY);

        let color = trace_ray(&scene, &primary(Vec3A::splat(f32::NAN)), Interval::from_min(1.0), 3);
        assert_eq!(color, SKY);
    }

    #[test]
    fn test_matte_surface_is_local_color() {
        let scene = mirror_scene(0.0);
        let color = trace_ray(&scene, &primary(Vec3A::Z), Interval::from_min(1.0), 3);
        assert!(color.abs_diff_eq(RED * 0.5, 1e-3));
    }

    #[test]
    fn test_perfect_mirror_shows_only_reflection() {
        let scene = mirror_scene(1.0);
        let color = trace_ray(&scene, &primary(Vec3A::Z), Interval::from_min(1.0), 1);
        assert!(color.abs_diff_eq(BLUE * 0.5, 1e-3));
    }

    #[test]
    fn test_half_mirror_blends() {
        let scene = mirror_scene(0.25);
        let color = trace_ray(&scene, &primary(Vec3A::Z), Interval::from_min(1.0), 1);
        let expected = RED * 0.5 * 0.75 + BLUE * 0.5 * 0.25;
        assert!(color.abs_diff_eq(expected, 1e-3));
    }

    #[test]
    fn test_depth_zero_never_recurses() {
        let scene = mirror_scene(1.0);
        let color = trace_ray(&scene, &primary(Vec3A::Z), Interval::from_min(1.0), 0);
        assert!(color.abs_diff_eq(RED * 0.5, 1e-3));
    }

    #[test]
    fn test_reflection_escaping_scene_picks_up_background() {
        // Only the mirror: the bounce flies back past the camera into the sky
        let scene = Scene::builder(SKY)
            .sphere(Sphere::new(Vec3A::new(0.0, 0.0, 3.0), 1.0, Material::new(RED, None, 1.0).unwrap()).unwrap())
            .light(Light::ambient(Color::ONE).unwrap())
            .build();
        let color = trace_ray(&scene, &primary(Vec3A::Z), Interval::from_min(1.0), 5);
        assert!(color.abs_diff_eq(SKY, 1e-3));
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        let mirror = Material::new(Color::splat(255.0), None, 0.9).unwrap();
        let scene = Scene::builder(Color::ZERO)
            .sphere(Sphere::new(Vec3A::new(0.0, 0.0, 3.0), 1.0, mirror).unwrap())
            .sphere(Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 1.0, mirror).unwrap())
            .light(Light::ambient(Color::splat(0.1)).unwrap())
            .build();

        let color = trace_ray(&scene, &primary(Vec3A::Z), Interval::from_min(0.0), 20);
        assert!(color.is_finite());
        assert!(color.x > 0.0);
    }
}
