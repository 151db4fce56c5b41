//! Local illumination with hard shadows.
//!
//! Diffuse light follows Lambert's cosine law and highlights follow Phong's
//! reflected-light model. Every non-ambient light is first checked for an
//! occluder between the shaded point and the light; a blocked light adds
//! nothing at all.

use glam::Vec3A;

use crate::hittable::HitMode;
use crate::interval::Interval;
use crate::light::Light;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{self, Color};

/// Minimum `t` for rays leaving a surface, so they do not hit the surface
/// they start on.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// Per-channel light arriving at `point` and reflected towards `view`.
///
/// `normal` is the surface normal at `point`, `view` points from the surface
/// back towards the viewer, and `specular` is the surface's exponent (`None`
/// for no highlight). The result multiplies the surface color.
pub fn compute_lighting(
    scene: &Scene,
    point: Vec3A,
    normal: Vec3A,
    view: Vec3A,
    specular: Option<f32>,
) -> Color {
    let mut total = Color::ZERO;

    for light in scene.lights() {
        let (intensity, l, shadow_t) = match *light {
            Light::Ambient { intensity } => {
                total += intensity;
                continue;
            }
            // Occluders beyond a point light do not block it
            Light::Point { intensity, position } => {
                (intensity, position - point, Interval::new(SURFACE_EPSILON, 1.0))
            }
            Light::Directional { intensity, direction } => {
                (intensity, direction, Interval::from_min(SURFACE_EPSILON))
            }
        };

        // Shaded point coincides with the light
        if l.length_squared() == 0.0 {
            continue;
        }

        let shadow_ray = Ray::new(point, l);
        if scene
            .closest_intersection(&shadow_ray, shadow_t, HitMode::Any)
            .is_some()
        {
            continue;
        }

        if let Some(cos) = vector::cos_between(normal, l) {
            if cos > 0.0 {
                total += intensity * cos;
            }
        }

        if let Some(exponent) = specular {
            let r = vector::reflect(l, normal);
            if let Some(cos) = vector::cos_between(r, view) {
                if cos > 0.0 {
                    total += intensity * cos.powf(exponent);
                }
            }
        }
    }

    total
}
