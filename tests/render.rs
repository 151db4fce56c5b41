//! End-to-end rendering scenarios against the public API.

use approx::assert_relative_eq;
use glam::Vec3A;
use image::Rgb;

use raycanvas::config::SceneConfig;
use raycanvas::interval::Interval;
use raycanvas::light::Light;
use raycanvas::material::Material;
use raycanvas::ray::Ray;
use raycanvas::sphere::Sphere;
use raycanvas::triangle::Triangle;
use raycanvas::vector::Color;
use raycanvas::{trace_ray, Camera, Canvas, Scene};

const RED: Color = Color::new(255.0, 0.0, 0.0);

fn primary(direction: Vec3A) -> Ray {
    Ray::new(Vec3A::ZERO, direction)
}

fn red_sphere(reflective: f32) -> Sphere {
    Sphere::new(Vec3A::new(0.0, -1.0, 3.0), 1.0, Material::new(RED, None, reflective).unwrap()).unwrap()
}

#[test]
fn test_red_sphere_straight_ahead_and_off_axis() {
    let scene = Scene::builder(Color::ZERO)
        .sphere(red_sphere(0.0))
        .light(Light::ambient(Color::ONE).unwrap())
        .build();

    let ahead = trace_ray(&scene, &primary(Vec3A::new(0.0, 0.0, 1.0)), Interval::from_min(1.0), 3);
    assert!(ahead.abs_diff_eq(RED, 1e-3));

    let off_axis = trace_ray(&scene, &primary(Vec3A::new(5.0, 5.0, 1.0)), Interval::from_min(1.0), 3);
    assert_eq!(off_axis, Color::ZERO);
}

#[test]
fn test_ambient_only_scales_color() {
    let a = 0.35;
    let scene = Scene::builder(Color::ZERO)
        .sphere(red_sphere(0.0))
        .light(Light::ambient(Color::splat(a)).unwrap())
        .build();

    let color = trace_ray(&scene, &primary(Vec3A::Z), Interval::from_min(1.0), 3);
    assert_relative_eq!(color.x, 255.0 * a, epsilon = 1e-3);
    assert_eq!(color.y, 0.0);
    assert_eq!(color.z, 0.0);
}

#[test]
fn test_misses_return_exact_background() {
    let background = Color::new(12.0, 34.0, 56.0);
    let scene = Scene::builder(background)
        .sphere(red_sphere(0.5))
        .light(Light::ambient(Color::ONE).unwrap())
        .build();

    for direction in [Vec3A::new(0.0, 1.0, 1.0), -Vec3A::Z, Vec3A::new(-3.0, 0.5, 1.0)] {
        let color = trace_ray(&scene, &primary(direction), Interval::from_min(1.0), 3);
        assert_eq!(color, background);
    }
}

/// Reflective sphere straight ahead of the camera and a green wall behind
/// the camera that only the reflection can see.
fn mirror_setup(reflective: f32) -> Scene {
    let green = Material::matte(Color::new(0.0, 255.0, 0.0)).unwrap();
    Scene::builder(Color::ZERO)
        .sphere(Sphere::new(Vec3A::new(0.0, 0.0, 3.0), 1.0, Material::new(RED, None, reflective).unwrap()).unwrap())
        .triangle(
            // Wall behind the camera
            Triangle::new(
                [
                    Vec3A::new(-10.0, -10.0, -4.0),
                    Vec3A::new(0.0, 10.0, -4.0),
                    Vec3A::new(10.0, -10.0, -4.0),
                ],
                green,
            )
            .unwrap(),
        )
        .light(Light::ambient(Color::splat(0.5)).unwrap())
        .build()
}

#[test]
fn test_reflectivity_boundaries() {
    let matte = trace_ray(&mirror_setup(0.0), &primary(Vec3A::Z), Interval::from_min(1.0), 3);
    assert!(matte.abs_diff_eq(RED * 0.5, 1e-3));

    let mirror = trace_ray(&mirror_setup(1.0), &primary(Vec3A::Z), Interval::from_min(1.0), 3);
    assert!(mirror.abs_diff_eq(Color::new(0.0, 127.5, 0.0), 1e-3));
}

#[test]
fn test_depth_zero_mirror_returns_local_shading() {
    let color = trace_ray(&mirror_setup(1.0), &primary(Vec3A::Z), Interval::from_min(1.0), 0);
    assert!(color.abs_diff_eq(RED * 0.5, 1e-3));
}

#[test]
fn test_blocked_point_light_kills_highlight() {
    // Shiny sphere lit from directly above; the blocker sits between the
    // top of the sphere and the light.
    let shiny = Material::new(Color::splat(255.0), Some(10.0), 0.0).unwrap();
    let matte = Material::matte(Color::splat(255.0)).unwrap();
    let light = Light::point(Color::ONE, Vec3A::new(0.0, 10.0, 3.0)).unwrap();

    let open = Scene::builder(Color::ZERO)
        .sphere(Sphere::new(Vec3A::new(0.0, -2.0, 3.0), 1.0, shiny).unwrap())
        .light(light)
        .build();
    let blocked = Scene::builder(Color::ZERO)
        .sphere(Sphere::new(Vec3A::new(0.0, -2.0, 3.0), 1.0, shiny).unwrap())
        .sphere(Sphere::new(Vec3A::new(0.0, 5.0, 3.0), 1.0, matte).unwrap())
        .light(light)
        .build();

    // Camera at the origin looking at the top of the shiny sphere
    let top = Vec3A::new(0.0, -1.0, 3.0);
    let ray = primary(top);

    let lit = trace_ray(&open, &ray, Interval::from_min(0.5), 0);
    assert!(lit.x > 100.0);

    let shadowed = trace_ray(&blocked, &ray, Interval::from_min(0.5), 0);
    assert_eq!(shadowed, Color::ZERO);
}

#[test]
fn test_triangle_interior_hit_and_edge_miss() {
    let tri = Triangle::new(
        [
            Vec3A::new(2.0, -1.0, 6.0),
            Vec3A::new(0.0, 2.0, 6.0),
            Vec3A::new(-2.0, -1.0, 6.0),
        ],
        Material::matte(RED).unwrap(),
    )
    .unwrap();
    let [v0, v1, v2] = *tri.vertices();
    let scene = Scene::builder(Color::ZERO)
        .triangle(tri)
        .light(Light::ambient(Color::ONE).unwrap())
        .build();

    let inside = 0.25 * v0 + 0.25 * v1 + 0.5 * v2;
    let color = trace_ray(&scene, &primary(inside), Interval::from_min(0.5), 0);
    assert!(color.abs_diff_eq(RED, 1e-3));

    let outside = 0.52 * v0 - 0.02 * v1 + 0.5 * v2;
    let color = trace_ray(&scene, &primary(outside), Interval::from_min(0.5), 0);
    assert_eq!(color, Color::ZERO);
}

#[test]
fn test_render_showcase_is_deterministic() {
    let setup = SceneConfig::showcase().unwrap().build().unwrap();
    let canvas = Canvas::new(48, 48).unwrap();

    let mut first = canvas.image();
    setup.camera.render(&setup.scene, &canvas, &mut first);
    let mut second = canvas.image();
    setup.camera.render(&setup.scene, &canvas, &mut second);

    assert_eq!(first, second);
    // Something other than background was drawn
    assert!(first.pixels().any(|p| *p != Rgb([0, 0, 0])));
}

#[test]
fn test_render_places_sphere_below_center() {
    let scene = Scene::builder(Color::ZERO)
        .sphere(red_sphere(0.0))
        .light(Light::ambient(Color::ONE).unwrap())
        .build();
    let canvas = Canvas::new(40, 40).unwrap();
    let mut image = canvas.image();
    Camera::default().render(&scene, &canvas, &mut image);

    // Sphere center projects to y = -1/3 of the viewport: lower half
    assert_eq!(*image.get_pixel(20, 30), Rgb([255, 0, 0]));
    assert_eq!(*image.get_pixel(20, 2), Rgb([0, 0, 0]));
}
