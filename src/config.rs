//! Scene description files.
//!
//! Scenes are written in TOML and converted into validated [`Scene`],
//! [`Camera`] and [`Canvas`] values. Everything the tracer sees goes through
//! the same constructors as hand-built scenes, so a file cannot describe an
//! invalid scene.
//!
//! ```toml
//! background = [0, 0, 0]
//!
//! [camera]
//! position = [0, 0, 0]
//! max_depth = 3
//!
//! [canvas]
//! width = 600
//! height = 600
//!
//! [[spheres]]
//! center = [0, -1, 3]
//! radius = 1
//! color = [255, 0, 0]
//! specular = 500
//! reflective = 0.2
//!
//! [[lights]]
//! type = "point"
//! intensity = 0.6
//! position = [2, 1, 0]
//! ```

use std::path::Path;

use glam::Vec3A;
use log::debug;
use serde::Deserialize;

use crate::camera::Camera;
use crate::canvas::Canvas;
use crate::error::{ConfigError, Result as SceneResult};
use crate::light::Light;
use crate::material::Material;
use crate::scene::Scene;
use crate::sphere::Sphere;
use crate::triangle::Triangle;
use crate::vector::Color;

/// Scene shipped with the binary, used when no file is given.
pub const SHOWCASE: &str = include_str!("../scenes/showcase.toml");

/// Specular value that disables highlights, kept for older scene files.
pub const SPECULAR_DISABLED: f32 = -1.0;

/// Root of a scene file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Color of rays that escape the scene, 0-255 per channel.
    #[serde(default)]
    pub background: [f32; 3],
    /// Camera and viewport.
    #[serde(default)]
    pub camera: CameraConfig,
    /// Output raster size.
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Spheres, in order.
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
    /// Triangles, in order.
    #[serde(default)]
    pub triangles: Vec<TriangleConfig>,
    /// Lights, in order.
    #[serde(default)]
    pub lights: Vec<LightConfig>,
}

/// `[camera]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Camera position.
    pub position: [f32; 3],
    /// Viewport width in world units.
    pub viewport_width: f32,
    /// Viewport height in world units.
    pub viewport_height: f32,
    /// Distance from the camera to the viewport.
    pub projection_plane_d: f32,
    /// Maximum number of mirror bounces.
    pub max_depth: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            position: camera.position.to_array(),
            viewport_width: camera.viewport_width,
            viewport_height: camera.viewport_height,
            projection_plane_d: camera.projection_plane_d,
            max_depth: camera.max_depth,
        }
    }
}

/// `[canvas]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
        }
    }
}

/// `[[spheres]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    /// Sphere center.
    pub center: [f32; 3],
    /// Sphere radius, positive.
    pub radius: f32,
    /// Base color, 0-255 per channel.
    pub color: [f32; 3],
    /// Specular exponent. Omitted or `-1` disables highlights.
    #[serde(default)]
    pub specular: Option<f32>,
    /// Mirror weight in [0, 1], matte by default.
    #[serde(default)]
    pub reflective: f32,
}

/// `[[triangles]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriangleConfig {
    /// Clockwise as seen from the lit side.
    pub vertices: [[f32; 3]; 3],
    /// Base color, 0-255 per channel.
    pub color: [f32; 3],
    /// Specular exponent. Omitted or `-1` disables highlights.
    #[serde(default)]
    pub specular: Option<f32>,
    /// Mirror weight in [0, 1], matte by default.
    #[serde(default)]
    pub reflective: f32,
}

fn surface_material(color: [f32; 3], specular: Option<f32>, reflective: f32) -> SceneResult<Material> {
    let specular = specular.filter(|s| *s != SPECULAR_DISABLED);
    Material::new(Color::from_array(color), specular, reflective)
}

/// Light intensity: one value for all channels, or one per channel.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Intensity {
    /// Same intensity on every channel.
    Uniform(f32),
    /// Red, green and blue intensities.
    Rgb([f32; 3]),
}

impl From<Intensity> for Color {
    fn from(intensity: Intensity) -> Self {
        match intensity {
            Intensity::Uniform(value) => Color::splat(value),
            Intensity::Rgb(channels) => Color::from_array(channels),
        }
    }
}

/// `[[lights]]` entry, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum LightConfig {
    /// Uniform fill light.
    Ambient { intensity: Intensity },
    /// Light at a world-space position.
    Point {
        intensity: Intensity,
        position: [f32; 3],
    },
    /// Light from a fixed direction (surface towards light).
    Directional {
        intensity: Intensity,
        direction: [f32; 3],
    },
}

impl LightConfig {
    fn to_light(&self) -> SceneResult<Light> {
        match self {
            LightConfig::Ambient { intensity } => Light::ambient((*intensity).into()),
            LightConfig::Point {
                intensity,
                position,
            } => Light::point((*intensity).into(), Vec3A::from_array(*position)),
            LightConfig::Directional {
                intensity,
                direction,
            } => Light::directional((*intensity).into(), Vec3A::from_array(*direction)),
        }
    }
}

/// Everything needed to render one frame.
#[derive(Debug, Clone)]
pub struct RenderSetup {
    /// Objects and lights.
    pub scene: Scene,
    /// Viewpoint and recursion depth.
    pub camera: Camera,
    /// Output raster size.
    pub canvas: Canvas,
}

impl SceneConfig {
    /// Parse a scene from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a scene file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        debug!("Loading scene from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The built-in showcase scene.
    pub fn showcase() -> Result<Self, ConfigError> {
        Self::parse(SHOWCASE)
    }

    /// Validate and convert into renderable values.
    pub fn build(&self) -> SceneResult<RenderSetup> {
        let mut builder = Scene::builder(Color::from_array(self.background));
        for sphere in &self.spheres {
            builder = builder.sphere(Sphere::new(
                Vec3A::from_array(sphere.center),
                sphere.radius,
                surface_material(sphere.color, sphere.specular, sphere.reflective)?,
            )?);
        }
        for triangle in &self.triangles {
            builder = builder.triangle(Triangle::new(
                triangle.vertices.map(Vec3A::from_array),
                surface_material(triangle.color, triangle.specular, triangle.reflective)?,
            )?);
        }
        for light in &self.lights {
            builder = builder.light(light.to_light()?);
        }

        let camera = Camera::new(
            Vec3A::from_array(self.camera.position),
            self.camera.viewport_width,
            self.camera.viewport_height,
            self.camera.projection_plane_d,
            self.camera.max_depth,
        )?;
        let canvas = Canvas::new(self.canvas.width, self.canvas.height)?;

        Ok(RenderSetup {
            scene: builder.build(),
            camera,
            canvas,
        })
    }
}
