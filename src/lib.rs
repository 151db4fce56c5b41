//! Raycanvas ray tracer
//!
//! Renders a small static scene of spheres, triangles and lights by casting
//! one ray per pixel, shading the nearest hit with Phong-style local lighting
//! and hard shadows, and blending in recursive mirror reflections.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod ray;
pub mod interval;
pub mod error;
pub mod material;
pub mod sphere;
pub mod triangle;
pub mod light;
pub mod hittable;
pub mod scene;
pub mod lighting;
pub mod tracer;
pub mod canvas;
pub mod camera;
pub mod config;
pub mod output;

pub use camera::Camera;
pub use canvas::{Canvas, PixelSink};
pub use error::{ConfigError, SceneError};
pub use scene::Scene;
pub use tracer::trace_ray;
