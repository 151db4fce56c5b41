//! Camera for ray generation and scene rendering

use std::time::Instant;

use glam::Vec3A;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::canvas::{quantize, Canvas, PixelSink};
use crate::error::{Result, SceneError};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer::trace_ray;
use crate::vector::Color;

/// Pinhole camera looking down +z through a viewport.
///
/// The viewport is a `viewport_width` x `viewport_height` rectangle centered
/// on the z axis at distance `projection_plane_d` from the camera; each pixel
/// of the canvas maps to one point on it and gets exactly one ray.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3A,
    /// Viewport width in world units
    pub viewport_width: f32,
    /// Viewport height in world units
    pub viewport_height: f32,
    /// Distance from the camera to the viewport
    pub projection_plane_d: f32,
    /// Maximum number of mirror bounces per primary ray
    pub max_depth: u32,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Default for Camera {
    /// Camera at the origin with a 1x1 viewport one unit away and three bounces.
    fn default() -> Self {
        Self {
            position: Vec3A::ZERO,
            viewport_width: 1.0,
            viewport_height: 1.0,
            projection_plane_d: 1.0,
            max_depth: 3,
            show_progress: false,
        }
    }
}

impl Camera {
    /// Create a camera, rejecting viewports that do not span any space.
    pub fn new(
        position: Vec3A,
        viewport_width: f32,
        viewport_height: f32,
        projection_plane_d: f32,
        max_depth: u32,
    ) -> Result<Self> {
        if !position.is_finite() {
            return Err(SceneError::NonFinite("camera position"));
        }
        for (name, value) in [
            ("viewport width", viewport_width),
            ("viewport height", viewport_height),
            ("projection plane distance", projection_plane_d),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::InvalidViewport(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(Self {
            position,
            viewport_width,
            viewport_height,
            projection_plane_d,
            max_depth,
            show_progress: false,
        })
    }

    /// Direction from the camera through the viewport point of logical pixel
    /// `(x, y)`.
    pub fn canvas_to_viewport(&self, canvas: &Canvas, x: i64, y: i64) -> Vec3A {
        Vec3A::new(
            x as f32 * self.viewport_width / canvas.width() as f32,
            y as f32 * self.viewport_height / canvas.height() as f32,
            self.projection_plane_d,
        )
    }

    /// Color of logical pixel `(x, y)`.
    ///
    /// Primary rays start at `t = 1`, the projection plane, so nothing between
    /// the camera and the viewport is visible.
    pub fn trace_pixel(&self, scene: &Scene, canvas: &Canvas, x: i64, y: i64) -> Color {
        let r = Ray::new(self.position, self.canvas_to_viewport(canvas, x, y));
        trace_ray(scene, &r, Interval::from_min(1.0), self.max_depth)
    }

    /// Render every pixel of `canvas` into `sink`.
    ///
    /// Pixels are traced in parallel against the shared scene, then each one
    /// is clamped to 0-255 and written to the sink exactly once.
    pub fn render<S: PixelSink>(&self, scene: &Scene, canvas: &Canvas, sink: &mut S) {
        info!(
            "Rendering {}x{} using {} CPU cores, max depth {}",
            canvas.width(),
            canvas.height(),
            rayon::current_num_threads(),
            self.max_depth
        );
        let generation_start = Instant::now();

        let pb = if self.show_progress {
            ProgressBar::new(canvas.pixel_count())
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
            pb.set_style(style);
        }

        let canvas = *canvas;
        let pixels: Vec<(u32, u32, Color)> = canvas
            .y_range()
            .into_par_iter()
            .flat_map_iter(|y| {
                let pb = &pb;
                canvas.x_range().filter_map(move |x| {
                    let color = self.trace_pixel(scene, &canvas, x, y);
                    pb.inc(1);
                    canvas
                        .to_raster(x, y)
                        .map(|(column, row)| (column, row, color))
                })
            })
            .collect();

        pb.finish_and_clear();

        for (column, row, color) in pixels {
            sink.set_pixel(column, row, quantize(color));
        }

        info!("Image generated in {:.2?}", generation_start.elapsed());
    }
}
