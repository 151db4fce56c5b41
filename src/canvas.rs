//! Canvas geometry and pixel output.
//!
//! The renderer works in centered logical coordinates: `x` grows to the right,
//! `y` grows upwards, and the origin sits in the middle of the canvas. Display
//! surfaces index pixels from the top-left corner instead; [`Canvas::to_raster`]
//! converts between the two.

use image::{Rgb, RgbImage};

use crate::error::{Result, SceneError};
use crate::vector::Color;

/// Anything that can receive finished pixels.
///
/// Each pixel of a render is written exactly once, in no particular order.
pub trait PixelSink {
    /// Store the final color of the pixel at raster column `x`, row `y`.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>);
}

impl PixelSink for RgbImage {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        self.put_pixel(x, y, color);
    }
}

/// Dimensions of the target raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas of at least 1x1 pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidCanvas(width, height));
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Logical x range, left to right: `[-w/2, w - w/2)`.
    pub fn x_range(&self) -> std::ops::Range<i64> {
        let half = (self.width / 2) as i64;
        -half..self.width as i64 - half
    }

    /// Logical y range, bottom to top: `[-h/2, h - h/2)`.
    pub fn y_range(&self) -> std::ops::Range<i64> {
        let half = (self.height / 2) as i64;
        -half..self.height as i64 - half
    }

    /// Raster `(column, row)` of the logical point `(x, y)`.
    ///
    /// Returns `None` outside the canvas.
    pub fn to_raster(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let column = x + (self.width / 2) as i64;
        let row = (self.height - self.height / 2) as i64 - 1 - y;
        let column = u32::try_from(column).ok().filter(|c| *c < self.width)?;
        let row = u32::try_from(row).ok().filter(|r| *r < self.height)?;
        Some((column, row))
    }

    /// Blank image matching the canvas dimensions.
    pub fn image(&self) -> RgbImage {
        RgbImage::new(self.width, self.height)
    }
}

/// Clamp a shaded color to the 0-255 display range and round it.
///
/// NaN channels become 0.
pub fn quantize(color: Color) -> Rgb<u8> {
    let channel = |value: f32| -> u8 {
        if value.is_nan() {
            0
        } else {
            value.clamp(0.0, 255.0).round() as u8
        }
    };
    Rgb([channel(color.x), channel(color.y), channel(color.z)])
}
